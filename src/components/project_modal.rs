//! Project detail overlay.

use leptos::prelude::*;

use crate::state::modal::ModalState;
use crate::util::scroll_lock;

/// Full-screen overlay rendering the open project's record verbatim.
///
/// Closes on the close button or on a click on the backdrop region; clicks
/// inside the content area stop propagating and never reach the backdrop
/// handler. The live-demo and source links are ordinary external links;
/// in-page navigation interception never applies here.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    // Background scrolling is suppressed exactly while the overlay is open.
    Effect::new(move |_| scroll_lock::set(modal.get().is_open()));

    let on_close = move |_| modal.update(ModalState::close);

    view! {
        <div
            class="project-modal"
            class:open=move || modal.get().is_open()
            on:click=move |_| modal.update(ModalState::close)
        >
            <div class="project-modal__content" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="project-modal__close"
                    aria-label="Close project details"
                    on:click=on_close
                >
                    "\u{00d7}"
                </button>
                {move || {
                    modal
                        .get()
                        .project
                        .map(|p| {
                            view! {
                                <img
                                    class="project-modal__hero"
                                    src=p.hero_image
                                    alt=format!("{} screenshot", p.title)
                                />
                                <h2 class="project-modal__title">{p.title}</h2>
                                <div class="project-modal__tags">
                                    {p
                                        .tags
                                        .iter()
                                        .copied()
                                        .map(|tag| view! { <span>{tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <h4>"Problem"</h4>
                                <p>{p.problem}</p>
                                <h4>"Solution"</h4>
                                <p>{p.solution}</p>
                                <h4>"Impact"</h4>
                                <p>{p.impact}</p>
                                <div class="project-modal__links">
                                    <a href=p.live_url target="_blank" rel="noreferrer">
                                        "Live Demo"
                                    </a>
                                    <a href=p.source_url target="_blank" rel="noreferrer">
                                        "View Source"
                                    </a>
                                </div>
                                <div class="project-modal__images">
                                    {p
                                        .screenshots
                                        .iter()
                                        .copied()
                                        .map(|src| {
                                            view! {
                                                <img
                                                    src=src
                                                    alt=format!("{} screenshot", p.title)
                                                    loading="lazy"
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
