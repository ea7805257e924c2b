//! Copy-link share button with a transient confirmation state.

use leptos::prelude::*;

use crate::state::share::{SharePhase, ShareState};

/// Button that copies the page URL to the clipboard.
///
/// On success the content swaps to a check icon and "Copied!" for the revert
/// delay, then falls back to the idle content. A failed copy is logged and
/// leaves the button untouched. Re-clicking during the confirmation restarts
/// the window; the stale timer's revert carries an outdated token and is
/// ignored by the state machine.
#[component]
pub fn ShareButton() -> impl IntoView {
    let share = expect_context::<RwSignal<ShareState>>();

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::util::clipboard::copy_current_url().await {
                    Ok(()) => {
                        let Some(token) = share.try_update(ShareState::activate) else {
                            return;
                        };
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            crate::state::share::REVERT_DELAY_MS,
                        ))
                        .await;
                        share.update(|s| {
                            s.revert(token);
                        });
                    }
                    Err(e) => leptos::logging::error!("copy link failed: {e}"),
                }
            });
        }
    };

    let copied = move || share.get().phase == SharePhase::Copied;

    view! {
        <button class="share-btn" class:copied=copied on:click=on_click>
            <Show
                when=copied
                fallback=|| {
                    view! {
                        <svg
                            width="20"
                            height="20"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                        >
                            <circle cx="18" cy="5" r="3"></circle>
                            <circle cx="6" cy="12" r="3"></circle>
                            <circle cx="18" cy="19" r="3"></circle>
                            <line x1="8.6" y1="13.5" x2="15.4" y2="17.5"></line>
                            <line x1="15.4" y1="6.5" x2="8.6" y2="10.5"></line>
                        </svg>
                        "Share"
                    }
                }
            >
                <svg
                    width="20"
                    height="20"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                >
                    <polyline points="20 6 9 17 4 12"></polyline>
                </svg>
                "Copied!"
            </Show>
        </button>
    }
}
