//! Project summary card for the projects grid.

use leptos::prelude::*;

use crate::content::Project;
use crate::state::modal::ModalState;

/// Card showing a project's hero image, title, and tags, with a button
/// opening the detail modal for that project.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let on_read_more = move |_| modal.update(|m| m.open(project.id));

    view! {
        <article class="project-card">
            <img
                class="project-card__hero"
                src=project.hero_image
                alt=format!("{} screenshot", project.title)
            />
            <h3 class="project-card__title">{project.title}</h3>
            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .copied()
                    .map(|tag| view! { <span>{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <button class="project-read-more" on:click=on_read_more>
                "Read More"
            </button>
        </article>
    }
}
