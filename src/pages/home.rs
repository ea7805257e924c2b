//! The single portfolio page: hero, about, projects, contact.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::components::project_card::ProjectCard;
use crate::components::share_button::ShareButton;
use crate::content;

/// All page sections in order. Each `<section>` carries the id that the
/// navigation links target and the scroll-spy reports.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <section id="home" class="hero">
                <h1 class="hero__title">"Moyin Olaniyi"</h1>
                <p class="hero__tagline">
                    "Frontend engineer building offline-first, privacy-minded web apps."
                </p>
                <div class="hero__actions">
                    <NavLink target="projects" label="View Projects" class="btn btn--primary"/>
                    <NavLink target="contact" label="Get in Touch" class="btn"/>
                    <ShareButton/>
                </div>
            </section>

            <section id="about" class="about">
                <h2>"About"</h2>
                <p>
                    "I design and ship progressive web apps that keep working when the \
                     network does not: client-side encryption, optimistic interfaces, \
                     and background sync are the recurring themes across my work."
                </p>
            </section>

            <section id="projects" class="projects">
                <h2>"Projects"</h2>
                <div class="project-grid">
                    {content::PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <p>
                    "Want to build something together? "
                    <a href="mailto:hello@moyinks.dev">"hello@moyinks.dev"</a>
                </p>
                <p>
                    <a href="https://github.com/Moyinks" target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                </p>
            </section>
        </main>
    }
}
