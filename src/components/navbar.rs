//! Top navigation bar: brand, section links, theme toggle, menu button.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::drawer::DrawerState;

/// Fixed header navigation for desktop widths.
///
/// The menu button only matters on mobile, where the link row is hidden by
/// the stylesheet and the side drawer takes over.
#[component]
pub fn Navbar() -> impl IntoView {
    let drawer = expect_context::<RwSignal<DrawerState>>();
    let on_menu = move |_| drawer.update(DrawerState::toggle);

    view! {
        <header class="navbar">
            <NavLink target="home" label="Moyinks" class="navbar__brand"/>
            <nav class="navbar__links">
                <NavLink target="home" label="Home"/>
                <NavLink target="about" label="About"/>
                <NavLink target="projects" label="Projects"/>
                <NavLink target="contact" label="Contact"/>
            </nav>
            <div class="navbar__actions">
                <ThemeToggle/>
                <button class="navbar__menu" aria-label="Open menu" on:click=on_menu>
                    <svg
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                    >
                        <line x1="3" y1="6" x2="21" y2="6"></line>
                        <line x1="3" y1="12" x2="21" y2="12"></line>
                        <line x1="3" y1="18" x2="21" y2="18"></line>
                    </svg>
                </button>
            </div>
        </header>
    }
}
