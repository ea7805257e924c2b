//! Mobile navigation drawer and its backdrop.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::drawer::DrawerState;

/// Slide-in navigation panel for mobile widths.
///
/// Panel and backdrop render their visibility from the same flag, so the
/// pair opens and closes together. Clicking the backdrop dismisses the
/// drawer, as does the close button or navigating through any of its links.
#[component]
pub fn SideDrawer() -> impl IntoView {
    let drawer = expect_context::<RwSignal<DrawerState>>();

    let is_open = move || drawer.get().open;
    let on_toggle = move |_| drawer.update(DrawerState::toggle);

    view! {
        <div class="backdrop" class:open=is_open on:click=on_toggle></div>
        <aside class="side-drawer" class:open=is_open>
            <button class="side-drawer__close" aria-label="Close menu" on:click=on_toggle>
                "\u{00d7}"
            </button>
            <nav class="side-drawer__links">
                <NavLink target="home" label="Home"/>
                <NavLink target="about" label="About"/>
                <NavLink target="projects" label="Projects"/>
                <NavLink target="contact" label="Contact"/>
            </nav>
            <ThemeToggle class="theme-toggle side-drawer__theme"/>
        </aside>
    }
}
