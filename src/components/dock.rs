//! Compact bottom dock navigation for small screens.

use leptos::prelude::*;

use crate::components::nav_link::NavLink;

/// Bottom dock with one item per section.
///
/// A second navigation surface over the same active-section state as the
/// navbar, so the highlight stays consistent wherever the user looks.
#[component]
pub fn Dock() -> impl IntoView {
    view! {
        <nav class="dock">
            <NavLink target="home" label="Home" class="dock-item"/>
            <NavLink target="about" label="About" class="dock-item"/>
            <NavLink target="projects" label="Work" class="dock-item"/>
            <NavLink target="contact" label="Contact" class="dock-item"/>
        </nav>
    }
}
