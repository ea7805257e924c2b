//! In-page navigation link with smooth scrolling and active highlighting.

use leptos::prelude::*;

use crate::state::drawer::DrawerState;
use crate::state::nav::NavState;
use crate::util::navigate;

/// Anchor link to a page section.
///
/// Suppresses the default fragment jump and routes through the smooth
/// navigation path instead, which also dismisses an open drawer. The link
/// styles itself active while its target is the current section.
#[component]
pub fn NavLink(
    /// Element id of the target section.
    target: &'static str,
    /// Visible label.
    label: &'static str,
    /// CSS class for the surface this link lives on.
    #[prop(default = "nav-link")]
    class: &'static str,
) -> impl IntoView {
    let drawer = expect_context::<RwSignal<DrawerState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate::go_to_section(target, drawer, nav);
    };

    view! {
        <a
            href=format!("#{target}")
            class=class
            class:active=move || nav.get().is_active(target)
            on:click=on_click
        >
            {label}
        </a>
    }
}
