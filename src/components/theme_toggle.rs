//! Theme toggle button with sun/moon icons.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeState};

/// Button flipping between the dark and gradient themes.
///
/// The sun icon shows while dark (inviting the brighter gradient mode), the
/// moon while gradient; the accessibility label always names the mode a
/// click would switch to. Mounted twice (navbar and drawer); both instances
/// follow the shared theme state.
#[component]
pub fn ThemeToggle(
    #[prop(default = "theme-toggle")]
    class: &'static str,
) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let label = move || theme.get().theme.toggle_label();
    let on_click = move |_| theme.update(ThemeState::toggle);
    let sun_display = move || {
        if theme.get().theme == Theme::Dark {
            "block"
        } else {
            "none"
        }
    };
    let moon_display = move || {
        if theme.get().theme == Theme::Dark {
            "none"
        } else {
            "block"
        }
    };

    view! {
        <button class=class aria-label=label title=label on:click=on_click>
            <svg
                class="icon-sun"
                style:display=sun_display
                width="20"
                height="20"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
            >
                <circle cx="12" cy="12" r="5"></circle>
                <line x1="12" y1="1" x2="12" y2="4"></line>
                <line x1="12" y1="20" x2="12" y2="23"></line>
                <line x1="1" y1="12" x2="4" y2="12"></line>
                <line x1="20" y1="12" x2="23" y2="12"></line>
                <line x1="4.2" y1="4.2" x2="6.3" y2="6.3"></line>
                <line x1="17.7" y1="17.7" x2="19.8" y2="19.8"></line>
                <line x1="4.2" y1="19.8" x2="6.3" y2="17.7"></line>
                <line x1="17.7" y1="6.3" x2="19.8" y2="4.2"></line>
            </svg>
            <svg
                class="icon-moon"
                style:display=moon_display
                width="20"
                height="20"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
            >
                <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
            </svg>
        </button>
    }
}
