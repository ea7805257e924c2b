//! Root application component wiring state, effects, and page chrome.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::dock::Dock;
use crate::components::navbar::Navbar;
use crate::components::project_modal::ProjectModal;
use crate::components::side_drawer::SideDrawer;
use crate::pages::home::HomePage;
use crate::state::drawer::DrawerState;
use crate::state::modal::ModalState;
use crate::state::nav::NavState;
use crate::state::share::ShareState;
use crate::state::theme::ThemeState;
use crate::util::{scroll_spy, theme_pref};

/// Root application component.
///
/// Creates one signal per state domain, provides them via context, and
/// installs the two page-level effects: theme application (load + every
/// toggle) and scroll-spy startup once the sections are mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState {
        theme: theme_pref::read_preference(),
    });
    let drawer = RwSignal::new(DrawerState::default());
    let nav = RwSignal::new(NavState::default());
    let modal = RwSignal::new(ModalState::default());
    let share = RwSignal::new(ShareState::default());

    provide_context(theme);
    provide_context(drawer);
    provide_context(nav);
    provide_context(modal);
    provide_context(share);

    // Apply and persist the theme on load and on every toggle.
    Effect::new(move |_| theme_pref::apply(theme.get().theme));

    // Passive section observation runs for the rest of the page's lifetime.
    Effect::new(move |_| scroll_spy::start(nav));

    view! {
        <Title text="Moyin Olaniyi | Portfolio"/>

        <Navbar/>
        <SideDrawer/>
        <HomePage/>
        <Dock/>
        <ProjectModal/>
    }
}
