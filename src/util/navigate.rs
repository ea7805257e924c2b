//! Smooth in-page navigation.
//!
//! Clicking a section link suppresses the default jump and routes here: the
//! drawer closes if it was open, the section scrolls smoothly to the top of
//! the viewport, and the navigation highlight moves at once instead of
//! waiting for the scroll animation to carry the section into the
//! intersection trigger band.

use leptos::prelude::RwSignal;

use crate::state::drawer::DrawerState;
use crate::state::nav::NavState;

/// Navigate to the section whose element id is `id`.
///
/// An empty id or a section that is not in the document is a no-op.
pub fn go_to_section(id: &str, drawer: RwSignal<DrawerState>, nav: RwSignal<NavState>) {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::{GetUntracked, Update};

        if id.is_empty() {
            return;
        }
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(section) = doc.get_element_by_id(id) else {
            return;
        };

        // Navigating from the mobile menu also dismisses it.
        if drawer.get_untracked().open {
            drawer.update(DrawerState::toggle);
        }

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);

        nav.update(|n| n.navigate_to(id));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, drawer, nav);
    }
}
