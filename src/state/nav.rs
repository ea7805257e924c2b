#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The single owner of the "active section" navigation highlight.
///
/// Two independent writers feed this state: the viewport intersection
/// observer (as the user scrolls) and programmatic navigation (when the user
/// clicks an in-page link). Both funnel through the same setter, so the most
/// recent write wins and every navigation surface reads one consistent value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    active_section: Option<String>,
}

impl NavState {
    /// A section scrolled into the viewport trigger band.
    pub fn enter_band(&mut self, id: &str) {
        self.active_section = Some(id.to_owned());
    }

    /// The user navigated to a section by clicking a link.
    ///
    /// Applied immediately, without waiting for the scroll animation to move
    /// the section into the trigger band.
    pub fn navigate_to(&mut self, id: &str) {
        self.active_section = Some(id.to_owned());
    }

    /// Whether the link targeting `id` should be styled as active.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }

    /// The currently highlighted section, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }
}
