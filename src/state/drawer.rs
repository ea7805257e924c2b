#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

/// Open/closed state for the mobile navigation drawer.
///
/// The drawer panel and its backdrop both render their visibility from this
/// one flag, so the pair can never get out of sync.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
}

impl DrawerState {
    /// Flip the drawer (and therefore its backdrop) open or closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
