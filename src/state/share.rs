#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// How long the "Copied!" confirmation stays up before reverting.
pub const REVERT_DELAY_MS: u64 = 2000;

/// Visible state of the share control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SharePhase {
    #[default]
    Idle,
    Copied,
}

/// State machine for the copy-link share button.
///
/// Each successful copy bumps `generation`, and the revert timer that the
/// copy scheduled carries its generation as a token. A revert only takes
/// effect if its token is still current, so rapid repeated activation resets
/// the confirmation window instead of letting an old timer cut it short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShareState {
    pub phase: SharePhase,
    generation: u32,
}

impl ShareState {
    /// Record a successful copy and return the token the revert timer
    /// must present.
    pub fn activate(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = SharePhase::Copied;
        self.generation
    }

    /// Revert to the idle content if `token` belongs to the most recent
    /// activation. Returns whether the revert applied.
    pub fn revert(&mut self, token: u32) -> bool {
        if token == self.generation {
            self.phase = SharePhase::Idle;
            true
        } else {
            false
        }
    }
}
