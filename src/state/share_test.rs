use super::*;

// =============================================================
// Activation / revert
// =============================================================

#[test]
fn share_starts_idle() {
    assert_eq!(ShareState::default().phase, SharePhase::Idle);
}

#[test]
fn activate_shows_the_confirmation() {
    let mut state = ShareState::default();
    state.activate();
    assert_eq!(state.phase, SharePhase::Copied);
}

#[test]
fn revert_with_current_token_restores_idle() {
    let mut state = ShareState::default();
    let token = state.activate();
    assert!(state.revert(token));
    assert_eq!(state.phase, SharePhase::Idle);
}

// =============================================================
// Rapid re-activation resets the timer
// =============================================================

#[test]
fn stale_revert_does_not_clear_a_newer_confirmation() {
    let mut state = ShareState::default();
    let first = state.activate();
    let second = state.activate();

    // The first activation's timer fires while the second confirmation
    // is still up; it must be ignored.
    assert!(!state.revert(first));
    assert_eq!(state.phase, SharePhase::Copied);

    assert!(state.revert(second));
    assert_eq!(state.phase, SharePhase::Idle);
}

#[test]
fn revert_after_reactivation_needs_the_new_token() {
    let mut state = ShareState::default();
    let first = state.activate();
    assert!(state.revert(first));

    let second = state.activate();
    assert!(!state.revert(first));
    assert_eq!(state.phase, SharePhase::Copied);
    assert!(state.revert(second));
}
