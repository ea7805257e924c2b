use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn nav_state_starts_with_no_active_section() {
    let state = NavState::default();
    assert_eq!(state.active_section(), None);
    assert!(!state.is_active("home"));
}

// =============================================================
// Writers
// =============================================================

#[test]
fn enter_band_sets_the_active_section() {
    let mut state = NavState::default();
    state.enter_band("about");
    assert!(state.is_active("about"));
    assert_eq!(state.active_section(), Some("about"));
}

#[test]
fn navigate_to_sets_the_active_section_immediately() {
    let mut state = NavState::default();
    state.navigate_to("contact");
    assert!(state.is_active("contact"));
}

#[test]
fn last_writer_wins_across_both_triggers() {
    let mut state = NavState::default();
    state.enter_band("home");
    state.navigate_to("projects");
    assert!(state.is_active("projects"));
    assert!(!state.is_active("home"));

    // A later observer event overrides a click, and vice versa.
    state.enter_band("about");
    assert!(state.is_active("about"));
}

#[test]
fn at_most_one_section_is_active() {
    let mut state = NavState::default();
    let sections = ["home", "about", "projects", "contact"];
    for id in sections {
        state.enter_band(id);
        let active = sections.iter().filter(|s| state.is_active(s)).count();
        assert_eq!(active, 1);
    }
}
