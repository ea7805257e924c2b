use super::*;

#[test]
fn drawer_defaults_closed() {
    assert!(!DrawerState::default().open);
}

#[test]
fn drawer_toggle_flips_each_call() {
    let mut state = DrawerState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
}
