use super::*;

#[test]
fn modal_starts_closed() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert!(state.project.is_none());
}

#[test]
fn open_known_id_stores_the_matching_record() {
    let mut state = ModalState::default();
    state.open("quickshop");
    let p = state.project.expect("modal should be open");
    assert_eq!(p.title, "QuickShop Inventory");
    assert!(state.is_open());
}

#[test]
fn open_unknown_id_is_a_no_op() {
    let mut state = ModalState::default();
    state.open("missing");
    assert!(!state.is_open());

    // An already-open modal keeps its project too.
    state.open("obsidian");
    state.open("missing");
    assert_eq!(state.project.map(|p| p.id), Some("obsidian"));
}

#[test]
fn close_clears_the_open_project() {
    let mut state = ModalState::default();
    state.open("obsidian");
    state.close();
    assert!(!state.is_open());
}
