use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_storage_round_trip() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    assert_eq!(Theme::parse(Theme::Gradient.as_str()), Theme::Gradient);
}

#[test]
fn theme_parse_unknown_falls_back_to_dark() {
    assert_eq!(Theme::parse(""), Theme::Dark);
    assert_eq!(Theme::parse("light"), Theme::Dark);
    assert_eq!(Theme::parse("GRADIENT"), Theme::Dark);
}

#[test]
fn theme_toggled_flips_both_ways() {
    assert_eq!(Theme::Dark.toggled(), Theme::Gradient);
    assert_eq!(Theme::Gradient.toggled(), Theme::Dark);
}

#[test]
fn theme_toggle_labels_name_the_other_mode() {
    assert_eq!(Theme::Dark.toggle_label(), "Switch to gradient theme");
    assert_eq!(Theme::Gradient.toggle_label(), "Switch to dark theme");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn theme_state_defaults_to_dark() {
    assert_eq!(ThemeState::default().theme, Theme::Dark);
}

#[test]
fn theme_state_double_toggle_restores_original() {
    let mut state = ThemeState::default();
    let original = state.theme;
    state.toggle();
    assert_ne!(state.theme, original);
    state.toggle();
    assert_eq!(state.theme, original);
}
