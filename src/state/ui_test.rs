use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_to_light_theme() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_inverse_flips_both_ways() {
    assert_eq!(Theme::Light.inverse(), Theme::Dark);
    assert_eq!(Theme::Dark.inverse(), Theme::Light);
}

#[test]
fn theme_token_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_token(theme.as_token()), Some(theme));
    }
}

#[test]
fn theme_from_token_rejects_unknown() {
    assert_eq!(Theme::from_token("blue"), None);
    assert_eq!(Theme::from_token(""), None);
}
