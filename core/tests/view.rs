use showcase_core::view::{Overlay, ViewState};

#[test]
fn defaults_to_main_view() {
    let state = ViewState::default();
    assert_eq!(state.overlay(), Overlay::None);
    assert!(!state.sidebar_open());
}

#[test]
fn show_bio_closes_sidebar() {
    let mut state = ViewState::default();
    assert!(state.open_sidebar());
    assert!(state.show_bio());
    assert_eq!(state.overlay(), Overlay::Bio);
    assert!(!state.sidebar_open());
}

#[test]
fn close_bio_returns_to_main() {
    let mut state = ViewState::default();
    state.show_bio();
    assert!(state.close_bio());
    assert_eq!(state.overlay(), Overlay::None);
    assert!(!state.close_bio());
}

#[test]
fn sidebar_toggles_independently_of_overlay() {
    let mut state = ViewState::default();
    assert!(state.open_sidebar());
    assert!(!state.open_sidebar());
    assert_eq!(state.overlay(), Overlay::None);
    assert!(state.close_sidebar());
    assert!(!state.close_sidebar());
}

#[test]
fn go_main_clears_everything() {
    let mut state = ViewState::default();
    state.show_bio();
    assert!(state.go_main());
    assert_eq!(state.overlay(), Overlay::None);
    assert!(!state.sidebar_open());

    state.open_sidebar();
    assert!(state.go_main());
    assert!(!state.sidebar_open());
    assert!(!state.go_main());
}
