use showcase_core::carousel::{CarouselState, Direction};

fn step(state: &mut CarouselState, direction: Direction) {
    assert!(state.advance(direction));
    assert!(state.end_transition());
}

#[test]
fn full_cycle_returns_to_start() {
    for n in [1usize, 2, 3, 6, 9] {
        for start in 0..n {
            let mut state = CarouselState::new(n);
            for _ in 0..start {
                step(&mut state, Direction::Next);
            }
            assert_eq!(state.current_index(), start);
            for _ in 0..n {
                step(&mut state, Direction::Next);
            }
            assert_eq!(state.current_index(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn prev_inverts_next() {
    for start in 0..6 {
        let mut state = CarouselState::new(6);
        for _ in 0..start {
            step(&mut state, Direction::Next);
        }
        step(&mut state, Direction::Next);
        step(&mut state, Direction::Prev);
        assert_eq!(state.current_index(), start);
    }
}

#[test]
fn prev_wraps_below_zero() {
    let mut state = CarouselState::new(6);
    step(&mut state, Direction::Prev);
    assert_eq!(state.current_index(), 5);
}

#[test]
fn transition_lock_rejects_input() {
    let mut state = CarouselState::new(6);
    assert!(state.advance(Direction::Next));
    assert!(state.is_transitioning());
    assert_eq!(state.current_index(), 1);

    assert!(!state.advance(Direction::Next));
    assert!(!state.advance(Direction::Prev));
    assert!(!state.select(4));
    assert_eq!(state.current_index(), 1);

    assert!(state.end_transition());
    assert!(state.advance(Direction::Next));
    assert_eq!(state.current_index(), 2);
}

#[test]
fn select_current_index_is_noop() {
    let mut state = CarouselState::new(6);
    assert!(!state.select(0));
    assert!(!state.is_transitioning());

    state.select(3);
    state.end_transition();
    assert!(!state.select(3));
    assert_eq!(state.current_index(), 3);
}

#[test]
fn select_out_of_range_is_silent_noop() {
    let mut state = CarouselState::new(6);
    assert!(!state.select(6));
    assert!(!state.select(usize::MAX));
    assert_eq!(state.current_index(), 0);
    assert!(!state.is_transitioning());
}

#[test]
fn select_takes_transition_lock() {
    let mut state = CarouselState::new(6);
    assert!(state.select(4));
    assert!(state.is_transitioning());
    assert_eq!(state.current_index(), 4);
}

#[test]
fn five_auto_steps_cycle_six_items() {
    // One simulated interval firing = advance(Next) + lock release.
    let mut state = CarouselState::new(6);
    for fired in 1..=5 {
        step(&mut state, Direction::Next);
        assert_eq!(state.current_index(), fired % 6);
    }
    step(&mut state, Direction::Next);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn hover_pauses_without_touching_index() {
    let mut state = CarouselState::new(6);
    step(&mut state, Direction::Next);

    assert!(state.set_auto_rotate(false));
    assert!(!state.auto_rotate());
    assert_eq!(state.current_index(), 1);

    // Resuming must not advance on its own.
    assert!(state.set_auto_rotate(true));
    assert!(!state.set_auto_rotate(true));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn rapid_clicks_collapse_into_one_step() {
    // Three clicks inside one transition window: only the first lands.
    let mut state = CarouselState::new(6);
    assert!(state.advance(Direction::Next));
    assert!(!state.advance(Direction::Next));
    assert!(!state.advance(Direction::Next));
    assert_eq!(state.current_index(), 1);

    // Spaced beyond the window, each click lands.
    let mut state = CarouselState::new(6);
    for _ in 0..3 {
        step(&mut state, Direction::Next);
    }
    assert_eq!(state.current_index(), 3);
}

#[test]
fn single_item_carousel_stays_put() {
    let mut state = CarouselState::new(1);
    step(&mut state, Direction::Next);
    assert_eq!(state.current_index(), 0);
    step(&mut state, Direction::Prev);
    assert_eq!(state.current_index(), 0);
}
