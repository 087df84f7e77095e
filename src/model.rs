use std::rc::Rc;

use yew::prelude::*;

use showcase_core::{CarouselState, Direction, ViewState};

pub(crate) enum CarouselAction {
    Advance(Direction),
    Select(usize),
    EndTransition,
    SetAutoRotate(bool),
}

/// Reducer wrapper around the pure carousel state machine. Dispatch always
/// sees the latest state, so timer callbacks cannot act on a stale snapshot.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct CarouselModel(pub(crate) CarouselState);

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        let changed = match action {
            CarouselAction::Advance(direction) => state.advance(direction),
            CarouselAction::Select(index) => state.select(index),
            CarouselAction::EndTransition => state.end_transition(),
            CarouselAction::SetAutoRotate(enabled) => state.set_auto_rotate(enabled),
        };
        if changed {
            Rc::new(Self(state))
        } else {
            self
        }
    }
}

pub(crate) enum ViewAction {
    ShowBio,
    CloseBio,
    OpenSidebar,
    CloseSidebar,
    GoMain,
}

#[derive(Clone, Copy, PartialEq, Default)]
pub(crate) struct ViewModel(pub(crate) ViewState);

impl Reducible for ViewModel {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        let changed = match action {
            ViewAction::ShowBio => state.show_bio(),
            ViewAction::CloseBio => state.close_bio(),
            ViewAction::OpenSidebar => state.open_sidebar(),
            ViewAction::CloseSidebar => state.close_sidebar(),
            ViewAction::GoMain => state.go_main(),
        };
        if changed {
            Rc::new(Self(state))
        } else {
            self
        }
    }
}
