/// Full-screen overlay selector. The reference site carried a second,
/// unreachable CV-only overlay; its content lives in the bio panel, so a
/// single variant covers everything a user can open. At most one overlay
/// renders at a time and the main carousel view is hidden while it is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Bio,
}

/// Overlay plus the small-viewport sidebar flag. The sidebar flag only
/// affects presentation on narrow screens and never alters carousel state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    overlay: Overlay,
    sidebar_open: bool,
}

impl ViewState {
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Opens the bio/CV overlay and closes the sidebar in the same step.
    pub fn show_bio(&mut self) -> bool {
        if self.overlay == Overlay::Bio && !self.sidebar_open {
            return false;
        }
        self.overlay = Overlay::Bio;
        self.sidebar_open = false;
        true
    }

    pub fn close_bio(&mut self) -> bool {
        if self.overlay == Overlay::None {
            return false;
        }
        self.overlay = Overlay::None;
        true
    }

    pub fn open_sidebar(&mut self) -> bool {
        if self.sidebar_open {
            return false;
        }
        self.sidebar_open = true;
        true
    }

    pub fn close_sidebar(&mut self) -> bool {
        if !self.sidebar_open {
            return false;
        }
        self.sidebar_open = false;
        true
    }

    /// "Main Page" navigation: back to the carousel with everything closed.
    pub fn go_main(&mut self) -> bool {
        if self.overlay == Overlay::None && !self.sidebar_open {
            return false;
        }
        self.overlay = Overlay::None;
        self.sidebar_open = false;
        true
    }
}
