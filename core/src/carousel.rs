/// Milliseconds the transition lock stays held after an index change.
pub const TRANSITION_MS: u32 = 200;
/// Milliseconds between auto-rotation steps.
pub const AUTO_ROTATE_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Rotation state for the showcase carousel. The transition lock is the
/// single chokepoint for index changes: while it is held, both manual
/// navigation and auto-rotation steps are rejected, so at most one index
/// mutation is ever in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    item_count: usize,
    transitioning: bool,
    auto_rotate: bool,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            current_index: 0,
            item_count: item_count.max(1),
            transitioning: false,
            auto_rotate: true,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Steps the index one slot in either direction, wrapping modulo the item
    /// count. Returns false without touching the index while the transition
    /// lock is held. On success the lock is taken; the caller is responsible
    /// for calling [`end_transition`](Self::end_transition) once the
    /// transition window elapses.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.transitioning {
            return false;
        }
        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % self.item_count,
            Direction::Prev => (self.current_index + self.item_count - 1) % self.item_count,
        };
        self.transitioning = true;
        true
    }

    /// Jumps straight to `index`. No-op while the lock is held, when `index`
    /// is already centered, or when `index` is out of range (callers are
    /// expected to pass indices from the item list, but a bad one must not
    /// crash).
    pub fn select(&mut self, index: usize) -> bool {
        if self.transitioning || index == self.current_index || index >= self.item_count {
            return false;
        }
        self.current_index = index;
        self.transitioning = true;
        true
    }

    /// Releases the transition lock. Returns false if it was not held.
    pub fn end_transition(&mut self) -> bool {
        if !self.transitioning {
            return false;
        }
        self.transitioning = false;
        true
    }

    /// Enables or disables auto-rotation (pointer hover over the carousel
    /// region suspends it). Returns false if the flag already had the
    /// requested value. Never touches the index, so resuming cannot cause an
    /// immediate extra step.
    pub fn set_auto_rotate(&mut self, enabled: bool) -> bool {
        if self.auto_rotate == enabled {
            return false;
        }
        self.auto_rotate = enabled;
        true
    }
}
