/// Position within a deck.
///
/// `total` counts declared slides only; index 0 is the cover, so valid
/// positions are `0..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    current_index: usize,
    total: usize,
}

impl Navigation {
    pub fn new(total: usize) -> Self {
        Self {
            current_index: 0,
            total,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Moves one slide forward. Returns `false` when already at the end.
    pub fn advance(&mut self) -> bool {
        if self.current_index >= self.total {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves one slide back. Returns `false` when already on the cover.
    pub fn retreat(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}
