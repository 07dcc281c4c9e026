//! Selection and scroll state of the listing
//!
//! Two indices into the filtered entry list: the selected entry and the
//! first visible one. Whenever the entry count is non-zero:
//!
//! - `selected < total`
//! - `top <= selected <= top + page_size - 1`
//!
//! With zero entries the selection is inactive and left untouched.

use serde::{Deserialize, Serialize};

/// Browser selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Index of the selected entry
    pub selected: usize,
    /// Index of the first visible entry
    pub top: usize,
}

impl Selection {
    pub fn new(selected: usize, top: usize) -> Self {
        Self { selected, top }
    }

    /// Restores both invariants for `total` entries
    ///
    /// The selection is clamped first, then the window is moved the least
    /// distance that keeps the selection visible.
    pub fn reclamp(self, total: usize, page_size: usize) -> Self {
        let (selected, top) = reclamp(self.selected, self.top, total, page_size);
        Self { selected, top }
    }

    /// Moves the selection one entry up, stopping at the first entry
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection one entry down, stopping at the last entry
    pub fn move_down(&mut self, total: usize) {
        if total > 0 {
            self.selected = (self.selected + 1).min(total - 1);
        }
    }

    /// Returns true if the selection names an existing entry
    pub fn is_active(&self, total: usize) -> bool {
        self.selected < total
    }

    /// Returns true if both invariants hold for `total` entries
    pub fn is_consistent(&self, total: usize, page_size: usize) -> bool {
        if total == 0 {
            return true;
        }
        let page_size = page_size.max(1);
        self.selected < total
            && self.top <= self.selected
            && self.selected <= self.top + page_size - 1
    }
}

/// Invariant-restoring clamp of `(selected, top)` for `total` entries
pub fn reclamp(selected: usize, top: usize, total: usize, page_size: usize) -> (usize, usize) {
    if total == 0 {
        return (selected, top);
    }
    let page_size = page_size.max(1);
    let selected = selected.min(total - 1);
    let top = top.min(selected);
    let top = top.max((selected + 1).saturating_sub(page_size));
    (selected, top)
}
