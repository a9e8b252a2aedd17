//! Keyboard/mouse cursor over the ranked dropdown list.
//!
//! `None` is the original "no selection" sentinel (index -1). Movement
//! saturates at both ends: `move_down` stops at the last index and
//! `move_up` stops at `None`. There is no wraparound in either direction.
//!
//! The cursor does not own the result list; callers pass the current list
//! length and must [`reset`](SelectionCursor::reset) whenever the list is
//! replaced (every re-rank), keeping the invariant that a `Some` cursor
//! always indexes the *current* list.

/// Cursor state over a list of known length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: Option<usize>,
}

impl SelectionCursor {
    /// A cursor with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move down one row, entering the list at index 0 from no-selection.
    /// Saturates at `len - 1`; a no-op on an empty list.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Move up one row; index 0 moves back to no-selection.
    pub fn move_up(&mut self) {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Clear the selection (result list was replaced).
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Force the cursor back into range after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        if let Some(i) = self.selected
            && i >= len
        {
            self.selected = len.checked_sub(1);
        }
    }

    /// Resolve the selected element of `items`, if the cursor is set.
    #[must_use]
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.selected?)
    }
}
