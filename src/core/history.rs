//! Submitted-message history with a browsing cursor.
//!
//! Entries are only ever appended, so a contiguous `Vec` plus an index gives
//! O(1) stepping in both directions.
//!
//! ## Cursor rule
//!
//! The cursor is either the index of the entry currently shown in the
//! composer, or `len()` when the user is not browsing. Stepping past either
//! end changes neither the cursor nor the composer text, so a boundary press
//! can never bring back an entry the user already left.

/// Append-only list of submitted messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryList {
    /// Creates an empty history with the cursor at the end.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and moves the cursor past it.
    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current browsing position, in `0..=len()`.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` while an entry (not a fresh draft) is shown.
    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All entries, oldest first.
    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Steps one entry back in time.
    ///
    /// Returns the entry to show, or `None` when already at the oldest entry
    /// (or the history is empty).
    pub fn older(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps one entry forward in time.
    ///
    /// Returns the entry to show, or `None` when already at the newest entry
    /// or not browsing at all.
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Leaves browsing mode (cursor back to `len()`).
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }
}
