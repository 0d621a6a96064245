//! Operation outcomes

/// Outcome from applying an operation to the history
///
/// Hosts persist and re-render only on `Changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// The current snapshot was replaced or the cursor moved
    Changed,
    /// Nothing happened (undo at start, redo at end)
    Unchanged,
}

impl HistoryOutcome {
    pub fn is_changed(self) -> bool {
        matches!(self, HistoryOutcome::Changed)
    }

    pub(crate) fn from_moved(moved: bool) -> Self {
        if moved {
            HistoryOutcome::Changed
        } else {
            HistoryOutcome::Unchanged
        }
    }
}
