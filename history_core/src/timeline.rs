//! Timeline state machine
//!
//! A single ordered sequence of snapshots and a cursor into it. The
//! snapshot at the cursor is the current document; everything after it is
//! the redo branch, which survives undo/redo and is dropped by the next
//! commit.

use alloc::vec;
use alloc::vec::Vec;

use crate::{outcome::HistoryOutcome, snapshot::HistorySnapshot};

/// Linear undo/redo history
///
/// Invariants, upheld by every method:
/// - `entries` is never empty
/// - `cursor < entries.len()`
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T: Clone> History<T> {
    /// Create a single-entry history
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Replace the current entry in place
    ///
    /// Used for continuous input: neither the length nor the cursor moves,
    /// so no undo step is created.
    pub fn mutate(&mut self, value: T) -> HistoryOutcome {
        self.entries[self.cursor] = value;
        HistoryOutcome::Changed
    }

    /// Append a checkpoint, discarding any redo branch first
    pub fn commit(&mut self, value: T) -> HistoryOutcome {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(value);
        self.cursor = self.entries.len() - 1;
        HistoryOutcome::Changed
    }

    /// Step back one entry; no-op at the start
    pub fn undo(&mut self) -> HistoryOutcome {
        let moved = self.can_undo();
        if moved {
            self.cursor -= 1;
        }
        HistoryOutcome::from_moved(moved)
    }

    /// Step forward one entry; no-op at the end
    ///
    /// The bound is read from the live timeline on every call.
    pub fn redo(&mut self) -> HistoryOutcome {
        let moved = self.can_redo();
        if moved {
            self.cursor += 1;
        }
        HistoryOutcome::from_moved(moved)
    }

    /// Collapse the history to `[value]`
    ///
    /// Prior entries are dropped and cannot be undone back into.
    pub fn reset_to(&mut self, value: T) {
        self.entries.clear();
        self.entries.push(value);
        self.cursor = 0;
    }

    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries reachable by undo
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of entries reachable by redo
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    /// Entries in timeline order (for inspection and tests)
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Get a complete snapshot of the timeline shape (for parity testing)
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            len: self.entries.len(),
            cursor: self.cursor,
            undo_depth: self.undo_depth(),
            redo_depth: self.redo_depth(),
        }
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn doc(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_new_history_has_one_entry() {
        let history = History::new(doc("initial"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), "initial");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_mutate_replaces_current_slot() {
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));

        for text in ["b1", "b12", "b123"] {
            assert_eq!(history.mutate(doc(text)), HistoryOutcome::Changed);
            assert_eq!(history.len(), 2);
            assert_eq!(history.cursor(), 1);
        }

        assert_eq!(history.current(), "b123");
        assert_eq!(history.entries()[0], "a");
    }

    #[test]
    fn test_commit_then_undo() {
        let mut history = History::new(doc("start"));
        history.commit(doc("d1"));
        history.commit(doc("d2"));

        assert!(history.can_undo());
        assert_eq!(history.current(), "d2");

        assert_eq!(history.undo(), HistoryOutcome::Changed);
        assert_eq!(history.current(), "d1");
    }

    #[test]
    fn test_undo_preserves_redo_branch() {
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));
        history.commit(doc("c"));

        history.undo();
        history.undo();
        assert_eq!(history.len(), 3);
        assert_eq!(history.redo_depth(), 2);

        history.redo();
        assert_eq!(history.current(), "b");
        history.redo();
        assert_eq!(history.current(), "c");
    }

    #[test]
    fn test_commit_prunes_redo_branch() {
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));
        history.undo();
        assert!(history.can_redo());

        history.commit(doc("x"));
        assert!(!history.can_redo());
        assert_eq!(history.entries(), &[doc("a"), doc("x")]);
    }

    #[test]
    fn test_three_commits_two_undos_one_commit() {
        let mut history = History::new(doc("original"));
        history.commit(doc("c1"));
        history.commit(doc("c2"));
        history.commit(doc("c3"));
        history.undo();
        history.undo();
        history.commit(doc("new"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), &[doc("original"), doc("c1"), doc("new")]);
    }

    #[test]
    fn test_three_entries_two_undos_one_commit() {
        let mut history = History::new(doc("original"));
        history.commit(doc("c1"));
        history.commit(doc("c2"));
        assert_eq!(history.len(), 3);

        history.undo();
        history.undo();
        history.commit(doc("new"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0], "original");
        assert_eq!(history.entries()[1], "new");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new(doc("only"));
        assert_eq!(history.undo(), HistoryOutcome::Unchanged);
        assert_eq!(history.undo(), HistoryOutcome::Unchanged);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), "only");
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));
        assert_eq!(history.redo(), HistoryOutcome::Unchanged);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.current(), "b");
    }

    #[test]
    fn test_redo_bound_tracks_live_length() {
        // A redo branch that existed earlier must not be reachable once
        // a commit has pruned it.
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));
        history.commit(doc("c"));
        history.undo();
        history.undo();
        history.commit(doc("z"));

        assert_eq!(history.redo(), HistoryOutcome::Unchanged);
        assert_eq!(history.current(), "z");
        assert_eq!(history.cursor(), history.len() - 1);
    }

    #[test]
    fn test_reset_to_discards_everything() {
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));
        history.commit(doc("c"));
        history.undo();

        history.reset_to(doc("fresh"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), "fresh");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_mutate_after_undo_keeps_redo_branch() {
        let mut history = History::new(doc("a"));
        history.commit(doc("b"));
        history.undo();
        history.mutate(doc("a2"));

        assert!(history.can_redo());
        history.redo();
        assert_eq!(history.current(), "b");
        history.undo();
        assert_eq!(history.current(), "a2");
    }

    #[test]
    fn test_snapshot_tracks_depths() {
        let mut history = History::new(0u8);
        history.commit(1);
        history.commit(2);
        history.undo();

        let snapshot = history.snapshot();
        assert_eq!(snapshot.len, 3);
        assert_eq!(snapshot.cursor, 1);
        assert_eq!(snapshot.undo_depth, 1);
        assert_eq!(snapshot.redo_depth, 1);
    }
}
