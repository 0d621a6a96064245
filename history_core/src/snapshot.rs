//! History snapshot for deterministic parity testing

/// Shape of a timeline at one instant
///
/// Carries no document content, so two hosts driving the same operation
/// trace can compare snapshots without comparing documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub len: usize,
    pub cursor: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl HistorySnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update((self.len as u64).to_le_bytes());
        hasher.update((self.cursor as u64).to_le_bytes());
        hasher.update((self.undo_depth as u64).to_le_bytes());
        hasher.update((self.redo_depth as u64).to_le_bytes());

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
