//! Resilience Test Utilities
//!
//! Shared helpers for the cross-crate session tests.
//!
//! ## Test Philosophy
//!
//! - **Timeline is authoritative**: Storage faults never change what the user sees
//! - **Deterministic failures**: Faults come from a `FailurePolicy`, not luck
//! - **Restart is the real check**: A second session must see what the first saved

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use profile_session::{EditorSession, SessionConfig};
use services_profile_store::{FileStore, StoreResult, DOCUMENT_KEY};
use tempfile::TempDir;

/// Bootstrap helper for tests
///
/// Creates a temporary directory and a store rooted in it. Keep the
/// `TempDir` alive for as long as the store is used.
pub fn test_bootstrap() -> Result<(TempDir, FileStore), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path().join("profile"))?;
    Ok((dir, store))
}

/// Starts a session over a fresh store in `dir`
pub fn start_session(dir: &TempDir) -> StoreResult<EditorSession<FileStore>> {
    start_session_with(dir, SessionConfig::default())
}

pub fn start_session_with(
    dir: &TempDir,
    config: SessionConfig,
) -> StoreResult<EditorSession<FileStore>> {
    let store = FileStore::open(dir.path().join("profile"))?;
    Ok(EditorSession::start(store, config))
}

/// Ends `session` and starts a new one over the same directory
pub fn restart(session: EditorSession<FileStore>) -> EditorSession<FileStore> {
    let store = session.into_store();
    EditorSession::start(store, SessionConfig::default())
}

/// Path of the stored document record
pub fn document_path(dir: &TempDir) -> PathBuf {
    dir.path().join("profile").join(DOCUMENT_KEY)
}

/// Writes raw bytes as the stored document, bypassing the adapter
pub fn write_raw_document(dir: &TempDir, bytes: &[u8]) -> io::Result<()> {
    let path = document_path(dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}
