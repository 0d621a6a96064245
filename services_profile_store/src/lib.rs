//! # Profile Store Service
//!
//! Durable key/value storage for the profile document and the theme
//! preference.
//!
//! ## Philosophy
//!
//! - **One record per key**: No history is persisted, only the latest value
//! - **Never fatal on read**: Unreadable records are logged and treated as
//!   absent
//! - **Typed on write**: Write failures come back as `StoreError` so the
//!   caller can surface them without stopping the editor
//! - **Testable**: Failures can be injected with `FailingStore`
//!
//! ## Design
//!
//! - **KeyValueStore**: Byte-level backend trait
//! - **MemoryStore**: In-process backend
//! - **FileStore**: One file per key in a directory, atomic replace
//! - **FailingStore**: Wrapper that rejects writes by policy
//! - **PersistenceAdapter**: Document/theme load, save and clear

pub mod adapter;
pub mod error;
pub mod failing_store;
pub mod file_store;
pub mod kv;

pub use adapter::{PersistenceAdapter, StoredRecord, Theme, DOCUMENT_KEY, THEME_KEY};
pub use error::{StoreError, StoreResult};
pub use failing_store::{FailingStore, FailurePolicy};
pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
