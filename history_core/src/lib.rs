#![no_std]

//! # History Core
//!
//! Linear, branch-pruning document history shared by every editing host.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same operation trace => same timeline
//! - **Cursor, not stacks**: Undo and redo only move an index
//! - **Mechanism over policy**: The caller decides what is a checkpoint
//! - **No ambient authority**: Persistence is the host's job, never automatic
//!
//! ## Design
//!
//! The core provides:
//! - History: Timeline of snapshots plus a cursor
//! - HistoryOutcome: Whether an operation changed the current snapshot
//! - HistorySnapshot: Deterministic shape summary for parity testing

extern crate alloc;

pub mod outcome;
pub mod snapshot;
pub mod timeline;

pub use outcome::HistoryOutcome;
pub use snapshot::HistorySnapshot;
pub use timeline::History;
