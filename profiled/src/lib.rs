//! # Profile Editor Host
//!
//! Drives one editing session from a line-oriented command stream against a
//! directory-backed store.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The session never prints
//! - **Commands are explicit**: One line, one callback
//! - **Scripts are first-class**: The same commands drive tests and demos
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Render the document
//! - Check access-gate passwords
//! - Retry failed saves

pub mod commands;
pub mod runtime;

pub use commands::{CommandError, EditorCommand, EditorCommandParser};
pub use runtime::{HostConfig, HostError, HostRuntime};
