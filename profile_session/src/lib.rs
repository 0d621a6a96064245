//! # Profile Session
//!
//! Wires the history store, the document schema and persistence into one
//! editing session for a single profile document.
//!
//! ## Philosophy
//!
//! - **Timeline is authoritative**: Storage mirrors it, never the reverse
//! - **Load before save**: Nothing is written until the stored record was read
//! - **Failures are notices**: A failed write never blocks editing
//! - **One surface**: Edit surfaces talk to the session through callbacks only
//!
//! ## Startup
//!
//! `EditorSession::start` runs a fixed order:
//! 1. Theme (stored preference, else system preference)
//! 2. Access gate (`mode=admin` in the startup query opens it)
//! 3. Data (load, migrate, reset the timeline to the result)

pub mod clipboard;
pub mod config;
pub mod error;
pub mod keys;
pub mod session;
pub mod state;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use config::{SessionConfig, StartupParams};
pub use error::SessionError;
pub use keys::{KeyAction, KeyChord, KeyParseError, Modifiers};
pub use session::EditorSession;
pub use state::{SessionState, ViewMode};
