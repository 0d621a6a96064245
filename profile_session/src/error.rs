//! Session error types

use profile_schema::{EditError, PathError};
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Errors from session operations
///
/// Storage failures are not here: they become notifications.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Not in edit mode")]
    NotEditing,

    #[error("Invalid field path: {0}")]
    Path(#[from] PathError),

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),

    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
