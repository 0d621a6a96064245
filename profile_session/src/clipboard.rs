//! Clipboard sink for export and share

use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Destination for copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that keeps everything written to it
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent contents
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
