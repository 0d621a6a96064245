//! Persistence adapter
//!
//! Mirrors the current document (and the theme preference) to a
//! `KeyValueStore`. Reads never fail from the caller's point of view: a
//! record that is absent or unreadable both come back as `None`, with the
//! unreadable case logged. Writes report `StoreError`.

use core::fmt;
use core::str::FromStr;

use profile_schema::ProfileDocument;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Key holding the serialized document
pub const DOCUMENT_KEY: &str = "resume_data_v2_1";

/// Key holding the theme preference
pub const THEME_KEY: &str = "resume_theme_preference";

/// Stored theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// What a read found under a key
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRecord {
    /// Nothing stored
    Missing,
    /// Parsed structured value, shape not yet checked
    Parsed(Value),
    /// Stored bytes could not be read or parsed
    Unreadable { reason: String },
}

impl StoredRecord {
    pub fn into_value(self) -> Option<Value> {
        match self {
            StoredRecord::Parsed(value) => Some(value),
            StoredRecord::Missing | StoredRecord::Unreadable { .. } => None,
        }
    }
}

/// Document and theme persistence over a byte store
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads the record under `key`, keeping the reason it was unusable
    pub fn read_record(&self, key: &str) -> StoredRecord {
        let bytes = match self.store.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(key, "no stored record");
                return StoredRecord::Missing;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored record; treating as absent");
                return StoredRecord::Unreadable {
                    reason: e.to_string(),
                };
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => StoredRecord::Parsed(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored record is not valid JSON; treating as absent");
                StoredRecord::Unreadable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Reads the structured value under `key`
    ///
    /// Returns `None` when nothing is stored or the bytes do not parse.
    /// The caller migrates the value; no shape checks happen here.
    pub fn load(&self, key: &str) -> Option<Value> {
        self.read_record(key).into_value()
    }

    /// Serializes `doc` and writes it under `key`
    pub fn save(&mut self, key: &str, doc: &ProfileDocument) -> StoreResult<()> {
        let bytes = serde_json::to_vec(doc).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.store.put(key, &bytes)?;
        tracing::trace!(key, bytes = bytes.len(), "saved document");
        Ok(())
    }

    /// Removes the record under `key`
    pub fn clear(&mut self, key: &str) -> StoreResult<()> {
        self.store.remove(key)?;
        tracing::debug!(key, "cleared stored record");
        Ok(())
    }

    /// Reads the theme preference; unknown values count as absent
    pub fn load_theme(&self) -> Option<Theme> {
        let bytes = match self.store.get(THEME_KEY) {
            Ok(bytes) => bytes?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference");
                return None;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        match text.trim().parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme preference");
                None
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.store.put(THEME_KEY, theme.as_str().as_bytes())
    }
}
