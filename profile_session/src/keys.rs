//! # Keyboard chords
//!
//! Two chords are bound, both with Ctrl or Cmd held:
//! - `K` toggles the command overlay
//! - `S` shares
//!
//! Everything else falls through to the host.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Chord parse errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("Empty key chord")]
    Empty,

    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("Key must be a single character: {0}")]
    InvalidKey(String),
}

/// Modifier keys held with a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Self = Self { bits: 0 };
    pub const CTRL: Self = Self { bits: 1 << 0 };
    pub const ALT: Self = Self { bits: 1 << 1 };
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Cmd on macOS
    pub const META: Self = Self { bits: 1 << 3 };

    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Ctrl or Cmd held
    pub fn has_command(&self) -> bool {
        self.contains(Self::CTRL) || self.contains(Self::META)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// Session action bound to a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePalette,
    Share,
}

/// A key with its modifiers, e.g. `ctrl+k`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    /// Key as reported with the modifiers applied (`K` when shifted)
    pub key: char,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: char, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Action bound to this chord, if any
    pub fn action(&self) -> Option<KeyAction> {
        if !self.modifiers.has_command() {
            return None;
        }
        match self.key {
            'k' => Some(KeyAction::TogglePalette),
            's' => Some(KeyAction::Share),
            _ => None,
        }
    }
}

impl FromStr for KeyChord {
    type Err = KeyParseError;

    /// Parses `ctrl+k`, `cmd+s`, `ctrl+shift+k`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.pop().unwrap_or_default();
        let mut modifiers = Modifiers::NONE;

        for part in parts {
            let modifier = match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CTRL,
                "alt" | "option" => Modifiers::ALT,
                "shift" => Modifiers::SHIFT,
                "cmd" | "meta" | "super" => Modifiers::META,
                _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
            };
            modifiers = modifiers.with(modifier);
        }

        let mut chars = key_part.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(KeyParseError::InvalidKey(key_part.to_string())),
        };
        let key = if modifiers.contains(Modifiers::SHIFT) {
            key.to_ascii_uppercase()
        } else {
            key.to_ascii_lowercase()
        };

        Ok(Self { key, modifiers })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (Modifiers::CTRL, "ctrl"),
            (Modifiers::META, "cmd"),
            (Modifiers::ALT, "alt"),
            (Modifiers::SHIFT, "shift"),
        ] {
            if self.modifiers.contains(flag) {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key.to_ascii_lowercase())
    }
}
