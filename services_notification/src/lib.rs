#![no_std]

//! # Notification Service
//!
//! Structured, non-fatal notices raised by the editor session for its host.
//!
//! ## Philosophy
//!
//! - **Structured, not stdout**: Notices are typed events, not print statements
//! - **Non-fatal**: A notice never stops editing; it only informs
//! - **Ordered**: Notices keep a monotonic sequence number
//! - **Testable**: Notice history can be inspected and drained
//!
//! ## Features
//!
//! - Storage write failures ("changes are not being saved")
//! - Recovered load problems ("stored profile was unreadable")
//! - Recovery notices ("changes are being saved again")
//!
//! ## Example
//!
//! ```ignore
//! use services_notification::{Notification, NotificationCenter};
//!
//! let mut center = NotificationCenter::new();
//! center.notify(Notification::warning("Could not save changes").with_source("storage"));
//!
//! for notice in center.drain() {
//!     // show it
//! }
//! ```

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of undrained notifications kept
const MAX_PENDING: usize = 100;

/// Unique identifier for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new notification ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notif:{}", self.0)
    }
}

/// Notification severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationLevel {
    /// Informational message
    Info,
    /// Something degraded, editing continues
    Warning,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "INFO"),
            NotificationLevel::Warning => write!(f, "WARNING"),
        }
    }
}

/// A notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier
    pub id: NotificationId,
    /// Notification level
    pub level: NotificationLevel,
    /// Message text
    pub message: String,
    /// Optional source component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Position in the order notifications were raised (set on notify)
    pub sequence: u64,
}

impl Notification {
    /// Creates a new notification
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            level,
            message: message.into(),
            source: None,
            sequence: 0,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    /// Sets the source component
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "[{}] {}: {}", self.level, source, self.message),
            None => write!(f, "[{}] {}", self.level, self.message),
        }
    }
}

/// Queue of notifications waiting for the host
pub struct NotificationCenter {
    pending: VecDeque<Notification>,
    next_sequence: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            next_sequence: 0,
        }
    }

    /// Queues a notification
    ///
    /// The oldest notification is dropped once `MAX_PENDING` are queued.
    pub fn notify(&mut self, mut notification: Notification) -> NotificationId {
        notification.sequence = self.next_sequence;
        self.next_sequence += 1;
        let id = notification.id;
        self.pending.push_back(notification);

        while self.pending.len() > MAX_PENDING {
            self.pending.pop_front();
        }
        id
    }

    /// Queued notifications, oldest first
    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Takes every queued notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_notification_id_creation() {
        let id1 = NotificationId::new();
        let id2 = NotificationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_notification_level_ordering() {
        assert!(NotificationLevel::Info < NotificationLevel::Warning);
    }

    #[test]
    fn test_notification_with_source() {
        let notif = Notification::warning("Save failed").with_source("storage");
        assert_eq!(notif.source, Some("storage".to_string()));
        assert_eq!(format!("{}", notif), "[WARNING] storage: Save failed");
    }

    #[test]
    fn test_notify_returns_id_of_queued_notice() {
        let mut center = NotificationCenter::new();
        let id = center.notify(Notification::warning("disk full"));

        let queued = center.pending().next().unwrap();
        assert_eq!(queued.id, id);
        assert_eq!(format!("{}", queued.level), "WARNING");
    }

    #[test]
    fn test_notify_assigns_sequence() {
        let mut center = NotificationCenter::new();
        center.notify(Notification::info("one"));
        center.notify(Notification::info("two"));

        let drained = center.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].sequence, 0);
        assert_eq!(drained[1].sequence, 1);
        assert_eq!(drained[1].message, "two");
        assert!(center.is_empty());
    }

    #[test]
    fn test_pending_is_bounded() {
        let mut center = NotificationCenter::new();
        for i in 0..(MAX_PENDING + 5) {
            center.notify(Notification::info(format!("n{}", i)));
        }

        assert_eq!(center.len(), MAX_PENDING);
        assert_eq!(center.pending().next().unwrap().message, "n5");
    }

    #[test]
    fn test_serialize_notification() {
        let notif = Notification::info("hello");
        let json = serde_json::to_string(&notif).unwrap();
        assert!(json.contains("\"level\":\"Info\""));
        assert!(!json.contains("source"));
    }
}
