//! # Editor Session
//!
//! Owns the document timeline and keeps the stored record in step with it.

use history_core::{History, HistoryOutcome};
use profile_schema::{
    decode_document, default_document, DocumentEdit, FieldPath, ListKind, MigrationOutcome,
    ProfileDocument,
};
use services_notification::{Notification, NotificationCenter};
use services_profile_store::{
    KeyValueStore, PersistenceAdapter, StoredRecord, Theme, DOCUMENT_KEY,
};

use crate::clipboard::Clipboard;
use crate::config::{SessionConfig, StartupParams};
use crate::error::SessionError;
use crate::keys::{KeyAction, KeyChord};
use crate::state::SessionState;

const STORAGE_SOURCE: &str = "storage";

/// One editing session over one stored document
pub struct EditorSession<S: KeyValueStore> {
    history: History<ProfileDocument>,
    adapter: PersistenceAdapter<S>,
    notifications: NotificationCenter,
    state: SessionState,
    config: SessionConfig,
    /// Stored record has been read; saves are allowed
    loaded: bool,
    /// Inside an edit run: keystrokes replace the current entry
    in_edit_run: bool,
    /// Last save failed; suppresses repeat warnings
    save_failing: bool,
}

impl<S: KeyValueStore> EditorSession<S> {
    /// Creates a session that has not read storage yet
    ///
    /// The timeline holds the default document and saves are suppressed
    /// until `load` runs.
    pub fn new(store: S, config: SessionConfig) -> Self {
        let theme = if config.system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };

        Self {
            history: History::new(default_document()),
            adapter: PersistenceAdapter::new(store),
            notifications: NotificationCenter::new(),
            state: SessionState::new(theme),
            config,
            loaded: false,
            in_edit_run: false,
            save_failing: false,
        }
    }

    /// Creates a session and runs startup: theme, access gate, data
    pub fn start(store: S, config: SessionConfig) -> Self {
        let mut session = Self::new(store, config);
        session.load_theme();
        session.apply_startup_query();
        session.load();
        session
    }

    /// Applies the stored theme preference, keeping the system one if absent
    pub fn load_theme(&mut self) {
        if let Some(theme) = self.adapter.load_theme() {
            self.state.theme = theme;
        }
        tracing::debug!(theme = %self.state.theme, "theme resolved");
    }

    fn apply_startup_query(&mut self) {
        let params = StartupParams::parse(&self.config.query);
        if params.requests_admin() {
            tracing::debug!("admin mode requested; opening access gate");
            self.state.open_gate();
        }
    }

    /// Reads, migrates and installs the stored document
    ///
    /// Anything unusable falls back to the default document. The timeline
    /// is reset either way and saves are enabled afterwards.
    pub fn load(&mut self) {
        let document = match self.adapter.read_record(DOCUMENT_KEY) {
            StoredRecord::Missing => default_document(),
            StoredRecord::Unreadable { reason } => {
                self.notifications.notify(
                    Notification::warning(format!(
                        "Saved profile could not be read ({}); showing the default profile",
                        reason
                    ))
                    .with_source(STORAGE_SOURCE),
                );
                default_document()
            }
            StoredRecord::Parsed(value) => match decode_document(value) {
                MigrationOutcome::Current(doc) => doc,
                MigrationOutcome::MigratedLegacy(doc) => {
                    tracing::info!("stored profile upgraded from legacy skills layout");
                    doc
                }
                MigrationOutcome::Defaulted { reason } => {
                    self.notifications.notify(
                        Notification::warning(format!(
                            "Saved profile has an unknown layout ({}); showing the default profile",
                            reason
                        ))
                        .with_source(STORAGE_SOURCE),
                    );
                    default_document()
                }
            },
        };

        self.history.reset_to(document);
        self.in_edit_run = false;
        self.loaded = true;
        tracing::info!("profile loaded");
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // Callback surface

    /// Replaces the current entry with `doc`
    pub fn on_mutate(&mut self, doc: ProfileDocument) -> HistoryOutcome {
        let outcome = self.history.mutate(doc);
        self.persist();
        outcome
    }

    /// Appends `doc` as a checkpoint, dropping any redo branch
    pub fn on_commit(&mut self, doc: ProfileDocument) -> HistoryOutcome {
        self.in_edit_run = false;
        let outcome = self.history.commit(doc);
        self.persist();
        outcome
    }

    pub fn undo(&mut self) -> HistoryOutcome {
        self.in_edit_run = false;
        let outcome = self.history.undo();
        if outcome.is_changed() {
            self.persist();
        }
        outcome
    }

    pub fn redo(&mut self) -> HistoryOutcome {
        self.in_edit_run = false;
        let outcome = self.history.redo();
        if outcome.is_changed() {
            self.persist();
        }
        outcome
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Collapses the timeline to the default document and forgets the
    /// stored record
    pub fn reset_to_default(&mut self) {
        self.history.reset_to(default_document());
        self.in_edit_run = false;

        if !self.loaded {
            return;
        }
        if let Err(e) = self.adapter.clear(DOCUMENT_KEY) {
            tracing::warn!(error = %e, "failed to clear stored profile");
            self.notifications.notify(
                Notification::warning(format!("Stored profile could not be cleared: {}", e))
                    .with_source(STORAGE_SOURCE),
            );
        }
    }

    pub fn current(&self) -> &ProfileDocument {
        self.history.current()
    }

    pub fn history(&self) -> &History<ProfileDocument> {
        &self.history
    }

    // Edit runs

    /// Applies one field or list edit from the edit surface
    ///
    /// Rejected with `NotEditing` unless edit mode is on. Checkpoint edits
    /// commit and end any run. A field edit commits on the first call of a
    /// run, so the document before the run stays reachable by undo, and
    /// replaces that entry on later calls.
    pub fn apply_edit(&mut self, edit: DocumentEdit) -> Result<HistoryOutcome, SessionError> {
        if !self.state.editing {
            return Err(SessionError::NotEditing);
        }
        let next = edit.apply(self.history.current())?;

        if edit.is_checkpoint() {
            return Ok(self.on_commit(next));
        }
        if self.in_edit_run {
            return Ok(self.on_mutate(next));
        }
        let outcome = self.history.commit(next);
        self.in_edit_run = true;
        self.persist();
        Ok(outcome)
    }

    /// Sets one field
    pub fn edit_field(
        &mut self,
        path: &FieldPath,
        value: impl Into<String>,
    ) -> Result<HistoryOutcome, SessionError> {
        self.apply_edit(DocumentEdit::Set {
            path: path.clone(),
            value: value.into(),
        })
    }

    /// Ends the current edit run (field lost focus)
    ///
    /// Returns whether a run was active.
    pub fn end_edit(&mut self) -> bool {
        core::mem::replace(&mut self.in_edit_run, false)
    }

    pub fn in_edit_run(&self) -> bool {
        self.in_edit_run
    }

    /// Appends a placeholder item to `list`
    pub fn add_item(&mut self, list: ListKind) -> Result<HistoryOutcome, SessionError> {
        self.apply_edit(DocumentEdit::AddItem(list))
    }

    /// Removes item `index` from `list`
    pub fn remove_item(
        &mut self,
        list: ListKind,
        index: usize,
    ) -> Result<HistoryOutcome, SessionError> {
        self.apply_edit(DocumentEdit::RemoveItem { list, index })
    }

    fn persist(&mut self) {
        if !self.loaded {
            tracing::trace!("load not complete; save skipped");
            return;
        }

        match self.adapter.save(DOCUMENT_KEY, self.history.current()) {
            Ok(()) => {
                if self.save_failing {
                    self.save_failing = false;
                    tracing::info!("saving resumed");
                    self.notifications.notify(
                        Notification::info("Changes are being saved again")
                            .with_source(STORAGE_SOURCE),
                    );
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save profile");
                if !self.save_failing {
                    self.save_failing = true;
                    self.notifications.notify(
                        Notification::warning(format!("Changes are not being saved: {}", e))
                            .with_source(STORAGE_SOURCE),
                    );
                }
            }
        }
    }

    // Session flags

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn toggle_editing(&mut self) {
        self.state.toggle_editing();
        if !self.state.editing {
            self.in_edit_run = false;
        }
    }

    pub fn grant_access(&mut self) {
        self.state.grant_access();
    }

    pub fn close_gate(&mut self) {
        self.state.close_gate();
    }

    pub fn toggle_palette(&mut self) {
        self.state.toggle_palette();
    }

    pub fn toggle_view_mode(&mut self) {
        self.state.toggle_view_mode();
    }

    /// Flips the theme and stores the new preference
    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        if let Err(e) = self.adapter.save_theme(self.state.theme) {
            tracing::warn!(error = %e, "failed to save theme preference");
            self.notifications.notify(
                Notification::warning(format!("Theme preference not saved: {}", e))
                    .with_source(STORAGE_SOURCE),
            );
        }
        self.state.theme
    }

    // Export and share

    /// Current document as indented JSON
    pub fn export_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self.history.current())?)
    }

    /// Copies the current document as JSON to `clipboard`
    pub fn export(&self, clipboard: &mut dyn Clipboard) -> Result<(), SessionError> {
        let json = self.export_json()?;
        clipboard.write_text(&json)?;
        Ok(())
    }

    /// Copies the share address to `clipboard`
    pub fn share(&self, clipboard: &mut dyn Clipboard) -> Result<(), SessionError> {
        clipboard.write_text(&self.config.share_url)?;
        Ok(())
    }

    /// `mailto:` link for the document's contact address
    pub fn email_link(&self) -> String {
        format!("mailto:{}", self.history.current().contact.email)
    }

    /// Runs the action bound to `chord`, if any
    pub fn handle_key(
        &mut self,
        chord: KeyChord,
        clipboard: &mut dyn Clipboard,
    ) -> Result<Option<KeyAction>, SessionError> {
        let action = chord.action();
        match action {
            Some(KeyAction::TogglePalette) => self.toggle_palette(),
            Some(KeyAction::Share) => self.share(clipboard)?,
            None => {}
        }
        Ok(action)
    }

    // Notifications and storage access

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    pub fn store(&self) -> &S {
        self.adapter.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.adapter.store_mut()
    }

    pub fn into_store(self) -> S {
        self.adapter.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::state::ViewMode;
    use services_notification::NotificationLevel;
    use services_profile_store::{FailingStore, FailurePolicy, MemoryStore, THEME_KEY};

    fn field(path: &str) -> FieldPath {
        FieldPath::parse(path).unwrap()
    }

    fn started() -> EditorSession<MemoryStore> {
        EditorSession::start(MemoryStore::new(), SessionConfig::default())
    }

    fn editing() -> EditorSession<MemoryStore> {
        let mut session = started();
        session.grant_access();
        session
    }

    fn stored_document(session: &EditorSession<MemoryStore>) -> ProfileDocument {
        let bytes = session.store().get(DOCUMENT_KEY).unwrap().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_fresh_start_uses_default() {
        let session = started();

        assert!(session.is_loaded());
        assert_eq!(session.current(), &default_document());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.store().write_count(), 0);
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn test_commit_persists_current() {
        let mut session = started();
        let mut doc = session.current().clone();
        doc.role = "Staff Engineer".into();

        assert_eq!(session.on_commit(doc.clone()), HistoryOutcome::Changed);
        assert_eq!(stored_document(&session), doc);
        assert!(session.can_undo());
    }

    #[test]
    fn test_mutate_saves_every_time() {
        let mut session = started();
        let mut doc = session.current().clone();
        for role in ["a", "ab", "abc"] {
            doc.role = role.into();
            session.on_mutate(doc.clone());
        }

        assert_eq!(session.store().write_count(), 3);
        assert_eq!(session.history().len(), 1);
        assert_eq!(stored_document(&session).role, "abc");
    }

    #[test]
    fn test_undo_redo_persist_current() {
        let mut session = started();
        let original = session.current().clone();
        let mut edited = original.clone();
        edited.name = "Edited".into();
        session.on_commit(edited.clone());

        assert_eq!(session.undo(), HistoryOutcome::Changed);
        assert_eq!(stored_document(&session), original);

        assert_eq!(session.redo(), HistoryOutcome::Changed);
        assert_eq!(stored_document(&session), edited);
    }

    #[test]
    fn test_boundary_undo_does_not_write() {
        let mut session = started();
        assert_eq!(session.undo(), HistoryOutcome::Unchanged);
        assert_eq!(session.redo(), HistoryOutcome::Unchanged);
        assert_eq!(session.store().write_count(), 0);
    }

    #[test]
    fn test_no_write_before_load() {
        let mut session = EditorSession::new(MemoryStore::new(), SessionConfig::default());
        let mut doc = session.current().clone();
        doc.name = "Early".into();

        session.on_mutate(doc.clone());
        session.on_commit(doc);
        assert_eq!(session.store().write_count(), 0);

        session.load();
        assert_eq!(session.current(), &default_document());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_edit_run_is_one_undo_step() {
        let mut session = editing();
        let name = field("name");

        session.edit_field(&name, "J").unwrap();
        session.edit_field(&name, "Jo").unwrap();
        session.edit_field(&name, "Jordan").unwrap();
        assert!(session.end_edit());

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current().name, "Jordan");
        assert_eq!(stored_document(&session).name, "Jordan");

        session.undo();
        assert_eq!(session.current(), &default_document());
    }

    #[test]
    fn test_separate_runs_are_separate_steps() {
        let mut session = editing();

        session.edit_field(&field("role"), "Lead").unwrap();
        session.end_edit();
        session.edit_field(&field("contact.email"), "lead@example.com").unwrap();
        session.end_edit();

        assert_eq!(session.history().len(), 3);
        session.undo();
        assert_eq!(session.current().role, "Lead");
        assert_eq!(session.current().contact.email, default_document().contact.email);
    }

    #[test]
    fn test_undo_ends_edit_run() {
        let mut session = editing();
        let objective = field("objective");

        session.edit_field(&objective, "first").unwrap();
        session.undo();
        assert!(!session.in_edit_run());

        session.edit_field(&objective, "second").unwrap();
        assert_eq!(session.history().len(), 2);
        assert!(!session.can_redo());
        session.undo();
        assert_eq!(session.current(), &default_document());
    }

    #[test]
    fn test_edits_rejected_outside_edit_mode() {
        let mut session = started();

        let result = session.edit_field(&field("name"), "Intruder");
        assert!(matches!(result, Err(SessionError::NotEditing)));
        assert!(matches!(
            session.add_item(ListKind::Projects),
            Err(SessionError::NotEditing)
        ));
        assert!(matches!(
            session.remove_item(ListKind::Projects, 0),
            Err(SessionError::NotEditing)
        ));

        assert_eq!(session.history().len(), 1);
        assert!(!session.in_edit_run());
        assert_eq!(session.current(), &default_document());
        assert_eq!(session.store().write_count(), 0);
    }

    #[test]
    fn test_edits_rejected_after_leaving_edit_mode() {
        let mut session = editing();
        session.edit_field(&field("name"), "Kept").unwrap();
        session.toggle_editing();

        let result = session.edit_field(&field("name"), "Dropped");
        assert!(matches!(result, Err(SessionError::NotEditing)));
        assert_eq!(session.current().name, "Kept");
        assert_eq!(session.store().write_count(), 1);
    }

    #[test]
    fn test_checkpoint_edit_ends_run() {
        let mut session = editing();

        session
            .apply_edit(DocumentEdit::Set {
                path: field("name"),
                value: "Draft".into(),
            })
            .unwrap();
        assert!(session.in_edit_run());

        session
            .apply_edit(DocumentEdit::AddItem(ListKind::Skills))
            .unwrap();
        assert!(!session.in_edit_run());
        assert_eq!(session.history().len(), 3);

        session
            .apply_edit(DocumentEdit::Set {
                path: field("name"),
                value: "Final".into(),
            })
            .unwrap();
        assert_eq!(session.history().len(), 4);

        session.undo();
        assert_eq!(session.current().name, "Draft");
        assert_eq!(
            session.current().skills.len(),
            default_document().skills.len() + 1
        );
    }

    #[test]
    fn test_add_and_remove_items_commit() {
        let mut session = editing();
        let before = session.current().certifications.len();

        session.add_item(ListKind::Certifications).unwrap();
        assert_eq!(session.current().certifications.len(), before + 1);
        assert_eq!(session.history().len(), 2);

        session.remove_item(ListKind::Certifications, 0).unwrap();
        assert_eq!(session.current().certifications.len(), before);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_invalid_edit_leaves_timeline_alone() {
        let mut session = editing();
        let result = session.remove_item(ListKind::Education, 99);

        assert!(matches!(result, Err(SessionError::Edit(_))));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.store().write_count(), 0);
    }

    #[test]
    fn test_reset_to_default_clears_record() {
        let mut session = editing();
        session.edit_field(&field("name"), "Someone").unwrap();
        assert!(session.store().contains(DOCUMENT_KEY));

        session.reset_to_default();
        assert_eq!(session.current(), &default_document());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert!(!session.store().contains(DOCUMENT_KEY));
    }

    #[test]
    fn test_load_restores_stored_document() {
        let mut session = editing();
        session.edit_field(&field("name"), "Persisted").unwrap();
        let store = session.into_store();

        let session = EditorSession::start(store, SessionConfig::default());
        assert_eq!(session.current().name, "Persisted");
        assert!(!session.can_undo());
    }

    #[test]
    fn test_corrupted_record_defaults_with_notice() {
        let mut store = MemoryStore::new();
        store.put(DOCUMENT_KEY, b"{ not json").unwrap();

        let mut session = EditorSession::start(store, SessionConfig::default());
        assert_eq!(session.current(), &default_document());

        let notices = session.drain_notifications();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NotificationLevel::Warning);
        assert_eq!(notices[0].source.as_deref(), Some(STORAGE_SOURCE));
    }

    #[test]
    fn test_wrong_shape_defaults_with_notice() {
        let mut store = MemoryStore::new();
        store.put(DOCUMENT_KEY, b"[1, 2, 3]").unwrap();

        let session = EditorSession::start(store, SessionConfig::default());
        assert_eq!(session.current(), &default_document());
        assert_eq!(session.notifications().len(), 1);
    }

    #[test]
    fn test_legacy_record_is_migrated() {
        let mut store = MemoryStore::new();
        store
            .put(
                DOCUMENT_KEY,
                br#"{"name":"Legacy","skills":{"languages":"Rust","os":"Linux"}}"#,
            )
            .unwrap();

        let session = EditorSession::start(store, SessionConfig::default());
        let doc = session.current();
        assert_eq!(doc.name, "Legacy");
        assert_eq!(doc.skills.len(), 6);
        assert_eq!(doc.skills[0].items, "Rust");
        assert_eq!(doc.skills[5].category, "Operating Systems");
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn test_save_failure_notifies_once_and_editing_continues() {
        let store = FailingStore::new(MemoryStore::new(), FailurePolicy::Always);
        let mut session = EditorSession::start(store, SessionConfig::default());
        session.grant_access();
        let name = field("name");

        session.edit_field(&name, "A").unwrap();
        session.edit_field(&name, "AB").unwrap();
        assert_eq!(session.current().name, "AB");

        let notices = session.drain_notifications();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NotificationLevel::Warning);

        session.store_mut().set_policy(FailurePolicy::Never);
        session.edit_field(&name, "ABC").unwrap();
        let notices = session.drain_notifications();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NotificationLevel::Info);
        assert_eq!(session.store().write_count(), 1);
    }

    #[test]
    fn test_theme_prefers_stored_value() {
        let mut store = MemoryStore::new();
        store.put(THEME_KEY, b"light").unwrap();
        let config = SessionConfig {
            system_prefers_dark: true,
            ..SessionConfig::default()
        };

        let session = EditorSession::start(store, config);
        assert_eq!(session.state().theme, Theme::Light);
    }

    #[test]
    fn test_theme_falls_back_to_system() {
        let config = SessionConfig {
            system_prefers_dark: true,
            ..SessionConfig::default()
        };
        let session = EditorSession::start(MemoryStore::new(), config);
        assert_eq!(session.state().theme, Theme::Dark);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let mut session = started();
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert_eq!(
            session.store().get(THEME_KEY).unwrap(),
            Some(b"dark".to_vec())
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_admin_query_opens_gate() {
        let config = SessionConfig {
            query: "?mode=admin".into(),
            ..SessionConfig::default()
        };
        let mut session = EditorSession::start(MemoryStore::new(), config);

        assert!(session.state().gate_open);
        assert!(!session.state().authenticated);
        assert!(!session.can_undo());

        session.grant_access();
        assert!(session.state().editing);
        assert!(!session.state().gate_open);
    }

    #[test]
    fn test_encoded_admin_query_opens_gate() {
        let config = SessionConfig {
            query: "?m%6Fde=%61dmin".into(),
            ..SessionConfig::default()
        };
        let session = EditorSession::start(MemoryStore::new(), config);
        assert!(session.state().gate_open);
    }

    #[test]
    fn test_keyboard_chords() {
        let mut session = started();
        let mut clipboard = MemoryClipboard::new();

        let action = session
            .handle_key("ctrl+k".parse().unwrap(), &mut clipboard)
            .unwrap();
        assert_eq!(action, Some(KeyAction::TogglePalette));
        assert!(session.state().palette_open);

        let action = session
            .handle_key("cmd+s".parse().unwrap(), &mut clipboard)
            .unwrap();
        assert_eq!(action, Some(KeyAction::Share));
        assert_eq!(clipboard.contents(), Some("http://localhost/"));

        let action = session
            .handle_key("ctrl+z".parse().unwrap(), &mut clipboard)
            .unwrap();
        assert_eq!(action, None);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_export_is_pretty_json() {
        let session = started();
        let mut clipboard = MemoryClipboard::new();
        session.export(&mut clipboard).unwrap();

        let text = clipboard.contents().unwrap();
        assert!(text.starts_with("{\n  \"name\": "));
        let parsed: ProfileDocument = serde_json::from_str(text).unwrap();
        assert_eq!(&parsed, session.current());
        assert_eq!(session.store().write_count(), 0);
    }

    #[test]
    fn test_email_link() {
        let session = started();
        assert_eq!(
            session.email_link(),
            format!("mailto:{}", default_document().contact.email)
        );
    }

    #[test]
    fn test_leaving_edit_mode_ends_run() {
        let mut session = editing();
        session.edit_field(&field("name"), "X").unwrap();

        session.toggle_editing();
        assert!(!session.state().editing);
        assert!(!session.in_edit_run());
        assert_eq!(session.state().view_mode, ViewMode::Story);
    }
}
