//! # Host Runtime
//!
//! Reads commands line by line, applies them to the session and reports
//! results and notifications on the output stream.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use profile_session::{
    EditorSession, MemoryClipboard, SessionConfig, SessionError, SessionState, ViewMode,
};
use services_notification::Notification;
use services_profile_store::{FileStore, StoreError};
use thiserror::Error;

use crate::commands::{EditorCommand, EditorCommandParser};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Directory holding the stored records
    pub data_dir: PathBuf,
    /// Startup query string
    pub query: String,
    /// System theme preference
    pub prefer_dark: bool,
    /// Address copied by share
    pub share_url: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            data_dir: PathBuf::from(".profiled"),
            query: session.query,
            prefer_dark: session.system_prefers_dark,
            share_url: session.share_url,
        }
    }
}

/// Whether the command loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Host runtime
pub struct HostRuntime {
    session: EditorSession<FileStore>,
    clipboard: MemoryClipboard,
    commands_run: usize,
}

impl HostRuntime {
    /// Opens the store and starts the session
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let store = FileStore::open(&config.data_dir)?;
        tracing::info!(data_dir = %config.data_dir.display(), "store opened");

        let session = EditorSession::start(
            store,
            SessionConfig {
                system_prefers_dark: config.prefer_dark,
                share_url: config.share_url,
                query: config.query,
            },
        );

        Ok(Self {
            session,
            clipboard: MemoryClipboard::new(),
            commands_run: 0,
        })
    }

    pub fn session(&self) -> &EditorSession<FileStore> {
        &self.session
    }

    pub fn commands_run(&self) -> usize {
        self.commands_run
    }

    /// Runs commands from `input` until it ends or `quit` is read
    ///
    /// Blank lines and `#` comments are skipped. A bad command is reported
    /// and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), HostError> {
        self.flush_notifications(output)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = match EditorCommandParser::parse(line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };

            let flow = self.execute(command, output)?;
            self.commands_run += 1;
            self.flush_notifications(output)?;

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, command: EditorCommand, output: &mut W) -> Result<Flow, HostError> {
        tracing::debug!(?command, "executing");

        match command {
            EditorCommand::Set { path, value } => {
                if let Err(e) = self.session.edit_field(&path, value) {
                    writeln!(output, "error: {}", e)?;
                }
            }
            EditorCommand::Blur => {
                self.session.end_edit();
            }
            EditorCommand::Add(list) => match self.session.add_item(list) {
                Ok(_) => writeln!(output, "added {} item", list)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            },
            EditorCommand::Remove { list, index } => {
                if let Err(e) = self.session.remove_item(list, index) {
                    writeln!(output, "error: {}", e)?;
                }
            }
            EditorCommand::Undo => {
                let outcome = self.session.undo();
                if !outcome.is_changed() {
                    writeln!(output, "nothing to undo")?;
                }
            }
            EditorCommand::Redo => {
                let outcome = self.session.redo();
                if !outcome.is_changed() {
                    writeln!(output, "nothing to redo")?;
                }
            }
            EditorCommand::Reset => {
                self.session.reset_to_default();
                writeln!(output, "profile reset")?;
            }
            EditorCommand::Get(path) => match path.get(self.session.current()) {
                Some(value) => writeln!(output, "{}", value)?,
                None => writeln!(output, "error: no such item")?,
            },
            EditorCommand::Show => {
                writeln!(output, "{}", self.session.export_json()?)?;
            }
            EditorCommand::Export => {
                self.session.export(&mut self.clipboard)?;
                self.write_clipboard(output)?;
            }
            EditorCommand::Share => {
                self.session.share(&mut self.clipboard)?;
                self.write_clipboard(output)?;
            }
            EditorCommand::Email => {
                writeln!(output, "{}", self.session.email_link())?;
            }
            EditorCommand::Theme => {
                let theme = self.session.toggle_theme();
                writeln!(output, "theme: {}", theme)?;
            }
            EditorCommand::Edit => {
                self.session.toggle_editing();
                if self.session.state().gate_open {
                    writeln!(output, "access gate open; use `unlock`")?;
                }
            }
            EditorCommand::Unlock => {
                self.session.grant_access();
            }
            EditorCommand::View => {
                self.session.toggle_view_mode();
            }
            EditorCommand::Key(chord) => {
                let writes = self.clipboard.write_count();
                if self.session.handle_key(chord, &mut self.clipboard)?.is_none() {
                    writeln!(output, "{} is not bound", chord)?;
                }
                if self.clipboard.write_count() != writes {
                    self.write_clipboard(output)?;
                }
            }
            EditorCommand::Status => {
                self.write_status(output)?;
            }
            EditorCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn write_clipboard<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if let Some(text) = self.clipboard.contents() {
            writeln!(output, "copied:")?;
            writeln!(output, "{}", text)?;
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let history = self.session.history();
        let state: &SessionState = self.session.state();
        let view = match state.view_mode {
            ViewMode::Story => "story",
            ViewMode::Resume => "resume",
        };

        writeln!(
            output,
            "entry {}/{} undo:{} redo:{} theme:{} view:{} editing:{} authenticated:{} gate:{} palette:{}",
            history.cursor() + 1,
            history.len(),
            self.session.can_undo(),
            self.session.can_redo(),
            state.theme,
            view,
            state.editing,
            state.authenticated,
            state.gate_open,
            state.palette_open,
        )
    }

    fn flush_notifications<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let notices: Vec<Notification> = self.session.drain_notifications();
        for notice in notices {
            writeln!(output, "{}", notice)?;
        }
        Ok(())
    }
}
