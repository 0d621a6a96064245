//! # Editor Commands
//!
//! Line commands understood by the host.
//!
//! ## Command Set
//!
//! - `set <path> <value>` - Type into a field (starts or continues an edit run)
//! - `blur` - End the current edit run
//! - `add <list>` - Append a placeholder item
//! - `remove <list> <index>` - Remove an item
//! - `undo` / `redo` - Move through the timeline
//! - `reset` - Return to the default profile and clear storage
//! - `get <path>` - Print one field
//! - `show` - Print the whole document
//! - `export` - Copy the document as JSON
//! - `share` - Copy the share address
//! - `email` - Print the contact mail link
//! - `theme` - Toggle and store the theme
//! - `edit` - Toggle edit mode (opens the access gate when locked)
//! - `unlock` - Pass the access gate
//! - `view` - Toggle story / resume view
//! - `key <chord>` - Press a key chord, e.g. `key ctrl+k`
//! - `status` - Print session flags and timeline position
//! - `quit` - Exit the host

use profile_schema::{FieldPath, ListKind, PathError};
use profile_session::{KeyChord, KeyParseError};
use thiserror::Error;

/// Command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),

    #[error("Invalid key chord: {0}")]
    InvalidKey(#[from] KeyParseError),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),
}

/// Host commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Set { path: FieldPath, value: String },
    Blur,
    Add(ListKind),
    Remove { list: ListKind, index: usize },
    Undo,
    Redo,
    Reset,
    Get(FieldPath),
    Show,
    Export,
    Share,
    Email,
    Theme,
    Edit,
    Unlock,
    View,
    Key(KeyChord),
    Status,
    Quit,
}

/// Command parser
pub struct EditorCommandParser;

impl EditorCommandParser {
    /// Parses one line
    pub fn parse(input: &str) -> Result<EditorCommand, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::InvalidCommand("Empty command".to_string()));
        }

        let (cmd, rest) = split_word(input);
        let cmd = cmd.to_lowercase();

        match cmd.as_str() {
            "set" => Self::parse_set(rest),
            "blur" => Ok(EditorCommand::Blur),
            "add" => Ok(EditorCommand::Add(Self::parse_list(rest)?)),
            "remove" | "rm" => Self::parse_remove(rest),
            "undo" => Ok(EditorCommand::Undo),
            "redo" => Ok(EditorCommand::Redo),
            "reset" => Ok(EditorCommand::Reset),
            "get" => Ok(EditorCommand::Get(Self::parse_path(rest)?)),
            "show" => Ok(EditorCommand::Show),
            "export" => Ok(EditorCommand::Export),
            "share" => Ok(EditorCommand::Share),
            "email" => Ok(EditorCommand::Email),
            "theme" => Ok(EditorCommand::Theme),
            "edit" => Ok(EditorCommand::Edit),
            "unlock" => Ok(EditorCommand::Unlock),
            "view" => Ok(EditorCommand::View),
            "key" => Self::parse_key(rest),
            "status" => Ok(EditorCommand::Status),
            "quit" | "exit" => Ok(EditorCommand::Quit),
            _ => Err(CommandError::UnknownCommand(cmd)),
        }
    }

    /// `set <path> <value>`; the value runs to the end of the line and may be empty
    fn parse_set(args: &str) -> Result<EditorCommand, CommandError> {
        let (path, value) = split_word(args);
        Ok(EditorCommand::Set {
            path: Self::parse_path(path)?,
            value: value.to_string(),
        })
    }

    fn parse_remove(args: &str) -> Result<EditorCommand, CommandError> {
        let (list, index) = split_word(args);
        let list = Self::parse_list(list)?;
        let index = index.trim();
        if index.is_empty() {
            return Err(CommandError::MissingArgument("item index".to_string()));
        }
        let index = index
            .parse()
            .map_err(|_| CommandError::InvalidIndex(index.to_string()))?;
        Ok(EditorCommand::Remove { list, index })
    }

    fn parse_key(args: &str) -> Result<EditorCommand, CommandError> {
        if args.trim().is_empty() {
            return Err(CommandError::MissingArgument("key chord".to_string()));
        }
        Ok(EditorCommand::Key(args.parse()?))
    }

    fn parse_path(args: &str) -> Result<FieldPath, CommandError> {
        if args.trim().is_empty() {
            return Err(CommandError::MissingArgument("field path".to_string()));
        }
        Ok(FieldPath::parse(args)?)
    }

    fn parse_list(args: &str) -> Result<ListKind, CommandError> {
        let name = args.trim();
        if name.is_empty() {
            return Err(CommandError::MissingArgument(
                "list (education, skills, projects, certifications)".to_string(),
            ));
        }
        name.parse()
            .map_err(|_| CommandError::InvalidCommand(format!("Unknown list: {}", name)))
    }
}

/// Splits off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim_start()),
        None => (input, ""),
    }
}
