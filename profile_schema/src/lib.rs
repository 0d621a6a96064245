//! # Profile Schema
//!
//! This crate defines the profile document and how older persisted shapes
//! are brought up to date.
//!
//! ## Philosophy
//!
//! - **Values, not handles**: A document is a plain immutable value
//! - **Explicit shapes**: Persisted data is decoded into a named shape,
//!   never inspected field by field
//! - **Best effort**: One legacy shape is migrated; other drift is accepted
//! - **Pure**: Migration and edits have no side effects
//!
//! ## Design
//!
//! - **ProfileDocument**: The single versioned entity
//! - **PersistedShape**: Current or legacy on-disk shape
//! - **DocumentEdit**: Field-level edits addressed by `FieldPath`
//! - **default_document**: The built-in profile used when nothing is stored

pub mod defaults;
pub mod document;
pub mod edit;
pub mod migration;

pub use defaults::default_document;
pub use document::{
    Certification, ContactInfo, Education, ProfileDocument, Project, ProjectLinks, SkillCategory,
};
pub use edit::{DocumentEdit, EditError, FieldPath, ListKind, PathError};
pub use migration::{
    decode_document, migrate_value, MigrationOutcome, PersistedShape, LEGACY_SKILL_SLOTS,
};
