//! Persisted shape decoding and legacy migration
//!
//! Stored records carry no schema version. The shape is recognised by
//! decoding: the current shape is tried first, then the one known legacy
//! shape, where `skills` was a record of named slots instead of an ordered
//! list of categories. Anything else falls back to the built-in document.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::defaults::default_document;
use crate::document::{ProfileDocument, SkillCategory};

/// Legacy skill slots and the category each one becomes, in output order
pub const LEGACY_SKILL_SLOTS: [(&str, &str); 6] = [
    ("languages", "Programming Languages"),
    ("web", "Web Development"),
    ("core", "Core Competencies"),
    ("devTools", "Development Tools"),
    ("designTools", "Design Tools"),
    ("os", "Operating Systems"),
];

/// A persisted record, decoded into the shape it was written in
///
/// Variants are tried in declaration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PersistedShape {
    Current(ProfileDocument),
    Legacy(LegacyRecord),
}

/// Legacy record: skills keyed by slot, every other field left for the
/// current decoder
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRecord {
    skills: Map<String, Value>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl LegacyRecord {
    /// Rebuild the record in current shape
    pub fn into_current(self) -> Result<ProfileDocument, serde_json::Error> {
        let mut object = self.rest;
        object.insert("skills".into(), skills_list_value(&self.skills));
        serde_json::from_value(Value::Object(object))
    }
}

/// How a persisted value became a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Already in current shape
    Current(ProfileDocument),
    /// Legacy skills record converted to the category list
    MigratedLegacy(ProfileDocument),
    /// Neither shape matched; the built-in document stands in
    Defaulted { reason: String },
}

impl MigrationOutcome {
    pub fn into_document(self) -> ProfileDocument {
        match self {
            MigrationOutcome::Current(doc) | MigrationOutcome::MigratedLegacy(doc) => doc,
            MigrationOutcome::Defaulted { .. } => default_document(),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, MigrationOutcome::Defaulted { .. })
    }
}

fn legacy_skills(slots: &Map<String, Value>) -> Vec<SkillCategory> {
    LEGACY_SKILL_SLOTS
        .iter()
        .map(|(slot, category)| {
            let items = slots.get(*slot).and_then(Value::as_str).unwrap_or_default();
            SkillCategory::new(*category, items)
        })
        .collect()
}

fn skills_list_value(slots: &Map<String, Value>) -> Value {
    let list = legacy_skills(slots)
        .into_iter()
        .map(|skill| {
            let mut entry = Map::new();
            entry.insert("category".into(), Value::String(skill.category));
            entry.insert("items".into(), Value::String(skill.items));
            Value::Object(entry)
        })
        .collect();
    Value::Array(list)
}

/// Rewrites a legacy skills record into the category list
///
/// Pure and idempotent. Values that are not objects, or whose `skills` is
/// not a record, are returned unchanged.
pub fn migrate_value(value: Value) -> Value {
    match value {
        Value::Object(mut object) => {
            let migrated = match object.get("skills") {
                Some(Value::Object(slots)) => Some(skills_list_value(slots)),
                _ => None,
            };
            if let Some(list) = migrated {
                object.insert("skills".into(), list);
            }
            Value::Object(object)
        }
        other => other,
    }
}

/// Decodes a persisted value into a current-shape document
pub fn decode_document(value: Value) -> MigrationOutcome {
    if !value.is_object() {
        tracing::warn!("persisted record is not an object; using default document");
        return MigrationOutcome::Defaulted {
            reason: "record is not an object".into(),
        };
    }

    match PersistedShape::deserialize(value) {
        Ok(PersistedShape::Current(doc)) => MigrationOutcome::Current(doc),
        Ok(PersistedShape::Legacy(record)) => match record.into_current() {
            Ok(doc) => {
                tracing::info!("migrated legacy skills record to category list");
                MigrationOutcome::MigratedLegacy(doc)
            }
            Err(e) => {
                tracing::warn!(error = %e, "legacy record did not convert; using default document");
                MigrationOutcome::Defaulted {
                    reason: e.to_string(),
                }
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "persisted record matches no known shape; using default document");
            MigrationOutcome::Defaulted {
                reason: e.to_string(),
            }
        }
    }
}
