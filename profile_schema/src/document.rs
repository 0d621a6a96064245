//! Profile document types
//!
//! Field names serialize in camelCase so records written by earlier
//! editors load unchanged. Every struct defaults field by field: a record
//! missing a field decodes with that field empty.

use serde::{Deserialize, Serialize};

/// The full structured profile being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileDocument {
    pub name: String,
    pub role: String,
    pub contact: ContactInfo,
    pub objective: String,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: String,
    pub interests: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub score: String,
}

/// One named group of skills, items as free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub items: String,
}

impl SkillCategory {
    pub fn new(category: impl Into<String>, items: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: items.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub tech_stack: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case() {
        let project = Project {
            title: "Tool".into(),
            tech_stack: "Rust".into(),
            description: "A tool".into(),
            links: None,
            award: None,
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["techStack"], "Rust");
        assert!(value.get("links").is_none());
        assert!(value.get("award").is_none());
    }

    #[test]
    fn test_missing_fields_default_individually() {
        let doc: ProfileDocument = serde_json::from_value(json!({
            "name": "Ada",
            "contact": { "email": "ada@example.com" }
        }))
        .unwrap();

        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.contact.email, "ada@example.com");
        assert_eq!(doc.contact.phone, "");
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_optional_links_roundtrip() {
        let project = Project {
            title: "Site".into(),
            links: Some(ProjectLinks {
                github: None,
                live: Some("example.org".into()),
            }),
            ..Project::default()
        };

        let text = serde_json::to_string(&project).unwrap();
        assert!(text.contains("\"live\":\"example.org\""));
        assert!(!text.contains("github"));

        let back: Project = serde_json::from_str(&text).unwrap();
        assert_eq!(back, project);
    }
}
