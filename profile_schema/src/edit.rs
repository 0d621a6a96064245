//! Field-level document edits
//!
//! Edits never touch the document they are applied to; `apply` returns a
//! new value. Paths are dotted, with list indices as plain numbers:
//!
//! - `name`, `role`, `objective`, `languages`, `interests`
//! - `contact.email`, `contact.phone`, `contact.location`
//! - `education.<i>.degree|institution|year|score`
//! - `skills.<i>.category|items`
//! - `projects.<i>.title|techStack|description|award`
//! - `projects.<i>.links.github|live`
//! - `certifications.<i>.name|date`

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

use crate::document::{Certification, Education, ProfileDocument, Project, SkillCategory};

/// Errors from parsing a field path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Empty field path")]
    Empty,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Missing list index in: {0}")]
    MissingIndex(String),

    #[error("Invalid list index: {0}")]
    InvalidIndex(String),

    #[error("Unknown list: {0}")]
    UnknownList(String),
}

/// Errors from applying an edit
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{list} has no item {index} (length {len})")]
    IndexOutOfRange {
        list: ListKind,
        index: usize,
        len: usize,
    },
}

/// Repeated sections of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Education,
    Skills,
    Projects,
    Certifications,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Education => "education",
            ListKind::Skills => "skills",
            ListKind::Projects => "projects",
            ListKind::Certifications => "certifications",
        }
    }

    fn len(&self, doc: &ProfileDocument) -> usize {
        match self {
            ListKind::Education => doc.education.len(),
            ListKind::Skills => doc.skills.len(),
            ListKind::Projects => doc.projects.len(),
            ListKind::Certifications => doc.certifications.len(),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "education" => Ok(ListKind::Education),
            "skills" => Ok(ListKind::Skills),
            "projects" => Ok(ListKind::Projects),
            "certifications" => Ok(ListKind::Certifications),
            other => Err(PathError::UnknownList(other.into())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    Year,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Category,
    Items,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    TechStack,
    Description,
    Award,
    GithubLink,
    LiveLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationField {
    Name,
    Date,
}

/// Address of one editable text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Name,
    Role,
    Objective,
    Languages,
    Interests,
    Contact(ContactField),
    Education(usize, EducationField),
    Skill(usize, SkillField),
    Project(usize, ProjectField),
    Certification(usize, CertificationField),
}

impl FieldPath {
    /// Parses a dotted path (see module docs)
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PathError::Empty);
        }

        let parts: Vec<&str> = input.split('.').collect();
        let unknown = || PathError::UnknownField(input.to_string());

        match parts.as_slice() {
            ["name"] => Ok(FieldPath::Name),
            ["role"] => Ok(FieldPath::Role),
            ["objective"] => Ok(FieldPath::Objective),
            ["languages"] => Ok(FieldPath::Languages),
            ["interests"] => Ok(FieldPath::Interests),
            ["contact", field] => {
                let field = match *field {
                    "email" => ContactField::Email,
                    "phone" => ContactField::Phone,
                    "location" => ContactField::Location,
                    _ => return Err(unknown()),
                };
                Ok(FieldPath::Contact(field))
            }
            [list, rest @ ..] => {
                let list: ListKind = list.parse().map_err(|_| unknown())?;
                let (index, field) = match rest {
                    [] => return Err(PathError::MissingIndex(input.to_string())),
                    [index, field @ ..] => (parse_index(index)?, field),
                };
                Self::parse_item_field(list, index, field).ok_or_else(unknown)
            }
            [] => Err(PathError::Empty),
        }
    }

    fn parse_item_field(list: ListKind, index: usize, field: &[&str]) -> Option<Self> {
        let path = match (list, field) {
            (ListKind::Education, ["degree"]) => {
                FieldPath::Education(index, EducationField::Degree)
            }
            (ListKind::Education, ["institution"]) => {
                FieldPath::Education(index, EducationField::Institution)
            }
            (ListKind::Education, ["year"]) => FieldPath::Education(index, EducationField::Year),
            (ListKind::Education, ["score"]) => FieldPath::Education(index, EducationField::Score),
            (ListKind::Skills, ["category"]) => FieldPath::Skill(index, SkillField::Category),
            (ListKind::Skills, ["items"]) => FieldPath::Skill(index, SkillField::Items),
            (ListKind::Projects, ["title"]) => FieldPath::Project(index, ProjectField::Title),
            (ListKind::Projects, ["techStack"]) | (ListKind::Projects, ["tech_stack"]) => {
                FieldPath::Project(index, ProjectField::TechStack)
            }
            (ListKind::Projects, ["description"]) => {
                FieldPath::Project(index, ProjectField::Description)
            }
            (ListKind::Projects, ["award"]) => FieldPath::Project(index, ProjectField::Award),
            (ListKind::Projects, ["links", "github"]) => {
                FieldPath::Project(index, ProjectField::GithubLink)
            }
            (ListKind::Projects, ["links", "live"]) => {
                FieldPath::Project(index, ProjectField::LiveLink)
            }
            (ListKind::Certifications, ["name"]) => {
                FieldPath::Certification(index, CertificationField::Name)
            }
            (ListKind::Certifications, ["date"]) => {
                FieldPath::Certification(index, CertificationField::Date)
            }
            _ => return None,
        };
        Some(path)
    }

    /// Reads the current value of this field
    pub fn get<'a>(&self, doc: &'a ProfileDocument) -> Option<&'a str> {
        let value = match *self {
            FieldPath::Name => &doc.name,
            FieldPath::Role => &doc.role,
            FieldPath::Objective => &doc.objective,
            FieldPath::Languages => &doc.languages,
            FieldPath::Interests => &doc.interests,
            FieldPath::Contact(ContactField::Email) => &doc.contact.email,
            FieldPath::Contact(ContactField::Phone) => &doc.contact.phone,
            FieldPath::Contact(ContactField::Location) => &doc.contact.location,
            FieldPath::Education(i, field) => {
                let item = doc.education.get(i)?;
                match field {
                    EducationField::Degree => &item.degree,
                    EducationField::Institution => &item.institution,
                    EducationField::Year => &item.year,
                    EducationField::Score => &item.score,
                }
            }
            FieldPath::Skill(i, field) => {
                let item = doc.skills.get(i)?;
                match field {
                    SkillField::Category => &item.category,
                    SkillField::Items => &item.items,
                }
            }
            FieldPath::Project(i, field) => {
                let item = doc.projects.get(i)?;
                let links = item.links.as_ref();
                let value = match field {
                    ProjectField::Title => Some(&item.title),
                    ProjectField::TechStack => Some(&item.tech_stack),
                    ProjectField::Description => Some(&item.description),
                    ProjectField::Award => item.award.as_ref(),
                    ProjectField::GithubLink => links.and_then(|l| l.github.as_ref()),
                    ProjectField::LiveLink => links.and_then(|l| l.live.as_ref()),
                };
                return Some(value.map(String::as_str).unwrap_or_default());
            }
            FieldPath::Certification(i, field) => {
                let item = doc.certifications.get(i)?;
                match field {
                    CertificationField::Name => &item.name,
                    CertificationField::Date => &item.date,
                }
            }
        };
        Some(value.as_str())
    }

    fn slot<'a>(&self, doc: &'a mut ProfileDocument) -> Result<&'a mut String, EditError> {
        let slot = match *self {
            FieldPath::Name => &mut doc.name,
            FieldPath::Role => &mut doc.role,
            FieldPath::Objective => &mut doc.objective,
            FieldPath::Languages => &mut doc.languages,
            FieldPath::Interests => &mut doc.interests,
            FieldPath::Contact(ContactField::Email) => &mut doc.contact.email,
            FieldPath::Contact(ContactField::Phone) => &mut doc.contact.phone,
            FieldPath::Contact(ContactField::Location) => &mut doc.contact.location,
            FieldPath::Education(i, field) => {
                let item = item_mut(&mut doc.education, ListKind::Education, i)?;
                match field {
                    EducationField::Degree => &mut item.degree,
                    EducationField::Institution => &mut item.institution,
                    EducationField::Year => &mut item.year,
                    EducationField::Score => &mut item.score,
                }
            }
            FieldPath::Skill(i, field) => {
                let item = item_mut(&mut doc.skills, ListKind::Skills, i)?;
                match field {
                    SkillField::Category => &mut item.category,
                    SkillField::Items => &mut item.items,
                }
            }
            FieldPath::Project(i, field) => {
                let item = item_mut(&mut doc.projects, ListKind::Projects, i)?;
                match field {
                    ProjectField::Title => &mut item.title,
                    ProjectField::TechStack => &mut item.tech_stack,
                    ProjectField::Description => &mut item.description,
                    ProjectField::Award => item.award.get_or_insert_with(String::new),
                    ProjectField::GithubLink => item
                        .links
                        .get_or_insert_with(Default::default)
                        .github
                        .get_or_insert_with(String::new),
                    ProjectField::LiveLink => item
                        .links
                        .get_or_insert_with(Default::default)
                        .live
                        .get_or_insert_with(String::new),
                }
            }
            FieldPath::Certification(i, field) => {
                let item = item_mut(&mut doc.certifications, ListKind::Certifications, i)?;
                match field {
                    CertificationField::Name => &mut item.name,
                    CertificationField::Date => &mut item.date,
                }
            }
        };
        Ok(slot)
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

fn parse_index(raw: &str) -> Result<usize, PathError> {
    raw.parse()
        .map_err(|_| PathError::InvalidIndex(raw.to_string()))
}

/// One edit to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEdit {
    /// Replace the text of one field
    Set { path: FieldPath, value: String },
    /// Append a placeholder item to a list
    AddItem(ListKind),
    /// Remove the item at `index`
    RemoveItem { list: ListKind, index: usize },
}

impl DocumentEdit {
    /// Whether this edit is a complete action on its own
    ///
    /// Adding or removing an item is; typing into a field is not.
    pub fn is_checkpoint(&self) -> bool {
        !matches!(self, DocumentEdit::Set { .. })
    }

    /// Applies the edit, returning the edited copy
    pub fn apply(&self, doc: &ProfileDocument) -> Result<ProfileDocument, EditError> {
        let mut next = doc.clone();
        match self {
            DocumentEdit::Set { path, value } => {
                let slot = path.slot(&mut next)?;
                *slot = value.clone();
            }
            DocumentEdit::AddItem(list) => match list {
                ListKind::Education => next.education.push(placeholder_education()),
                ListKind::Skills => next.skills.push(placeholder_skill()),
                ListKind::Projects => next.projects.push(placeholder_project()),
                ListKind::Certifications => next.certifications.push(placeholder_certification()),
            },
            DocumentEdit::RemoveItem { list, index } => {
                let len = list.len(doc);
                if *index >= len {
                    return Err(EditError::IndexOutOfRange {
                        list: *list,
                        index: *index,
                        len,
                    });
                }
                match list {
                    ListKind::Education => {
                        next.education.remove(*index);
                    }
                    ListKind::Skills => {
                        next.skills.remove(*index);
                    }
                    ListKind::Projects => {
                        next.projects.remove(*index);
                    }
                    ListKind::Certifications => {
                        next.certifications.remove(*index);
                    }
                }
            }
        }
        Ok(next)
    }
}

fn item_mut<T>(items: &mut [T], list: ListKind, index: usize) -> Result<&mut T, EditError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { list, index, len })
}

fn placeholder_education() -> Education {
    Education {
        degree: "Degree Name".into(),
        institution: "Institution Name".into(),
        year: "Year".into(),
        score: "Score".into(),
    }
}

fn placeholder_skill() -> SkillCategory {
    SkillCategory::new("New Category", "Skill 1, Skill 2")
}

fn placeholder_project() -> Project {
    Project {
        title: "New Project – Tech Stack".into(),
        tech_stack: "Technologies".into(),
        description: "Description...".into(),
        links: None,
        award: None,
    }
}

fn placeholder_certification() -> Certification {
    Certification {
        name: "Certification Name".into(),
        date: "Date".into(),
    }
}
