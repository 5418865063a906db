//! Folder - A named container for bookmarks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rules::{self, DESCRIPTION_MAX, NAME_MAX};
use super::Bookmark;
use crate::domain::errors::DomainError;

/// A persisted folder
///
/// A folder knows nothing about its members; see [`FolderView`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Folder fields supplied by a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
    pub description: Option<String>,
}

/// A folder together with the bookmarks currently filed in it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderView {
    pub folder: Folder,
    pub bookmarks: Vec<Bookmark>,
}

/// A folder annotated with how many bookmarks reference it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderWithCount {
    pub folder: Folder,
    pub bookmark_count: i64,
}

impl NewFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        rules::required("Folder name", &self.name, NAME_MAX)?;
        rules::optional("Description", self.description.as_deref(), DESCRIPTION_MAX)
    }
}

impl Folder {
    pub fn apply(&mut self, details: NewFolder) {
        self.name = details.name;
        self.description = details.description;
    }

    /// Case-insensitive substring match on name or description
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}
