//! Bookmark - A stored reference to a web resource

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::rules::{self, DESCRIPTION_MAX, TITLE_MAX, URL_MAX};
use crate::domain::errors::DomainError;

/// Accepted shape of a bookmark URL: scheme, then a host/path without whitespace
const URL_PATTERN: &str = r"^(https?|ftp)://[^\s/$.?#].[^\s]*$";

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// A persisted bookmark
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub folder_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bookmark fields supplied by a caller, before storage assigns id and timestamps
///
/// Used both for creation and as the full replacement set on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub folder_id: Option<i64>,
}

impl NewBookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: url.into(),
            folder_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn in_folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Check field sizes and the URL pattern
    pub fn validate(&self) -> Result<(), DomainError> {
        rules::required("Title", &self.title, TITLE_MAX)?;
        rules::optional("Description", self.description.as_deref(), DESCRIPTION_MAX)?;
        rules::required("URL", &self.url, URL_MAX)?;

        if !url_pattern().is_match(&self.url) {
            return Err(DomainError::Validation("Invalid URL format".to_string()));
        }

        Ok(())
    }
}

impl Bookmark {
    /// Replace every caller-editable field with `details`
    pub fn apply(&mut self, details: NewBookmark) {
        self.title = details.title;
        self.description = details.description;
        self.url = details.url;
        self.folder_id = details.folder_id;
    }

    /// Case-insensitive substring match on title or description
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_validation(result: Result<(), DomainError>, expected: &str) {
        match result {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_bookmark() {
        let bookmark = NewBookmark::new("Example", "https://example.com")
            .with_description("An example site");
        assert!(bookmark.validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let bookmark = NewBookmark::new("  ", "https://example.com");
        assert_validation(bookmark.validate(), "Title is required");
    }

    #[test]
    fn test_long_fields_rejected() {
        let bookmark = NewBookmark::new("x".repeat(256), "https://example.com");
        assert_validation(bookmark.validate(), "Title must not exceed 255 characters");

        let bookmark =
            NewBookmark::new("Example", "https://example.com").with_description("d".repeat(501));
        assert_validation(
            bookmark.validate(),
            "Description must not exceed 500 characters",
        );

        let long_url = format!("https://example.com/{}", "p".repeat(2048));
        let bookmark = NewBookmark::new("Example", long_url);
        assert_validation(bookmark.validate(), "URL must not exceed 2048 characters");
    }

    #[test]
    fn test_length_counts_characters() {
        let bookmark = NewBookmark::new("é".repeat(255), "https://example.com");
        assert!(bookmark.validate().is_ok());
    }

    #[test]
    fn test_url_pattern() {
        for bad in ["example.com", "https://exa mple.com", "gopher://example.com", "http://"] {
            let bookmark = NewBookmark::new("Example", bad);
            assert_validation(bookmark.validate(), "Invalid URL format");
        }

        for good in ["http://a.b", "ftp://files.example.com/x", "https://example.com/?q=1#f"] {
            let bookmark = NewBookmark::new("Example", good);
            assert!(bookmark.validate().is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let now = Utc::now();
        let bookmark = Bookmark {
            id: 1,
            title: "My Example Site".to_string(),
            description: Some("Docs and NOTES".to_string()),
            url: "https://example.com".to_string(),
            folder_id: None,
            created_at: now,
            updated_at: now,
        };

        assert!(bookmark.matches("example"));
        assert!(bookmark.matches("EXAMPLE"));
        assert!(bookmark.matches("notes"));
        assert!(!bookmark.matches("missing"));
    }
}
