//! Domain Errors
//!
//! Error types for domain operations.

use std::time::Duration;

use thiserror::Error;

/// Why a candidate bookmark URL was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidUrl {
    #[error("URL cannot be null or empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    Malformed(String),

    #[error("Resource not accessible (HTTP {0})")]
    Status(u16),

    #[error("Timed out after {}s while accessing URL", .0.as_secs())]
    Timeout(Duration),

    #[error("Failed to access URL: {0}")]
    Unreachable(String),
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A field broke its format or size rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referential or input failure; the caller sent something unusable
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<InvalidUrl>,
    },

    /// The operation is blocked by the current state of the data
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: None,
        }
    }

    pub fn folder_not_found(folder_id: i64) -> Self {
        Self::invalid_argument(format!("Folder not found with id: {folder_id}"))
    }

    pub fn duplicate_folder_name(name: &str) -> Self {
        Self::invalid_argument(format!("Folder with name '{name}' already exists"))
    }

    pub fn folder_not_empty() -> Self {
        Self::Conflict("Cannot delete folder that contains bookmarks".to_string())
    }

    /// The URL failure this error wraps, if any
    pub fn invalid_url(&self) -> Option<&InvalidUrl> {
        match self {
            Self::InvalidArgument { source, .. } => source.as_ref(),
            _ => None,
        }
    }
}

impl From<InvalidUrl> for DomainError {
    fn from(err: InvalidUrl) -> Self {
        Self::InvalidArgument {
            message: format!("Invalid URL: {err}"),
            source: Some(err),
        }
    }
}
