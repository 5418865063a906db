//! Bookmarks API Routes
//!
//! - /api/bookmarks - Bookmark management and search
//! - /api/folders - Folder management and search

pub mod bookmark;
pub mod folder;
pub mod swagger;

use axum::http::StatusCode;

use bookmarks::DomainError;

/// Error half of every handler's result
pub type ApiError = (StatusCode, String);

/// Map a domain failure to the status the caller should see
pub fn error_response(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::Validation(_) | DomainError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

pub fn not_found(entity: &str) -> ApiError {
    (StatusCode::NOT_FOUND, format!("{entity} not found"))
}
