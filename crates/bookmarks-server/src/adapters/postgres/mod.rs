//! PostgreSQL Repository Implementations

mod bookmark_repository;
mod folder_repository;

pub use bookmark_repository::PgBookmarkRepository;
pub use folder_repository::PgFolderRepository;

use bookmarks::DomainError;

/// Escape LIKE wildcards so the term matches literally as a substring
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Generic storage failure
pub(crate) fn repository_error(e: sqlx::Error) -> DomainError {
    tracing::error!("Database error: {}", e);
    DomainError::Repository(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}
