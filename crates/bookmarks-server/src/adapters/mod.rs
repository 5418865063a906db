//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;
pub mod url_validator;

// Re-exports
pub use postgres::{PgBookmarkRepository, PgFolderRepository};
pub use url_validator::HttpUrlValidator;
