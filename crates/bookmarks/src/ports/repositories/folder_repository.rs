//! Folder Repository Port
//!
//! Abstract interface for Folder persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Folder, FolderWithCount, NewFolder};

/// Repository interface for Folder entities
///
/// Implementations are expected to enforce name uniqueness themselves
/// (for example with a unique index) and report a clash as
/// [`DomainError::InvalidArgument`].
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Find all Folders ordered by name ascending
    async fn find_all_ordered_by_name(&self) -> Result<Vec<Folder>, DomainError>;

    /// Find a Folder by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Folder>, DomainError>;

    /// Check if a Folder exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Check if a Folder with exactly this name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert a new Folder; storage assigns id and timestamps
    async fn insert(&self, folder: &NewFolder) -> Result<Folder, DomainError>;

    /// Persist name and description of an existing Folder
    async fn update(&self, folder: &Folder) -> Result<Folder, DomainError>;

    /// Delete a Folder by ID
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Case-insensitive substring search over name and description
    async fn search(&self, term: &str) -> Result<Vec<Folder>, DomainError>;

    /// All Folders with the number of Bookmarks referencing each
    async fn find_all_with_bookmark_count(&self) -> Result<Vec<FolderWithCount>, DomainError>;
}
