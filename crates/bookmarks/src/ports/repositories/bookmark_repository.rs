//! Bookmark Repository Port
//!
//! Abstract interface for Bookmark persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Bookmark, NewBookmark, Page, PageRequest};

/// Repository interface for Bookmark entities
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Find all Bookmarks
    async fn find_all(&self) -> Result<Vec<Bookmark>, DomainError>;

    /// Find a Bookmark by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, DomainError>;

    /// Find all Bookmarks filed in a Folder
    async fn find_by_folder_id(&self, folder_id: i64) -> Result<Vec<Bookmark>, DomainError>;

    /// Find one page of the Bookmarks filed in a Folder
    async fn find_page_by_folder_id(
        &self,
        folder_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError>;

    /// Insert a new Bookmark; storage assigns id and timestamps
    async fn insert(&self, bookmark: &NewBookmark) -> Result<Bookmark, DomainError>;

    /// Persist the editable fields of an existing Bookmark
    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, DomainError>;

    /// Delete a Bookmark by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Delete every Bookmark whose ID is listed, returning how many were removed
    async fn delete_all_by_id(&self, ids: &[i64]) -> Result<u64, DomainError>;

    /// Count the Bookmarks filed in a Folder
    async fn count_by_folder_id(&self, folder_id: i64) -> Result<i64, DomainError>;

    /// Case-insensitive substring search over title and description
    async fn search(&self, term: &str) -> Result<Vec<Bookmark>, DomainError>;

    /// Paged variant of [`BookmarkRepository::search`]
    async fn search_page(
        &self,
        term: &str,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError>;
}
