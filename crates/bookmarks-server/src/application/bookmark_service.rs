//! Bookmark Application Service (Use Case)
//!
//! Enforces bookmark invariants around CRUD and search: the URL must
//! be valid and reachable, and a referenced folder must exist. Every
//! check runs before the single write, so a rejected call changes nothing.

use std::sync::Arc;

use bookmarks::{
    Bookmark, BookmarkRepository, DomainError, FolderRepository, NewBookmark, Page, PageRequest,
    UrlValidator,
};

/// Application service for Bookmark operations
pub struct BookmarkService<B: BookmarkRepository, F: FolderRepository, V: UrlValidator> {
    bookmarks: Arc<B>,
    folders: Arc<F>,
    validator: Arc<V>,
}

impl<B: BookmarkRepository, F: FolderRepository, V: UrlValidator> BookmarkService<B, F, V> {
    pub fn new(bookmarks: Arc<B>, folders: Arc<F>, validator: Arc<V>) -> Self {
        Self {
            bookmarks,
            folders,
            validator,
        }
    }

    /// Get all Bookmarks
    pub async fn get_all(&self) -> Result<Vec<Bookmark>, DomainError> {
        let bookmarks = self.bookmarks.find_all().await?;
        tracing::debug!("Fetched {} bookmarks", bookmarks.len());
        Ok(bookmarks)
    }

    /// Get a Bookmark by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, DomainError> {
        self.bookmarks.find_by_id(id).await
    }

    /// Get the Bookmarks filed in a Folder
    pub async fn get_by_folder(&self, folder_id: i64) -> Result<Vec<Bookmark>, DomainError> {
        self.bookmarks.find_by_folder_id(folder_id).await
    }

    /// Get one page of the Bookmarks filed in a Folder
    pub async fn get_page_by_folder(
        &self,
        folder_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError> {
        let result = self.bookmarks.find_page_by_folder_id(folder_id, page).await?;
        tracing::debug!(
            "Fetched {} of {} bookmarks for folder {}",
            result.content.len(),
            result.total_elements,
            folder_id
        );
        Ok(result)
    }

    /// Case-insensitive substring search over title and description
    pub async fn search(&self, term: &str) -> Result<Vec<Bookmark>, DomainError> {
        self.bookmarks.search(term).await
    }

    /// Paged variant of [`BookmarkService::search`]
    pub async fn search_page(
        &self,
        term: &str,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError> {
        self.bookmarks.search_page(term, page).await
    }

    /// Create a new Bookmark
    pub async fn create(&self, candidate: Option<NewBookmark>) -> Result<Bookmark, DomainError> {
        let candidate =
            candidate.ok_or_else(|| DomainError::invalid_argument("Bookmark must not be null"))?;

        self.check(&candidate).await?;

        let saved = self.bookmarks.insert(&candidate).await?;
        tracing::info!("Created Bookmark: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Replace the fields of an existing Bookmark
    ///
    /// Returns `Ok(None)` when no Bookmark has this ID. The URL is
    /// checked again even when it did not change.
    pub async fn update(
        &self,
        id: i64,
        details: Option<NewBookmark>,
    ) -> Result<Option<Bookmark>, DomainError> {
        let details = details
            .ok_or_else(|| DomainError::invalid_argument("Bookmark details must not be null"))?;

        let Some(mut bookmark) = self.bookmarks.find_by_id(id).await? else {
            tracing::debug!("Bookmark {} not found for update", id);
            return Ok(None);
        };

        self.check(&details).await?;

        bookmark.apply(details);
        let saved = self.bookmarks.update(&bookmark).await?;
        tracing::info!("Updated Bookmark: {} ({})", saved.title, saved.id);

        Ok(Some(saved))
    }

    /// Delete a Bookmark; an unknown ID is not an error
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.bookmarks.delete_by_id(id).await? {
            tracing::info!("Deleted Bookmark: {}", id);
        }
        Ok(())
    }

    /// Delete every listed Bookmark; unknown IDs are skipped
    pub async fn delete_many(&self, ids: &[i64]) -> Result<u64, DomainError> {
        let deleted = self.bookmarks.delete_all_by_id(ids).await?;
        tracing::info!("Deleted {} of {} requested bookmarks", deleted, ids.len());
        Ok(deleted)
    }

    /// Count the Bookmarks filed in a Folder
    pub async fn count_in_folder(&self, folder_id: i64) -> Result<i64, DomainError> {
        self.bookmarks.count_by_folder_id(folder_id).await
    }

    /// Field rules, then URL liveness, then folder existence
    async fn check(&self, details: &NewBookmark) -> Result<(), DomainError> {
        details.validate()?;

        self.validator.validate_url(&details.url).await.map_err(|e| {
            tracing::warn!("Rejected bookmark URL {}: {}", details.url, e);
            DomainError::from(e)
        })?;

        if let Some(folder_id) = details.folder_id {
            if !self.folders.exists_by_id(folder_id).await? {
                tracing::warn!("Folder not found with id: {}", folder_id);
                return Err(DomainError::folder_not_found(folder_id));
            }
        }

        Ok(())
    }
}
