//! Folder Application Service (Use Case)
//!
//! Keeps folder names unique and refuses to delete a folder that
//! still has bookmarks in it.

use std::sync::Arc;

use bookmarks::{
    BookmarkRepository, DomainError, Folder, FolderRepository, FolderView, FolderWithCount,
    NewFolder,
};

/// Application service for Folder operations
pub struct FolderService<F: FolderRepository, B: BookmarkRepository> {
    folders: Arc<F>,
    bookmarks: Arc<B>,
}

impl<F: FolderRepository, B: BookmarkRepository> FolderService<F, B> {
    pub fn new(folders: Arc<F>, bookmarks: Arc<B>) -> Self {
        Self { folders, bookmarks }
    }

    /// Get all Folders ordered by name
    pub async fn get_all(&self) -> Result<Vec<Folder>, DomainError> {
        self.folders.find_all_ordered_by_name().await
    }

    /// Get a Folder by ID together with its Bookmarks
    pub async fn get_by_id(&self, id: i64) -> Result<Option<FolderView>, DomainError> {
        let Some(folder) = self.folders.find_by_id(id).await? else {
            return Ok(None);
        };

        let bookmarks = self.bookmarks.find_by_folder_id(folder.id).await?;
        tracing::debug!("Folder {} holds {} bookmarks", folder.id, bookmarks.len());

        Ok(Some(FolderView { folder, bookmarks }))
    }

    /// Case-insensitive substring search over name and description
    pub async fn search(&self, term: &str) -> Result<Vec<Folder>, DomainError> {
        self.folders.search(term).await
    }

    /// Get all Folders with their Bookmark counts
    pub async fn get_all_with_bookmark_count(&self) -> Result<Vec<FolderWithCount>, DomainError> {
        self.folders.find_all_with_bookmark_count().await
    }

    /// Create a new Folder with a name no other Folder uses
    pub async fn create(&self, candidate: NewFolder) -> Result<Folder, DomainError> {
        candidate.validate()?;

        if self.folders.exists_by_name(&candidate.name).await? {
            tracing::warn!("Folder name already taken: {}", candidate.name);
            return Err(DomainError::duplicate_folder_name(&candidate.name));
        }

        let saved = self.folders.insert(&candidate).await?;
        tracing::info!("Created Folder: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Rename or redescribe a Folder
    ///
    /// Keeping the current name is always allowed.
    pub async fn update(&self, id: i64, details: NewFolder) -> Result<Option<Folder>, DomainError> {
        let Some(mut folder) = self.folders.find_by_id(id).await? else {
            return Ok(None);
        };

        details.validate()?;

        if folder.name != details.name && self.folders.exists_by_name(&details.name).await? {
            tracing::warn!("Folder name already taken: {}", details.name);
            return Err(DomainError::duplicate_folder_name(&details.name));
        }

        folder.apply(details);
        let saved = self.folders.update(&folder).await?;
        tracing::info!("Updated Folder: {} ({})", saved.name, saved.id);

        Ok(Some(saved))
    }

    /// Delete an empty Folder; an unknown ID is not an error
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.folders.find_by_id(id).await?.is_none() {
            return Ok(());
        }

        let count = self.bookmarks.count_by_folder_id(id).await?;
        if count > 0 {
            tracing::warn!("Refusing to delete folder {} with {} bookmarks", id, count);
            return Err(DomainError::folder_not_empty());
        }

        if self.folders.delete_by_id(id).await? {
            tracing::info!("Deleted Folder: {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::InMemoryStore;
    use bookmarks::NewBookmark;

    fn service() -> (FolderService<InMemoryStore, InMemoryStore>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (FolderService::new(store.clone(), store.clone()), store)
    }

    async fn bookmark_in(store: &InMemoryStore, folder_id: i64, title: &str) {
        BookmarkRepository::insert(
            store,
            &NewBookmark::new(title, "https://example.com").in_folder(folder_id),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let (service, _) = service();

        let folder = service
            .create(NewFolder::new("Work").with_description("Job links"))
            .await
            .unwrap();

        assert!(folder.id > 0);
        assert_eq!(folder.name, "Work");
        assert_eq!(folder.description.as_deref(), Some("Job links"));
    }

    #[tokio::test]
    async fn test_create_duplicate_name_fails() {
        let (service, store) = service();
        service.create(NewFolder::new("Work")).await.unwrap();

        let err = service.create(NewFolder::new("Work")).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid argument: Folder with name 'Work' already exists"
        );
        assert_eq!(store.folder_count(), 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let (service, _) = service();
        service.create(NewFolder::new("Work")).await.unwrap();

        assert!(service.create(NewFolder::new("work")).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_blank_name_fails_validation() {
        let (service, _) = service();
        assert!(matches!(
            service.create(NewFolder::new(" ")).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_all_ordered_by_name() {
        let (service, _) = service();
        for name in ["Zeta", "Alpha", "Mid"] {
            service.create(NewFolder::new(name)).await.unwrap();
        }

        let names: Vec<_> = service
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();

        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[tokio::test]
    async fn test_get_by_id_includes_bookmarks() {
        let (service, store) = service();
        let work = service.create(NewFolder::new("Work")).await.unwrap();
        let home = service.create(NewFolder::new("Home")).await.unwrap();
        bookmark_in(&store, work.id, "Tracker").await;
        bookmark_in(&store, work.id, "Wiki").await;
        bookmark_in(&store, home.id, "Recipes").await;

        let view = service.get_by_id(work.id).await.unwrap().unwrap();

        assert_eq!(view.folder, work);
        assert_eq!(view.bookmarks.len(), 2);
        assert!(view.bookmarks.iter().all(|b| b.folder_id == Some(work.id)));
        assert!(service.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_to_own_name_succeeds() {
        let (service, _) = service();
        let folder = service.create(NewFolder::new("Work")).await.unwrap();

        let updated = service
            .update(folder.id, NewFolder::new("Work").with_description("still work"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Work");
        assert_eq!(updated.description.as_deref(), Some("still work"));
    }

    #[tokio::test]
    async fn test_update_to_taken_name_fails() {
        let (service, _) = service();
        service.create(NewFolder::new("Work")).await.unwrap();
        let home = service.create(NewFolder::new("Home")).await.unwrap();

        let err = service
            .update(home.id, NewFolder::new("Work"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument { .. }));
        let stored = service.get_by_id(home.id).await.unwrap().unwrap();
        assert_eq!(stored.folder.name, "Home");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let (service, _) = service();
        assert!(service
            .update(5, NewFolder::new("Anything"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_non_empty_folder_conflicts() {
        let (service, store) = service();
        let folder = service.create(NewFolder::new("Work")).await.unwrap();
        bookmark_in(&store, folder.id, "Tracker").await;

        let err = service.delete(folder.id).await.unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert!(service.get_by_id(folder.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_empty_and_missing() {
        let (service, store) = service();
        let folder = service.create(NewFolder::new("Empty")).await.unwrap();

        service.delete(folder.id).await.unwrap();
        assert_eq!(store.folder_count(), 0);

        assert!(service.delete(folder.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_search_and_counts() {
        let (service, store) = service();
        let work = service
            .create(NewFolder::new("Work").with_description("Office STUFF"))
            .await
            .unwrap();
        service.create(NewFolder::new("Home")).await.unwrap();
        bookmark_in(&store, work.id, "Tracker").await;

        let found = service.search("stuff").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, work.id);

        let counts = service.get_all_with_bookmark_count().await.unwrap();
        let summary: Vec<_> = counts
            .iter()
            .map(|c| (c.folder.name.as_str(), c.bookmark_count))
            .collect();
        assert_eq!(summary, vec![("Home", 0), ("Work", 1)]);
    }
}
