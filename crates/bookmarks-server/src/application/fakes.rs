//! In-memory port implementations for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use bookmarks::{
    Bookmark, BookmarkRepository, DomainError, Folder, FolderRepository, FolderWithCount,
    InvalidUrl, NewBookmark, NewFolder, Page, PageRequest, UrlValidator,
};

#[derive(Default)]
struct Tables {
    next_id: i64,
    bookmarks: Vec<Bookmark>,
    folders: Vec<Folder>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Both repositories over one set of tables, so folder counts see bookmarks
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of insert/update calls received
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn folder_count(&self) -> usize {
        self.tables.lock().unwrap().folders.len()
    }

    pub fn bookmark_count(&self) -> usize {
        self.tables.lock().unwrap().bookmarks.len()
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

fn paged(mut all: Vec<Bookmark>, page: &PageRequest) -> Page<Bookmark> {
    all.sort_by(|a, b| a.title.cmp(&b.title));
    let total = all.len() as u64;
    let content = all
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.size as usize)
        .collect();
    Page::new(content, page, total)
}

#[async_trait]
impl BookmarkRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Bookmark>, DomainError> {
        Ok(self.tables.lock().unwrap().bookmarks.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.bookmarks.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_folder_id(&self, folder_id: i64) -> Result<Vec<Bookmark>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .bookmarks
            .iter()
            .filter(|b| b.folder_id == Some(folder_id))
            .cloned()
            .collect())
    }

    async fn find_page_by_folder_id(
        &self,
        folder_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError> {
        let all = BookmarkRepository::find_by_folder_id(self, folder_id).await?;
        Ok(paged(all, page))
    }

    async fn insert(&self, bookmark: &NewBookmark) -> Result<Bookmark, DomainError> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let saved = Bookmark {
            id: tables.next_id(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            url: bookmark.url.clone(),
            folder_id: bookmark.folder_id,
            created_at: now,
            updated_at: now,
        };
        tables.bookmarks.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, DomainError> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let slot = tables
            .bookmarks
            .iter_mut()
            .find(|b| b.id == bookmark.id)
            .ok_or_else(|| DomainError::Repository("no such bookmark".to_string()))?;
        *slot = Bookmark {
            updated_at: Utc::now(),
            ..bookmark.clone()
        };
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.bookmarks.len();
        tables.bookmarks.retain(|b| b.id != id);
        Ok(tables.bookmarks.len() < before)
    }

    async fn delete_all_by_id(&self, ids: &[i64]) -> Result<u64, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.bookmarks.len();
        tables.bookmarks.retain(|b| !ids.contains(&b.id));
        Ok((before - tables.bookmarks.len()) as u64)
    }

    async fn count_by_folder_id(&self, folder_id: i64) -> Result<i64, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .bookmarks
            .iter()
            .filter(|b| b.folder_id == Some(folder_id))
            .count() as i64)
    }

    async fn search(&self, term: &str) -> Result<Vec<Bookmark>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .bookmarks
            .iter()
            .filter(|b| b.matches(term))
            .cloned()
            .collect())
    }

    async fn search_page(
        &self,
        term: &str,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError> {
        let all = BookmarkRepository::search(self, term).await?;
        Ok(paged(all, page))
    }
}

#[async_trait]
impl FolderRepository for InMemoryStore {
    async fn find_all_ordered_by_name(&self) -> Result<Vec<Folder>, DomainError> {
        let mut folders = self.tables.lock().unwrap().folders.clone();
        folders.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(folders)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Folder>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.folders.iter().find(|f| f.id == id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.folders.iter().any(|f| f.id == id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.folders.iter().any(|f| f.name == name))
    }

    async fn insert(&self, folder: &NewFolder) -> Result<Folder, DomainError> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let saved = Folder {
            id: tables.next_id(),
            name: folder.name.clone(),
            description: folder.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.folders.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, folder: &Folder) -> Result<Folder, DomainError> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let slot = tables
            .folders
            .iter_mut()
            .find(|f| f.id == folder.id)
            .ok_or_else(|| DomainError::Repository("no such folder".to_string()))?;
        *slot = Folder {
            updated_at: Utc::now(),
            ..folder.clone()
        };
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.folders.len();
        tables.folders.retain(|f| f.id != id);
        Ok(tables.folders.len() < before)
    }

    async fn search(&self, term: &str) -> Result<Vec<Folder>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .folders
            .iter()
            .filter(|f| f.matches(term))
            .cloned()
            .collect())
    }

    async fn find_all_with_bookmark_count(&self) -> Result<Vec<FolderWithCount>, DomainError> {
        let folders = self.find_all_ordered_by_name().await?;
        let tables = self.tables.lock().unwrap();
        Ok(folders
            .into_iter()
            .map(|folder| {
                let bookmark_count = tables
                    .bookmarks
                    .iter()
                    .filter(|b| b.folder_id == Some(folder.id))
                    .count() as i64;
                FolderWithCount {
                    folder,
                    bookmark_count,
                }
            })
            .collect())
    }
}

/// UrlValidator that answers without touching the network
pub struct StubUrlValidator {
    rejection: Option<InvalidUrl>,
    calls: AtomicUsize,
}

impl StubUrlValidator {
    pub fn accepting() -> Self {
        Self {
            rejection: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(rejection: InvalidUrl) -> Self {
        Self {
            rejection: Some(rejection),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlValidator for StubUrlValidator {
    async fn validate_url(&self, _url: &str) -> Result<(), InvalidUrl> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.rejection {
            Some(rejection) => Err(rejection.clone()),
            None => Ok(()),
        }
    }
}
