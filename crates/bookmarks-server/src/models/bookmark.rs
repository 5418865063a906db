//! Bookmark DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bookmarks::{
    Bookmark, BookmarkSort, NewBookmark, Page, PageRequest, SortDirection, DEFAULT_PAGE_SIZE,
};

// ============================================
// Request/Response DTOs
// ============================================

/// Create or update Bookmark request
///
/// Missing `title`/`url` deserialize as empty strings and are
/// rejected by validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookmarkRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub folder_id: Option<i64>,
}

impl From<BookmarkRequest> for NewBookmark {
    fn from(req: BookmarkRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            url: req.url,
            folder_id: req.folder_id,
        }
    }
}

/// Bookmark response
#[derive(Debug, Serialize, ToSchema)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub folder_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            title: b.title,
            description: b.description,
            url: b.url,
            folder_id: b.folder_id,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// One page of bookmarks
#[derive(Debug, Serialize, ToSchema)]
pub struct BookmarkPageResponse {
    pub content: Vec<BookmarkResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Bookmark>> for BookmarkPageResponse {
    fn from(page: Page<Bookmark>) -> Self {
        let page = page.map(BookmarkResponse::from);
        Self {
            content: page.content,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

/// Paging and sorting query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Zero-based page index (default 0)
    pub page: Option<u32>,
    /// Page size (default 20, max 100)
    pub size: Option<u32>,
    /// title | url | created_at | updated_at (default title)
    pub sort_by: Option<String>,
    /// asc | desc (default asc)
    pub sort_dir: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> Result<PageRequest, String> {
        let sort_by = self
            .sort_by
            .as_deref()
            .map(str::parse::<BookmarkSort>)
            .transpose()?
            .unwrap_or_default();
        let direction = self
            .sort_dir
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();

        Ok(PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort_by,
            direction,
        ))
    }
}

/// Bookmark search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookmarkSearchQuery {
    /// Case-insensitive text matched against title and description
    pub query: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl BookmarkSearchQuery {
    pub fn to_page_request(&self) -> Result<PageRequest, String> {
        PageQuery {
            page: self.page,
            size: self.size,
            sort_by: self.sort_by.clone(),
            sort_dir: self.sort_dir.clone(),
        }
        .to_page_request()
    }
}
