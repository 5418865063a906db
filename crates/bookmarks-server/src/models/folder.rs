//! Folder DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bookmarks::{Folder, FolderView, FolderWithCount, NewFolder};

use super::BookmarkResponse;

/// Create or update Folder request
#[derive(Debug, Deserialize, ToSchema)]
pub struct FolderRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl From<FolderRequest> for NewFolder {
    fn from(req: FolderRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Folder response
#[derive(Debug, Serialize, ToSchema)]
pub struct FolderResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(f: Folder) -> Self {
        Self {
            id: f.id,
            name: f.name,
            description: f.description,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

/// Folder with the bookmarks filed in it
#[derive(Debug, Serialize, ToSchema)]
pub struct FolderDetailResponse {
    pub folder: FolderResponse,
    pub bookmarks: Vec<BookmarkResponse>,
}

impl From<FolderView> for FolderDetailResponse {
    fn from(view: FolderView) -> Self {
        Self {
            folder: view.folder.into(),
            bookmarks: view.bookmarks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Folder with its bookmark count
#[derive(Debug, Serialize, ToSchema)]
pub struct FolderCountResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub bookmark_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FolderWithCount> for FolderCountResponse {
    fn from(fc: FolderWithCount) -> Self {
        Self {
            id: fc.folder.id,
            name: fc.folder.name,
            description: fc.folder.description,
            bookmark_count: fc.bookmark_count,
            created_at: fc.folder.created_at,
            updated_at: fc.folder.updated_at,
        }
    }
}

/// Folder search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct FolderSearchQuery {
    /// Case-insensitive text matched against name and description
    pub query: String,
}
