//! Paging and sorting for bookmark listings

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Bookmark columns a listing may be sorted by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkSort {
    #[default]
    Title,
    Url,
    CreatedAt,
    UpdatedAt,
}

impl BookmarkSort {
    /// Column name in storage
    pub fn column(&self) -> &'static str {
        match self {
            BookmarkSort::Title => "title",
            BookmarkSort::Url => "url",
            BookmarkSort::CreatedAt => "created_at",
            BookmarkSort::UpdatedAt => "updated_at",
        }
    }
}

impl std::str::FromStr for BookmarkSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(BookmarkSort::Title),
            "url" => Ok(BookmarkSort::Url),
            "created_at" | "createdAt" => Ok(BookmarkSort::CreatedAt),
            "updated_at" | "updatedAt" => Ok(BookmarkSort::UpdatedAt),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Which slice of a listing to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: BookmarkSort,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Build a request, clamping `size` to `1..=MAX_PAGE_SIZE`
    pub fn new(page: u32, size: u32, sort_by: BookmarkSort, direction: SortDirection) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort_by,
            direction,
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, BookmarkSort::default(), SortDirection::default())
    }
}

/// One page of a listing plus the totals needed to navigate it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            // Literal requests can bypass the clamp in `PageRequest::new`
            total_pages: total_elements.div_ceil(u64::from(request.size.max(1))),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
