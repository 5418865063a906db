//! Bookmarks Domain Library
//!
//! Core domain types and interfaces for the bookmark manager.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Bookmark, Folder) and their field rules
//!   - `value_objects/`: Immutable value types (WebUrl, PageRequest, Page)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (URL validation)
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks::domain::{Bookmark, Folder, NewBookmark};
//! use bookmarks::ports::{BookmarkRepository, UrlValidator};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Bookmark, BookmarkSort, DomainError, Folder, FolderView, FolderWithCount, InvalidUrl,
    NewBookmark, NewFolder, Page, PageRequest, SortDirection, WebUrl, DEFAULT_PAGE_SIZE,
};
pub use ports::{
    // Repositories
    BookmarkRepository,
    FolderRepository,
    // Services
    UrlValidator,
    UrlValidatorConfig,
    DEFAULT_URL_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
