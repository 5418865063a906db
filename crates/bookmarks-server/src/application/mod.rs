//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod bookmark_service;
mod folder_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use bookmark_service::BookmarkService;
pub use folder_service::FolderService;
