//! Request/Response Models
//!
//! - Bookmark: stored links
//! - Folder: named groups of bookmarks

mod bookmark;
mod folder;

pub use bookmark::*;
pub use folder::*;
