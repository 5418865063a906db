//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Bookmark: a stored reference to a web resource
//! - Folder: a uniquely named container for bookmarks

mod bookmark;
mod folder;
mod rules;

pub use bookmark::*;
pub use folder::*;
pub use rules::{DESCRIPTION_MAX, NAME_MAX, TITLE_MAX, URL_MAX};
