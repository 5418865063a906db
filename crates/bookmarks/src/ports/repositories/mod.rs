//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod bookmark_repository;
mod folder_repository;

pub use bookmark_repository::*;
pub use folder_repository::*;
