//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Bookmark models
    BookmarkPageResponse,
    BookmarkRequest,
    BookmarkResponse,
    // Folder models
    FolderCountResponse,
    FolderDetailResponse,
    FolderRequest,
    FolderResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Bookmark endpoints
        super::bookmark::list_bookmarks,
        super::bookmark::get_bookmark,
        super::bookmark::list_folder_bookmarks,
        super::bookmark::count_folder_bookmarks,
        super::bookmark::create_bookmark,
        super::bookmark::update_bookmark,
        super::bookmark::delete_bookmark,
        super::bookmark::delete_bookmarks,
        super::bookmark::search_bookmarks,
        // Folder endpoints
        super::folder::list_folders,
        super::folder::get_folder,
        super::folder::create_folder,
        super::folder::update_folder,
        super::folder::delete_folder,
        super::folder::search_folders,
        super::folder::list_folders_with_count,
    ),
    info(
        title = "Bookmarks API",
        version = "0.1.0",
        description = "Bookmark manager - links checked for reachability, grouped into uniquely named folders.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Bookmark", description = "Bookmark management and search"),
        (name = "Folder", description = "Folder management and search"),
    ),
    components(
        schemas(
            // Bookmark
            BookmarkRequest,
            BookmarkResponse,
            BookmarkPageResponse,
            // Folder
            FolderRequest,
            FolderResponse,
            FolderDetailResponse,
            FolderCountResponse,
        )
    ),
)]
pub struct ApiDoc;
