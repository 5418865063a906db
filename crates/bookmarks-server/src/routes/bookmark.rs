//! Bookmark Routes
//!
//! HTTP handlers that delegate to BookmarkService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use super::{error_response, not_found, ApiError};
use crate::models::{
    BookmarkPageResponse, BookmarkRequest, BookmarkResponse, BookmarkSearchQuery, PageQuery,
};
use crate::AppState;

/// List all Bookmarks
#[utoipa::path(
    get,
    path = "/api/bookmarks",
    responses(
        (status = 200, description = "List of all bookmarks", body = Vec<BookmarkResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn list_bookmarks(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let bookmarks = state
        .bookmark_service
        .get_all()
        .await
        .map_err(error_response)?;

    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

/// Get Bookmark by ID
#[utoipa::path(
    get,
    path = "/api/bookmarks/{id}",
    params(("id" = i64, Path, description = "Bookmark ID")),
    responses(
        (status = 200, description = "Bookmark found", body = BookmarkResponse),
        (status = 404, description = "Bookmark not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = state
        .bookmark_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| not_found("Bookmark"))?;

    Ok(Json(bookmark.into()))
}

/// List Bookmarks in a Folder, one page at a time
#[utoipa::path(
    get,
    path = "/api/bookmarks/folder/{folder_id}",
    params(
        ("folder_id" = i64, Path, description = "Folder ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of bookmarks", body = BookmarkPageResponse),
        (status = 400, description = "Invalid sort parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn list_folder_bookmarks(
    State(state): State<AppState>,
    Path(folder_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<BookmarkPageResponse>, ApiError> {
    let page = query
        .to_page_request()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let result = state
        .bookmark_service
        .get_page_by_folder(folder_id, &page)
        .await
        .map_err(error_response)?;

    Ok(Json(result.into()))
}

/// Count Bookmarks in a Folder
#[utoipa::path(
    get,
    path = "/api/bookmarks/folder/{folder_id}/count",
    params(("folder_id" = i64, Path, description = "Folder ID")),
    responses(
        (status = 200, description = "Number of bookmarks in the folder", body = i64),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn count_folder_bookmarks(
    State(state): State<AppState>,
    Path(folder_id): Path<i64>,
) -> Result<Json<i64>, ApiError> {
    let count = state
        .bookmark_service
        .count_in_folder(folder_id)
        .await
        .map_err(error_response)?;

    Ok(Json(count))
}

/// Create new Bookmark
///
/// The URL must answer an HTTP GET with a success status.
#[utoipa::path(
    post,
    path = "/api/bookmarks",
    request_body = BookmarkRequest,
    responses(
        (status = 200, description = "Bookmark created successfully", body = BookmarkResponse),
        (status = 400, description = "Invalid fields, unreachable URL or unknown folder"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Option<Json<BookmarkRequest>>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = state
        .bookmark_service
        .create(payload.map(|Json(req)| req.into()))
        .await
        .map_err(error_response)?;

    Ok(Json(bookmark.into()))
}

/// Update Bookmark
#[utoipa::path(
    put,
    path = "/api/bookmarks/{id}",
    params(("id" = i64, Path, description = "Bookmark ID")),
    request_body = BookmarkRequest,
    responses(
        (status = 200, description = "Bookmark updated successfully", body = BookmarkResponse),
        (status = 400, description = "Invalid fields, unreachable URL or unknown folder"),
        (status = 404, description = "Bookmark not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<BookmarkRequest>>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = state
        .bookmark_service
        .update(id, payload.map(|Json(req)| req.into()))
        .await
        .map_err(error_response)?
        .ok_or_else(|| not_found("Bookmark"))?;

    Ok(Json(bookmark.into()))
}

/// Delete Bookmark (idempotent)
#[utoipa::path(
    delete,
    path = "/api/bookmarks/{id}",
    params(("id" = i64, Path, description = "Bookmark ID")),
    responses(
        (status = 200, description = "Bookmark deleted or already absent"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .bookmark_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Bookmark deleted"
    })))
}

/// Delete several Bookmarks
#[utoipa::path(
    delete,
    path = "/api/bookmarks/bulk",
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Bookmarks deleted"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn delete_bookmarks(
    State(state): State<AppState>,
    Json(ids): Json<Vec<i64>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state
        .bookmark_service
        .delete_many(&ids)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "deleted": deleted
    })))
}

/// Search Bookmarks by title or description
#[utoipa::path(
    get,
    path = "/api/bookmarks/search",
    params(BookmarkSearchQuery),
    responses(
        (status = 200, description = "Page of matching bookmarks", body = BookmarkPageResponse),
        (status = 400, description = "Invalid sort parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookmark"
)]
pub async fn search_bookmarks(
    State(state): State<AppState>,
    Query(query): Query<BookmarkSearchQuery>,
) -> Result<Json<BookmarkPageResponse>, ApiError> {
    let page = query
        .to_page_request()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let result = state
        .bookmark_service
        .search_page(&query.query, &page)
        .await
        .map_err(error_response)?;

    Ok(Json(result.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/api/bookmarks/search", get(search_bookmarks))
        .route("/api/bookmarks/bulk", delete(delete_bookmarks))
        .route(
            "/api/bookmarks/:id",
            get(get_bookmark)
                .put(update_bookmark)
                .delete(delete_bookmark),
        )
        .route(
            "/api/bookmarks/folder/:folder_id",
            get(list_folder_bookmarks),
        )
        .route(
            "/api/bookmarks/folder/:folder_id/count",
            get(count_folder_bookmarks),
        )
}
