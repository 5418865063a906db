//! Folder Routes
//!
//! HTTP handlers that delegate to FolderService for business logic.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::{error_response, not_found, ApiError};
use crate::models::{
    FolderCountResponse, FolderDetailResponse, FolderRequest, FolderResponse, FolderSearchQuery,
};
use crate::AppState;

/// List all Folders ordered by name
#[utoipa::path(
    get,
    path = "/api/folders",
    responses(
        (status = 200, description = "List of all folders", body = Vec<FolderResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderResponse>>, ApiError> {
    let folders = state
        .folder_service
        .get_all()
        .await
        .map_err(error_response)?;

    Ok(Json(folders.into_iter().map(Into::into).collect()))
}

/// Get Folder by ID with its bookmarks
#[utoipa::path(
    get,
    path = "/api/folders/{id}",
    params(("id" = i64, Path, description = "Folder ID")),
    responses(
        (status = 200, description = "Folder found", body = FolderDetailResponse),
        (status = 404, description = "Folder not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FolderDetailResponse>, ApiError> {
    let view = state
        .folder_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| not_found("Folder"))?;

    Ok(Json(view.into()))
}

/// Create new Folder
#[utoipa::path(
    post,
    path = "/api/folders",
    request_body = FolderRequest,
    responses(
        (status = 200, description = "Folder created successfully", body = FolderResponse),
        (status = 400, description = "Invalid fields or duplicate name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn create_folder(
    State(state): State<AppState>,
    Json(payload): Json<FolderRequest>,
) -> Result<Json<FolderResponse>, ApiError> {
    let folder = state
        .folder_service
        .create(payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(folder.into()))
}

/// Update Folder
#[utoipa::path(
    put,
    path = "/api/folders/{id}",
    params(("id" = i64, Path, description = "Folder ID")),
    request_body = FolderRequest,
    responses(
        (status = 200, description = "Folder updated successfully", body = FolderResponse),
        (status = 400, description = "Invalid fields or duplicate name"),
        (status = 404, description = "Folder not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FolderRequest>,
) -> Result<Json<FolderResponse>, ApiError> {
    let folder = state
        .folder_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?
        .ok_or_else(|| not_found("Folder"))?;

    Ok(Json(folder.into()))
}

/// Delete Folder
///
/// Refused with 409 while any bookmark is still filed in it.
#[utoipa::path(
    delete,
    path = "/api/folders/{id}",
    params(("id" = i64, Path, description = "Folder ID")),
    responses(
        (status = 200, description = "Folder deleted or already absent"),
        (status = 409, description = "Folder still contains bookmarks"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .folder_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Folder deleted"
    })))
}

/// Search Folders by name or description
#[utoipa::path(
    get,
    path = "/api/folders/search",
    params(FolderSearchQuery),
    responses(
        (status = 200, description = "Matching folders", body = Vec<FolderResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn search_folders(
    State(state): State<AppState>,
    Query(query): Query<FolderSearchQuery>,
) -> Result<Json<Vec<FolderResponse>>, ApiError> {
    let folders = state
        .folder_service
        .search(&query.query)
        .await
        .map_err(error_response)?;

    Ok(Json(folders.into_iter().map(Into::into).collect()))
}

/// List all Folders with their bookmark counts
#[utoipa::path(
    get,
    path = "/api/folders/with-count",
    responses(
        (status = 200, description = "Folders with counts", body = Vec<FolderCountResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Folder"
)]
pub async fn list_folders_with_count(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderCountResponse>>, ApiError> {
    let folders = state
        .folder_service
        .get_all_with_bookmark_count()
        .await
        .map_err(error_response)?;

    Ok(Json(folders.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/folders", get(list_folders).post(create_folder))
        .route("/api/folders/search", get(search_folders))
        .route("/api/folders/with-count", get(list_folders_with_count))
        .route(
            "/api/folders/:id",
            get(get_folder).put(update_folder).delete(delete_folder),
        )
}
