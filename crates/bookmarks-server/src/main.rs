use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{HttpUrlValidator, PgBookmarkRepository, PgFolderRepository};
use application::{BookmarkService, FolderService};
use bookmarks::{UrlValidatorConfig, DEFAULT_URL_TIMEOUT_SECS};

/// Type aliases for application services with concrete adapter implementations
pub type AppBookmarkService =
    BookmarkService<PgBookmarkRepository, PgFolderRepository, HttpUrlValidator>;
pub type AppFolderService = FolderService<PgFolderRepository, PgBookmarkRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub bookmark_service: Arc<AppBookmarkService>,
    pub folder_service: Arc<AppFolderService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Bookmarks API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// URL checker settings from raw secret values
///
/// An absent, unparsable or zero timeout falls back to the default.
fn url_validator_config(
    timeout_secs: Option<&str>,
    user_agent: Option<String>,
) -> UrlValidatorConfig {
    let timeout_secs = match timeout_secs {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!(
                    "Ignoring URL_TIMEOUT_SECS={}, using {}s",
                    raw,
                    DEFAULT_URL_TIMEOUT_SECS
                );
                DEFAULT_URL_TIMEOUT_SECS
            }
        },
        None => DEFAULT_URL_TIMEOUT_SECS,
    };

    let mut config = UrlValidatorConfig::with_timeout_secs(timeout_secs);
    if let Some(user_agent) = user_agent {
        config.user_agent = user_agent;
    }
    config
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Bookmarks API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {e}"))?;

    tracing::info!("Database migrations completed");

    let config = url_validator_config(
        secrets.get("URL_TIMEOUT_SECS").as_deref(),
        secrets.get("URL_USER_AGENT"),
    );
    tracing::info!(
        "URL validation: timeout {}s, user agent {}",
        config.timeout.as_secs(),
        config.user_agent
    );
    let validator = HttpUrlValidator::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

    // Initialize application services
    let bookmark_repo = Arc::new(PgBookmarkRepository::new(pool.clone()));
    let folder_repo = Arc::new(PgFolderRepository::new(pool));
    let bookmark_service = Arc::new(BookmarkService::new(
        bookmark_repo.clone(),
        folder_repo.clone(),
        Arc::new(validator),
    ));
    let folder_service = Arc::new(FolderService::new(folder_repo, bookmark_repo));

    let state = AppState {
        bookmark_service,
        folder_service,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::bookmark::router())
        .merge(routes::folder::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Bookmarks API ready");

    Ok(router.into())
}
