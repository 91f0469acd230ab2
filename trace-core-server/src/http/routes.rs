use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::handlers::{batches, clone, health, scans, trace};
use super::state::SharedState;
use crate::config::CorsSettings;

/// Default request body size limit (1MB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Build the full application router.
///
/// `/health` and `/api/trace/:batch_id` are public; everything under
/// `/api/admin` requires an admin bearer token.
pub fn create_router(state: SharedState, cors: &CorsSettings, body_limit: usize) -> Router {
    let admin = Router::new()
        .route(
            "/batches",
            get(batches::list_batches).post(batches::create_batch),
        )
        .route(
            "/batches/",
            get(batches::list_batches).post(batches::create_batch),
        )
        .route(
            "/batches/:batch_id",
            get(batches::get_batch)
                .put(batches::update_batch)
                .delete(batches::delete_batch),
        )
        .route("/batches/:batch_id/scans", get(scans::list_scans))
        .route("/batch/clone", post(clone::clone_batch));

    Router::new()
        .route("/health", get(health::health))
        .route("/api/trace/:batch_id", get(trace::trace_batch))
        .nest("/api/admin", admin)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    if settings.allow_any_origin {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
