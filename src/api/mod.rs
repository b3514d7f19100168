//! REST API module using Axum
//!
//! Thin HTTP layer over the trajectory engine:
//! - legacy root routes returning bare JSON for the existing web frontend
//! - v2 API with a consistent envelope
//!
//! Error kinds from the engine are mapped to status codes here; the engine
//! itself knows nothing about HTTP.

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::AppState;

use axum::extract::DefaultBodyLimit;
use axum::http::header::HeaderValue;
use axum::http::Method;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::CorsConfig;

/// Build the CORS layer from the configured origin list.
///
/// Credentials are allowed, so request headers are mirrored rather than
/// wildcarded. Origins that are not valid header values are skipped.
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allowed: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "CORS: ignoring invalid origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        // No cross-origin allowed
        return CorsLayer::new().allow_methods([Method::GET, Method::POST]);
    }

    info!(origins = ?cors.allowed_origins, "CORS: allowing configured origins");
    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the complete application router.
pub fn create_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors);
    let body_limit = state.config.server.max_body_bytes;

    Router::new()
        .nest("/api/v2", routes::v2_routes())
        .merge(routes::legacy_routes(state))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
