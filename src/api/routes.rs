//! API route definitions
//!
//! Legacy (bare JSON, kept for the existing web frontend):
//! - GET  /                       - service banner
//! - GET  /health                 - liveness
//! - POST /trajectory/analyze     - survey statistics and DLS
//! - POST /trajectory/summary     - end point and header statistics
//!
//! v2 (enveloped, mounted under /api/v2):
//! - GET  /health
//! - POST /trajectory/analyze     - statistics plus per-interval DLS series
//! - POST /trajectory/summary

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};

/// Routes at the root, matching the original service paths
pub fn legacy_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/trajectory/analyze", post(handlers::analyze_trajectory))
        .route("/trajectory/summary", post(handlers::summarize_trajectory))
        .with_state(state)
}

/// Enveloped routes, nested under /api/v2
pub fn v2_routes() -> Router {
    Router::new()
        .route("/health", get(handlers::health_v2))
        .route("/trajectory/analyze", post(handlers::analyze_trajectory_v2))
        .route("/trajectory/summary", post(handlers::summarize_trajectory_v2))
}
