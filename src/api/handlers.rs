//! API request handlers
//!
//! Handlers decode the body into a typed trajectory, call the analysis engine
//! and map [`ValidationError`] onto the error envelope. Analysis is cheap
//! (linear in survey length) and runs inline on the request task.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::ServiceConfig;
use crate::trajectory::{self, ValidationError};
use crate::types::{AnalysisReport, AnalysisWarning, TrajectorySummary, UnitSystem, WellTrajectory};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// State
// ============================================================================

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Service banner for `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceBanner {
    pub message: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// v2 analysis payload: trajectory header plus the full report.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub unit_system: UnitSystem,
    pub dls_unit: &'static str,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// Trajectory header plus its summary statistics.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub unit_system: UnitSystem,
    pub length_unit: &'static str,
    #[serde(flatten)]
    pub summary: TrajectorySummary,
}

// ============================================================================
// Service Handlers
// ============================================================================

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: state.config.service.name.clone(),
        version: VERSION,
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: VERSION,
    })
}

/// GET /api/v2/health
pub async fn health_v2() -> Response {
    ApiResponse::ok(HealthResponse {
        status: "healthy",
        version: VERSION,
    })
}

/// Unmatched routes
pub async fn not_found(uri: Uri) -> Response {
    ApiErrorResponse::not_found(format!("No route for {}", uri.path()))
}

// ============================================================================
// Trajectory Handlers
// ============================================================================

/// POST /trajectory/analyze
///
/// Bare [`crate::types::TrajectoryAnalysis`] for existing frontend clients.
pub async fn analyze_trajectory(body: Result<Json<Value>, JsonRejection>) -> Response {
    match run_analysis(body) {
        Ok((_, report)) => Json(report.analysis).into_response(),
        Err(resp) => resp,
    }
}

/// POST /api/v2/trajectory/analyze
pub async fn analyze_trajectory_v2(body: Result<Json<Value>, JsonRejection>) -> Response {
    match run_analysis(body) {
        Ok((trajectory, report)) => ApiResponse::ok(AnalysisResponse {
            id: trajectory.id,
            name: trajectory.name,
            unit_system: trajectory.unit_system,
            dls_unit: trajectory.unit_system.dls_unit(),
            report,
        }),
        Err(resp) => resp,
    }
}

/// POST /trajectory/summary
pub async fn summarize_trajectory(body: Result<Json<Value>, JsonRejection>) -> Response {
    match run_summary(body) {
        Ok(summary) => Json(summary).into_response(),
        Err(resp) => resp,
    }
}

/// POST /api/v2/trajectory/summary
pub async fn summarize_trajectory_v2(body: Result<Json<Value>, JsonRejection>) -> Response {
    match run_summary(body) {
        Ok(summary) => ApiResponse::ok(summary),
        Err(resp) => resp,
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn run_analysis(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(WellTrajectory, AnalysisReport), Response> {
    let trajectory = decode_trajectory(body)?;
    let report = trajectory::analyze_report(&trajectory.points).map_err(reject)?;

    for warning in &report.warnings {
        log_warning(&trajectory, warning);
    }
    info!(
        name = trajectory.name.as_deref().unwrap_or("unnamed"),
        points = report.analysis.point_count,
        max_dls = report.analysis.max_dls,
        "Trajectory analyzed"
    );

    Ok((trajectory, report))
}

fn run_summary(body: Result<Json<Value>, JsonRejection>) -> Result<SummaryResponse, Response> {
    let trajectory = decode_trajectory(body)?;
    let summary = trajectory::summarize(&trajectory.points).map_err(reject)?;

    Ok(SummaryResponse {
        id: trajectory.id,
        name: trajectory.name,
        unit_system: trajectory.unit_system,
        length_unit: trajectory.unit_system.length_unit(),
        summary,
    })
}

fn decode_trajectory(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<WellTrajectory, Response> {
    let Json(value) = body.map_err(|rejection| {
        warn!(status = %rejection.status(), error = %rejection.body_text(), "Rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiErrorResponse::payload_too_large(rejection.body_text())
        } else {
            reject(ValidationError::Malformed(rejection.body_text()))
        }
    })?;
    trajectory::parse_trajectory(value).map_err(reject)
}

fn reject(error: ValidationError) -> Response {
    warn!(error = %error, "Trajectory validation failed");
    error.into_response()
}

fn log_warning(trajectory: &WellTrajectory, warning: &AnalysisWarning) {
    warn!(
        name = trajectory.name.as_deref().unwrap_or("unnamed"),
        "{}", warning
    );
}
