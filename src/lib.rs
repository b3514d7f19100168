//! H2Oil Well Profile: trajectory analysis service
//!
//! Survey statistics and dogleg severity for directional well trajectories.
//!
//! ## Architecture
//!
//! - **Trajectory Engine**: survey validation, aggregate statistics, DLS series
//! - **API**: Axum HTTP layer mapping engine errors to status codes
//! - **Config**: TOML service configuration with typo detection

pub mod api;
pub mod config;
pub mod trajectory;
pub mod types;

// Re-export configuration
pub use config::ServiceConfig;

// Re-export the analysis entry points
pub use trajectory::{analyze, analyze_report, summarize, ValidationError};

// Re-export commonly used types
pub use types::{
    AnalysisReport, AnalysisWarning, DlsInterval, SurveyPoint, TrajectoryAnalysis,
    TrajectorySummary, UnitSystem, WellTrajectory,
};
