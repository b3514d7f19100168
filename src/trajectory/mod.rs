//! Trajectory analysis engine
//!
//! Consumes an ordered survey (MD, TVD, inclination, azimuth, optional
//! north/east) and produces summary statistics plus a per-interval dogleg
//! severity series.
//!
//! ## Pipeline
//!
//! 1. `validation`: decode JSON input, reject missing / non-numeric fields
//! 2. `analyzer`: aggregate statistics and the DLS series
//! 3. `dogleg`: per-interval geometry used by the analyzer
//!
//! Everything here is pure and synchronous; each call works on its own input
//! and returns a fresh result.

mod analyzer;
pub mod dogleg;
pub mod validation;

pub use analyzer::{analyze, analyze_report, dls_series, summarize};
pub use validation::{parse_trajectory, parse_trajectory_json, validate_points, ValidationError};
