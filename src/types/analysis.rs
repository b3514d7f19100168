//! Trajectory analysis result types

use serde::{Deserialize, Serialize};

/// Summary statistics for a survey, including dogleg severity.
///
/// `total_displacement` is taken from the deepest station (maximum MD) while
/// `closure_distance` / `closure_azimuth` use the last station in sequence
/// order. The two only differ for surveys that are not in MD order; the split
/// is kept for compatibility with existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectoryAnalysis {
    /// Maximum measured depth
    pub total_length: f64,
    /// Horizontal offset of the deepest station
    pub total_displacement: f64,
    pub max_inclination: f64,
    pub max_azimuth: f64,
    /// Maximum true vertical depth
    pub vertical_section: f64,
    /// Horizontal offset of the last station
    pub closure_distance: f64,
    /// Direction of the last station from the wellhead (degrees, [0, 360))
    pub closure_azimuth: f64,
    pub point_count: usize,
    /// Maximum dogleg severity (degrees per 100 units MD)
    pub max_dls: f64,
    /// Mean dogleg severity (degrees per 100 units MD)
    pub avg_dls: f64,
}

/// Dogleg over one pair of adjacent stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DlsInterval {
    pub from_md: f64,
    pub to_md: f64,
    /// Total angle change over the interval (degrees)
    pub dogleg_deg: f64,
    /// Dogleg normalized to degrees per 100 units MD
    pub dls: f64,
}

/// Non-fatal conditions noticed while analyzing a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Fewer than two stations; dogleg statistics are reported as 0.
    DegenerateInput { point_count: usize },
    /// Intervals with zero or negative MD step left out of the DLS series.
    SkippedIntervals { count: usize },
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateInput { point_count } => write!(
                f,
                "{point_count} survey point(s); dogleg severity needs at least 2"
            ),
            Self::SkippedIntervals { count } => {
                write!(f, "{count} interval(s) with non-increasing MD skipped")
            }
        }
    }
}

/// Analysis plus the per-interval series it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: TrajectoryAnalysis,
    pub intervals: Vec<DlsInterval>,
    #[serde(default)]
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisReport {
    /// DLS values in interval order.
    pub fn dls_series(&self) -> Vec<f64> {
        self.intervals.iter().map(|i| i.dls).collect()
    }
}

// ============================================================================
// Trajectory Summary
// ============================================================================

/// Final station position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EndPoint {
    pub north: f64,
    pub east: f64,
    pub tvd: f64,
}

/// Header statistics attached to a trajectory listing.
///
/// Unlike [`TrajectoryAnalysis`], everything here comes from the last
/// station in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// MD of the last station
    pub total_depth: f64,
    /// Horizontal offset of the last station
    pub total_displacement: f64,
    pub max_inclination: f64,
    pub max_dls: f64,
    pub end_point: EndPoint,
    pub point_count: usize,
}
