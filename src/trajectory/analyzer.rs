//! Trajectory analysis: aggregate statistics and dogleg severity series

use statrs::statistics::Statistics;
use tracing::debug;

use super::dogleg::{closure_azimuth, dogleg_angle, dogleg_severity};
use super::validation::{validate_points, ValidationError};
use crate::types::{
    AnalysisReport, AnalysisWarning, DlsInterval, EndPoint, SurveyPoint, TrajectoryAnalysis,
    TrajectorySummary,
};

/// Analyze a survey and return its summary statistics.
///
/// Points are taken in sequence order as drilling order. Fewer than two
/// points is not an error: dogleg statistics are reported as 0.
pub fn analyze(points: &[SurveyPoint]) -> Result<TrajectoryAnalysis, ValidationError> {
    analyze_report(points).map(|report| report.analysis)
}

/// Analyze a survey, keeping the per-interval DLS series and any warnings.
pub fn analyze_report(points: &[SurveyPoint]) -> Result<AnalysisReport, ValidationError> {
    validate_points(points)?;

    let intervals = dls_series(points);
    let skipped = points.len().saturating_sub(1) - intervals.len();

    let mut analysis = aggregate(points);
    let (max_dls, avg_dls) = dls_stats(&intervals);
    analysis.max_dls = max_dls;
    analysis.avg_dls = avg_dls;

    let mut warnings = Vec::new();
    if points.len() < 2 {
        warnings.push(AnalysisWarning::DegenerateInput {
            point_count: points.len(),
        });
    }
    if skipped > 0 {
        warnings.push(AnalysisWarning::SkippedIntervals { count: skipped });
    }

    debug!(
        points = points.len(),
        intervals = intervals.len(),
        skipped,
        max_dls,
        "Trajectory analyzed"
    );

    Ok(AnalysisReport {
        analysis,
        intervals,
        warnings,
    })
}

/// Dogleg severity for every adjacent pair of stations.
///
/// Pairs whose MD does not increase, or whose step is too small to give a
/// finite DLS, are left out, so the series has at most `n - 1` entries.
pub fn dls_series(points: &[SurveyPoint]) -> Vec<DlsInterval> {
    points
        .windows(2)
        .filter_map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let dogleg_deg = dogleg_angle(prev.inc, prev.azi, curr.inc, curr.azi);
            let dls = dogleg_severity(dogleg_deg, curr.md - prev.md)?;
            Some(DlsInterval {
                from_md: prev.md,
                to_md: curr.md,
                dogleg_deg,
                dls,
            })
        })
        .collect()
}

/// Header statistics from the last station in sequence order.
pub fn summarize(points: &[SurveyPoint]) -> Result<TrajectorySummary, ValidationError> {
    validate_points(points)?;

    let Some(last) = points.last() else {
        return Ok(TrajectorySummary::default());
    };

    let (max_dls, _) = dls_stats(&dls_series(points));

    Ok(TrajectorySummary {
        total_depth: last.md,
        total_displacement: last.horizontal_offset(),
        max_inclination: points.iter().map(|p| p.inc).fold(f64::NEG_INFINITY, f64::max),
        max_dls,
        end_point: EndPoint {
            north: last.north,
            east: last.east,
            tvd: last.tvd,
        },
        point_count: points.len(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Length, position and closure statistics. DLS fields are left at 0.
fn aggregate(points: &[SurveyPoint]) -> TrajectoryAnalysis {
    let (Some(deepest), Some(last)) = (
        points.iter().max_by(|a, b| a.md.total_cmp(&b.md)),
        points.last(),
    ) else {
        return TrajectoryAnalysis::default();
    };

    let max_of = |field: fn(&SurveyPoint) -> f64| {
        points.iter().map(field).fold(f64::NEG_INFINITY, f64::max)
    };

    TrajectoryAnalysis {
        total_length: deepest.md,
        total_displacement: deepest.horizontal_offset(),
        max_inclination: max_of(|p| p.inc),
        max_azimuth: max_of(|p| p.azi),
        vertical_section: max_of(|p| p.tvd),
        closure_distance: last.horizontal_offset(),
        closure_azimuth: closure_azimuth(last.north, last.east),
        point_count: points.len(),
        max_dls: 0.0,
        avg_dls: 0.0,
    }
}

/// (max, mean) of the DLS series; (0, 0) when empty.
fn dls_stats(intervals: &[DlsInterval]) -> (f64, f64) {
    if intervals.is_empty() {
        return (0.0, 0.0);
    }
    let values: Vec<f64> = intervals.iter().map(|i| i.dls).collect();
    (Statistics::max(values.iter()), values.iter().mean())
}
