//! Trajectory Engine Property Tests
//!
//! Randomized surveys from a fixed seed, checking invariants that must hold
//! for any input rather than specific numeric results.

use h2oil_wellprofile::trajectory::dogleg::{dogleg_angle, wrap_azimuth_delta};
use h2oil_wellprofile::trajectory::{analyze, analyze_report, dls_series, parse_trajectory_json};
use h2oil_wellprofile::{AnalysisWarning, SurveyPoint};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 200;

fn random_survey(rng: &mut StdRng, allow_repeats: bool) -> Vec<SurveyPoint> {
    let n = rng.gen_range(0..40);
    let mut md = 0.0;
    (0..n)
        .map(|_| {
            if !allow_repeats || rng.gen_bool(0.8) {
                md += rng.gen_range(0.5..120.0);
            }
            SurveyPoint::new(
                md,
                md * rng.gen_range(0.3..1.0),
                rng.gen_range(0.0..=180.0),
                rng.gen_range(0.0..360.0),
            )
            .with_offsets(rng.gen_range(-5000.0..5000.0), rng.gen_range(-5000.0..5000.0))
        })
        .collect()
}

#[test]
fn closure_azimuth_always_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let survey = random_survey(&mut rng, true);
        let a = analyze(&survey).unwrap();
        assert!(
            (0.0..360.0).contains(&a.closure_azimuth),
            "closure_azimuth {} out of range",
            a.closure_azimuth
        );
    }
}

#[test]
fn series_has_one_entry_per_increasing_interval() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let survey = random_survey(&mut rng, false);
        let series = dls_series(&survey);
        assert_eq!(series.len(), survey.len().saturating_sub(1));
    }
}

#[test]
fn series_never_exceeds_n_minus_one() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..CASES {
        let survey = random_survey(&mut rng, true);
        let report = analyze_report(&survey).unwrap();
        let expected_skipped = survey
            .windows(2)
            .filter(|w| w[1].md - w[0].md <= 0.0)
            .count();

        assert!(report.intervals.len() <= survey.len().saturating_sub(1));
        assert_eq!(
            report.intervals.len() + expected_skipped,
            survey.len().saturating_sub(1)
        );
        if expected_skipped > 0 {
            assert!(report
                .warnings
                .contains(&AnalysisWarning::SkippedIntervals { count: expected_skipped }));
        }
    }
}

#[test]
fn dls_statistics_are_finite_and_ordered() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..CASES {
        let survey = random_survey(&mut rng, true);
        let report = analyze_report(&survey).unwrap();
        let a = report.analysis;

        assert!(a.max_dls.is_finite() && a.avg_dls.is_finite());
        assert!(a.max_dls >= 0.0);
        assert!(a.avg_dls <= a.max_dls + 1e-9);
        assert!(report.intervals.iter().all(|i| !i.dogleg_deg.is_nan()));
    }
}

#[test]
fn tiny_md_steps_never_produce_non_finite_statistics() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..CASES {
        let mut md = 0.0;
        let survey: Vec<SurveyPoint> = (0..rng.gen_range(2..20))
            .map(|_| {
                md += if rng.gen_bool(0.5) {
                    f64::MIN_POSITIVE * rng.gen_range(0.0..1.0)
                } else {
                    rng.gen_range(0.5..120.0)
                };
                SurveyPoint::new(md, md, rng.gen_range(0.0..=180.0), rng.gen_range(0.0..360.0))
            })
            .collect();

        let report = analyze_report(&survey).unwrap();
        assert!(report.intervals.iter().all(|i| i.dls.is_finite()));
        assert!(report.analysis.max_dls.is_finite());
        assert!(report.analysis.avg_dls.is_finite());
        assert_eq!(
            report.intervals.len() + skipped_count(&report.warnings),
            survey.len() - 1
        );
    }
}

fn skipped_count(warnings: &[AnalysisWarning]) -> usize {
    warnings
        .iter()
        .find_map(|w| match w {
            AnalysisWarning::SkippedIntervals { count } => Some(*count),
            _ => None,
        })
        .unwrap_or(0)
}

#[test]
fn identical_direction_has_zero_dogleg_for_any_course_length() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..CASES {
        let inc = rng.gen_range(0.0..=180.0);
        let azi = rng.gen_range(0.0..360.0);
        let step = rng.gen_range(0.01..1000.0);
        let survey = [
            SurveyPoint::new(1000.0, 900.0, inc, azi),
            SurveyPoint::new(1000.0 + step, 900.0 + step / 2.0, inc, azi),
        ];
        assert_eq!(dogleg_angle(inc, azi, inc, azi), 0.0);
        assert_eq!(analyze(&survey).unwrap().max_dls, 0.0);
    }
}

#[test]
fn azimuth_wrap_stays_within_half_turn() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..CASES {
        let a = rng.gen_range(0.0..360.0);
        let b = rng.gen_range(0.0..360.0);
        let d = wrap_azimuth_delta(b - a);
        assert!((-180.0..=180.0).contains(&d), "{a} -> {b} gave {d}");
    }
    assert!((wrap_azimuth_delta(10.0 - 350.0) - 20.0).abs() < 1e-12);
}

#[test]
fn duplicate_depth_pair_has_empty_series() {
    let survey = parse_trajectory_json(
        r#"[{"md": 1500, "tvd": 1400, "inc": 20, "azi": 30},
            {"md": 1500, "tvd": 1400, "inc": 40, "azi": 90}]"#,
    )
    .unwrap();
    let report = analyze_report(&survey.points).unwrap();
    assert!(report.intervals.is_empty());
    assert_eq!(report.analysis.max_dls, 0.0);
    assert_eq!(report.analysis.avg_dls, 0.0);
}

#[test]
fn two_point_reference_survey() {
    let survey = parse_trajectory_json(
        r#"[{"md": 0, "tvd": 0, "inc": 0, "azi": 0, "north": 0, "east": 0},
            {"md": 100, "tvd": 99, "inc": 5, "azi": 10, "north": 1, "east": 2}]"#,
    )
    .unwrap();
    let report = analyze_report(&survey.points).unwrap();
    let a = report.analysis;

    assert_eq!(a.point_count, 2);
    assert_eq!(a.total_length, 100.0);
    assert_eq!(a.vertical_section, 99.0);
    assert_eq!(report.intervals.len(), 1);
    assert_eq!(a.max_dls, report.intervals[0].dls);
    assert_eq!(a.avg_dls, report.intervals[0].dls);
}
