use super::*;
use crate::service::stats::scoring::{composite_scores, death_ratio_factor, min_max_normalize};

/// Tests min-max normalization of three merit ratios.
///
/// Expected: [0.0, 0.5, 1.0]
#[test]
fn normalizes_to_unit_range() {
    assert_eq!(min_max_normalize(&[5.0, 10.0, 15.0]), vec![0.0, 0.5, 1.0]);
}

/// Tests normalization of a uniform cohort.
///
/// Expected: every value scores 1.0
#[test]
fn uniform_cohort_scores_one() {
    assert_eq!(min_max_normalize(&[4.0, 4.0, 4.0]), vec![1.0, 1.0, 1.0]);
    assert_eq!(min_max_normalize(&[7.0]), vec![1.0]);
    assert!(min_max_normalize(&[]).is_empty());
}

/// Tests the death ratio factor's fixed points.
///
/// Expected: 1.0 at target, 0.0 at zero, 1.75 at twice the target, capped at 2.0
#[test]
fn death_ratio_factor_fixed_points() {
    let target = 1.5;

    assert!((death_ratio_factor(target, target) - 1.0).abs() < 1e-9);
    assert_eq!(death_ratio_factor(0.0, target), 0.0);
    assert!((death_ratio_factor(2.0 * target, target) - 1.75).abs() < 1e-9);
    assert!((death_ratio_factor(0.5 * target, target) - 0.25).abs() < 1e-9);
    assert_eq!(death_ratio_factor(100.0 * target, target), 2.0);
    assert_eq!(death_ratio_factor(-3.0, target), 0.0);
}

/// Tests that the factor never exceeds its cap across a sweep.
///
/// Expected: factor within [0, 2] everywhere
#[test]
fn death_ratio_factor_is_bounded() {
    for step in 0..500 {
        let factor = death_ratio_factor(step as f64 * 0.1, 1.0);
        assert!((0.0..=2.0).contains(&factor), "factor {} at step {}", factor, step);
    }
}

/// Tests composite scores for a small cohort.
///
/// Verifies the merit components match the normalized merit ratios and the
/// weights are applied.
///
/// Expected: merit components [0.0, 0.5, 1.0]; top player scores 100
#[test]
fn composite_scores_weight_components() {
    let cohort = vec![
        record("1", 100_000_000, 5_000_000, 500_000, 0),
        record("2", 100_000_000, 10_000_000, 1_000_000, 500),
        record("3", 100_000_000, 15_000_000, 2_000_000, 1_000),
    ];

    let scores = composite_scores(cohort, 1.0);
    let merit: Vec<_> = scores.iter().map(|s| s.merit_component).collect();

    for (actual, expected) in merit.iter().zip([0.0, 0.5, 1.0]) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }
    // Player 3: merit 1.0, dead 1.0 x factor 1.75 capped at 1.0, heal 1.0
    assert!((scores[2].score - 100.0).abs() < 1e-9);
    // Player 1: dead component 0.0, heal 0.0, merit 0.0
    assert!(scores[0].score.abs() < 1e-9);
    // Player 2: 0.4*0.5 + 0.4*(1/3 * 1.0) + 0.2*0.5
    let expected = (0.4 * 0.5 + 0.4 * (1.0 / 3.0) + 0.2 * 0.5) * 100.0;
    assert!((scores[1].score - expected).abs() < 1e-9);
}

/// Tests that scores stay within 0..=100 with negative and uniform inputs.
///
/// Expected: every score bounded
#[test]
fn composite_scores_are_bounded() {
    let cohort = vec![
        record("1", 60_000_000, -5_000, -10, -3),
        record("2", 60_000_000, 90_000_000, 50_000_000, 0),
        record("3", 60_000_000, 0, 0, 0),
        record("4", 60_000_000, 0, 0, 0),
    ];

    for score in composite_scores(cohort, 1.0) {
        assert!((0.0..=100.0).contains(&score.score), "score {}", score.score);
    }
}
