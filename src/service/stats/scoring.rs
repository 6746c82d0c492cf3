//! Composite performer score.
//!
//! Within a filtered cohort, merit ratio, death gain and heal gain are each
//! min-max normalized to `[0, 1]`. The death component is scaled by a death
//! ratio factor that punishes dying too little relative to power and gives a
//! bounded bonus for dying more, then capped at 1. The weighted sum is shown
//! on a 0–100 scale.

use crate::model::stat_field::StatField;

use super::delta::DeltaRecord;

pub const MERIT_WEIGHT: f64 = 0.40;
pub const DEAD_WEIGHT: f64 = 0.40;
pub const HEAL_WEIGHT: f64 = 0.20;

/// Upper bound of the death ratio factor.
pub const MAX_DEATH_FACTOR: f64 = 2.0;

/// Slope of the bonus above the death target.
const DEATH_BONUS_SLOPE: f64 = 0.75;

/// Normalizes values to `[0, 1]` relative to the cohort's min and max.
///
/// When every value is equal each one scores 1.0, so a uniform cohort is
/// neither divided by zero nor zeroed out.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|&value| {
            if span <= f64::EPSILON {
                1.0
            } else {
                (value - min) / span
            }
        })
        .collect()
}

/// Scales the death component by dead-gain-percent-of-power vs a target.
///
/// Below the target the factor is `(ratio / target)^2`; at or above it is
/// `1 + 0.75 * (ratio / target - 1)`, capped at [`MAX_DEATH_FACTOR`].
/// Negative ratios count as zero. A non-positive target disables scaling.
pub fn death_ratio_factor(ratio: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 1.0;
    }

    let relative = ratio.max(0.0) / target;
    if relative < 1.0 {
        relative * relative
    } else {
        (1.0 + DEATH_BONUS_SLOPE * (relative - 1.0)).min(MAX_DEATH_FACTOR)
    }
}

/// Composite score of one cohort member with its components.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformerScore {
    pub record: DeltaRecord,
    pub merit_component: f64,
    pub dead_component: f64,
    pub heal_component: f64,
    pub death_factor: f64,
    /// Final score, `0..=100`.
    pub score: f64,
}

/// Scores every member of an already filtered cohort.
///
/// # Arguments
/// - `cohort` - Eligible players
/// - `death_target_percent` - Dead gain, as percent of power, that earns factor 1.0
///
/// # Returns
/// - Scores in cohort order
pub fn composite_scores(cohort: Vec<DeltaRecord>, death_target_percent: f64) -> Vec<PerformerScore> {
    let merits: Vec<f64> = cohort.iter().map(DeltaRecord::merit_ratio).collect();
    let deaths: Vec<f64> = cohort
        .iter()
        .map(|r| r.gain(StatField::UnitsDead) as f64)
        .collect();
    let heals: Vec<f64> = cohort
        .iter()
        .map(|r| r.gain(StatField::UnitsHealed) as f64)
        .collect();

    let merits = min_max_normalize(&merits);
    let deaths = min_max_normalize(&deaths);
    let heals = min_max_normalize(&heals);

    cohort
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let death_factor = death_ratio_factor(record.dead_ratio(), death_target_percent);
            let dead_term = (deaths[i] * death_factor).min(1.0);
            let score = (MERIT_WEIGHT * merits[i] + DEAD_WEIGHT * dead_term + HEAL_WEIGHT * heals[i])
                * 100.0;

            PerformerScore {
                record,
                merit_component: merits[i],
                dead_component: deaths[i],
                heal_component: heals[i],
                death_factor,
                score: score.clamp(0.0, 100.0),
            }
        })
        .collect()
}
