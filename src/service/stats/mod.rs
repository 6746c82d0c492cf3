//! Snapshot delta, ranking and scoring engine.
//!
//! Pure functions over parsed snapshots; no I/O happens here. Report services
//! load snapshots, run them through this engine and hand the results to the
//! presenter.
//!
//! - `delta` - raw per-field deltas between two snapshots and clamp policy
//! - `ranking` - eligibility filters and stable ranking
//! - `scoring` - composite performer score
//! - `kickcheck` - kick recommendation rule tree
//! - `metric` - leaderboard metrics

pub mod delta;
pub mod kickcheck;
pub mod metric;
pub mod ranking;
pub mod scoring;

pub use kickcheck::KickThresholds;

#[cfg(test)]
mod test;

/// Thresholds used by the report commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Minimum latest power to appear on delta leaderboards.
    pub leaderboard_min_power: i64,
    /// Minimum latest power for performer scoring and kickcheck.
    pub performer_min_power: i64,
    /// Dead gain, as percent of power, earning a death factor of 1.0.
    pub death_target_percent: f64,
    /// Accounts at or below this power are listed as farms.
    pub farm_power_ceiling: i64,
    pub kick: KickThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            leaderboard_min_power: 25_000_000,
            performer_min_power: 50_000_000,
            death_target_percent: 1.0,
            farm_power_ceiling: 15_000_000,
            kick: KickThresholds::default(),
        }
    }
}
