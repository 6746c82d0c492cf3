//! Period-over-period deltas between two snapshots.
//!
//! Deltas are always computed raw (`latest - previous`). Whether negative
//! deltas are shown is a caller decision expressed with [`ClampPolicy`]: a
//! negative value usually means a manual sheet correction, not a real loss.

use crate::model::{
    snapshot::{PlayerRecord, Snapshot, SnapshotPair},
    stat_field::StatField,
};

/// How callers treat negative deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    /// Negative deltas become zero.
    Clamp,
    /// Negative deltas are kept.
    Raw,
}

/// Computes `latest - previous` for one player and field.
///
/// Saturates at the `i64` bounds on garbage cells. Returns 0 when the player is absent from either snapshot; callers that
/// build leaderboards must check membership in both first (see [`pair_deltas`]).
pub fn compute_delta(
    previous: &Snapshot,
    latest: &Snapshot,
    lord_id: &str,
    field: StatField,
) -> i64 {
    match (previous.player(lord_id), latest.player(lord_id)) {
        (Some(then), Some(now)) => now.stat(field).saturating_sub(then.stat(field)),
        _ => 0,
    }
}

/// Per-field deltas of one player present in both snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaRecord {
    pub lord_id: String,
    pub name: String,
    pub alliance: String,
    pub home_server: String,
    /// Power in the latest snapshot.
    pub power: i64,
    gains: [i64; StatField::COUNT],
}

impl DeltaRecord {
    /// Builds the record from the same player's two rows.
    ///
    /// Identity fields come from the latest row.
    pub fn between(previous: &PlayerRecord, latest: &PlayerRecord) -> Self {
        let mut gains = [0; StatField::COUNT];
        for field in StatField::NUMERIC {
            gains[field.index()] = latest.stat(field).saturating_sub(previous.stat(field));
        }

        Self {
            lord_id: latest.lord_id().to_string(),
            name: latest.name().to_string(),
            alliance: latest.alliance().to_string(),
            home_server: latest.home_server().to_string(),
            power: latest.power(),
            gains,
        }
    }

    /// Delta of a numeric field; identity fields are always 0.
    pub fn gain(&self, field: StatField) -> i64 {
        self.gains[field.index()]
    }

    /// Applies a clamp policy to every delta.
    pub fn clamped(mut self, policy: ClampPolicy) -> Self {
        if policy == ClampPolicy::Clamp {
            for gain in self.gains.iter_mut() {
                *gain = (*gain).max(0);
            }
        }
        self
    }

    /// Merits gained as a percentage of current power.
    pub fn merit_ratio(&self) -> f64 {
        percent_of_power(self.gain(StatField::Merits), self.power)
    }

    /// Units lost as a percentage of current power.
    pub fn dead_ratio(&self) -> f64 {
        percent_of_power(self.gain(StatField::UnitsDead), self.power)
    }

    /// Gold, wood, ore and mana spent combined.
    pub fn resources_spent(&self) -> i64 {
        [
            StatField::GoldSpent,
            StatField::WoodSpent,
            StatField::OreSpent,
            StatField::ManaSpent,
        ]
        .iter()
        .fold(0i64, |total, &field| total.saturating_add(self.gain(field)))
    }
}

fn percent_of_power(value: i64, power: i64) -> f64 {
    if power <= 0 {
        return 0.0;
    }
    value as f64 / power as f64 * 100.0
}

/// Deltas for every player present in both snapshots, in latest-sheet order.
pub fn pair_deltas(pair: &SnapshotPair) -> Vec<DeltaRecord> {
    pair.latest
        .players()
        .iter()
        .filter_map(|now| {
            pair.previous
                .player(now.lord_id())
                .map(|then| DeltaRecord::between(then, now))
        })
        .collect()
}
