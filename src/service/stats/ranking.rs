//! Cohort filtering and stable ranking.
//!
//! Eligibility filtering always happens before ranking: minimum power,
//! optional server or alliance scope, and presence in both snapshots (which
//! [`DeltaRecord`] construction already guarantees).

use std::cmp::Ordering;

use crate::model::stat_field::StatField;

use super::delta::DeltaRecord;

/// Which players a ranking is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Global,
    /// Players whose home server matches.
    Server(String),
    /// Players whose alliance tag matches (case-insensitive).
    Alliance(String),
}

impl Scope {
    pub fn admits(&self, record: &DeltaRecord) -> bool {
        match self {
            Scope::Global => true,
            Scope::Server(server) => record.home_server.trim() == server.trim(),
            Scope::Alliance(tag) => record.alliance.trim().eq_ignore_ascii_case(tag.trim()),
        }
    }

    /// Short description for report titles.
    pub fn describe(&self) -> String {
        match self {
            Scope::Global => "all servers".to_string(),
            Scope::Server(server) => format!("server {}", server),
            Scope::Alliance(tag) => format!("[{}]", tag),
        }
    }
}

/// Filter applied to a cohort before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub min_power: i64,
    pub scope: Scope,
}

impl Eligibility {
    pub fn new(min_power: i64, scope: Scope) -> Self {
        Self { min_power, scope }
    }

    pub fn admits(&self, record: &DeltaRecord) -> bool {
        record.power >= self.min_power && self.scope.admits(record)
    }

    /// Keeps the eligible records, preserving order.
    pub fn filter(&self, records: impl IntoIterator<Item = DeltaRecord>) -> Vec<DeltaRecord> {
        records.into_iter().filter(|r| self.admits(r)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Descending,
    Ascending,
}

/// Secondary ordering of records with equal primary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Alphabetical by display name, case-insensitive.
    Name,
    /// Larger gain of another field first, then by name.
    Secondary(StatField),
}

impl TieBreak {
    pub fn compare(self, a: &DeltaRecord, b: &DeltaRecord) -> Ordering {
        let by_name = || a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match self {
            TieBreak::Name => by_name(),
            TieBreak::Secondary(field) => b.gain(field).cmp(&a.gain(field)).then_with(by_name),
        }
    }
}

/// One ranked entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T, V> {
    /// 1-based position.
    pub rank: usize,
    pub entity: T,
    pub value: V,
}

/// Sorts a cohort by a key.
///
/// The sort is stable: entries equal under both the key and the tie-break
/// keep their input order, so ranking the same cohort twice gives the same
/// result. Incomparable keys (NaN) are treated as equal.
pub fn rank<T, V, K, B>(cohort: Vec<T>, key_fn: K, order: Order, tie_break: B) -> Vec<Ranked<T, V>>
where
    V: PartialOrd + Copy,
    K: Fn(&T) -> V,
    B: Fn(&T, &T) -> Ordering,
{
    let mut keyed: Vec<(V, T)> = cohort.into_iter().map(|e| (key_fn(&e), e)).collect();

    keyed.sort_by(|(va, a), (vb, b)| {
        let primary = va.partial_cmp(vb).unwrap_or(Ordering::Equal);
        let primary = match order {
            Order::Descending => primary.reverse(),
            Order::Ascending => primary,
        };
        primary.then_with(|| tie_break(a, b))
    });

    keyed
        .into_iter()
        .enumerate()
        .map(|(position, (value, entity))| Ranked {
            rank: position + 1,
            entity,
            value,
        })
        .collect()
}

/// Ranks delta records by the gain of one field.
pub fn rank_by_gain(
    cohort: Vec<DeltaRecord>,
    field: StatField,
    order: Order,
    tie_break: TieBreak,
) -> Vec<Ranked<DeltaRecord, i64>> {
    rank(cohort, |r| r.gain(field), order, |a, b| tie_break.compare(a, b))
}

/// Position of one player in a ranking by field gain within a cohort.
///
/// # Returns
/// - `Some((rank, cohort_size))` - Player is in the cohort
/// - `None` - Player is not eligible for this cohort
pub fn position_of(
    cohort: Vec<DeltaRecord>,
    lord_id: &str,
    field: StatField,
) -> Option<(usize, usize)> {
    let size = cohort.len();
    rank_by_gain(cohort, field, Order::Descending, TieBreak::Name)
        .into_iter()
        .find(|entry| entry.entity.lord_id == lord_id)
        .map(|entry| (entry.rank, size))
}
