//! Kick recommendation rule tree.
//!
//! A player is kept when they meet the normal merit and dead requirements, or
//! when a flex rule (high merit ratio or large absolute merit gain) applies
//! and they still meet the hard dead floor. Everyone else is a kick, unless
//! they are new this season, in which case they get a warning instead.

use std::collections::HashSet;

use crate::model::stat_field::StatField;

use super::delta::DeltaRecord;

/// Thresholds of the kick rule tree. Ratios are percent of current power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickThresholds {
    pub normal_merit_ratio: f64,
    pub normal_dead_ratio: f64,
    pub flex_merit_ratio: f64,
    pub absolute_merit_gain: i64,
    pub hard_dead_ratio: f64,
}

impl Default for KickThresholds {
    fn default() -> Self {
        Self {
            normal_merit_ratio: 3.0,
            normal_dead_ratio: 0.5,
            flex_merit_ratio: 6.0,
            absolute_merit_gain: 5_000_000,
            hard_dead_ratio: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KickVerdict {
    Kick,
    Warning,
    Keep,
}

impl KickVerdict {
    pub fn label(self) -> &'static str {
        match self {
            KickVerdict::Kick => "🔴 KICK",
            KickVerdict::Warning => "🟡 WARNING",
            KickVerdict::Keep => "🟢 KEEP",
        }
    }
}

/// Why a verdict was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickReason {
    MeetsRequirements,
    FlexMeritRatio,
    FlexMeritGain,
    LowMerits,
    LowDeaths,
    NewPlayerGrace,
}

impl KickReason {
    pub fn describe(self) -> &'static str {
        match self {
            KickReason::MeetsRequirements => "meets merit and dead requirements",
            KickReason::FlexMeritRatio => "flex: high merit ratio",
            KickReason::FlexMeritGain => "flex: merit gain override",
            KickReason::LowMerits => "merits below requirement",
            KickReason::LowDeaths => "dead units below requirement",
            KickReason::NewPlayerGrace => "new this season, grace period",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KickAssessment {
    pub record: DeltaRecord,
    pub verdict: KickVerdict,
    pub reason: KickReason,
}

/// Applies the rule tree to one player.
///
/// # Arguments
/// - `record` - Player deltas
/// - `thresholds` - Rule thresholds
/// - `is_new` - Player is absent from the previous season roster
pub fn assess(record: &DeltaRecord, thresholds: &KickThresholds, is_new: bool) -> (KickVerdict, KickReason) {
    let merit_ratio = record.merit_ratio();
    let dead_ratio = record.dead_ratio();
    let merit_gain = record.gain(StatField::Merits);

    if merit_ratio >= thresholds.normal_merit_ratio && dead_ratio >= thresholds.normal_dead_ratio {
        return (KickVerdict::Keep, KickReason::MeetsRequirements);
    }

    if dead_ratio >= thresholds.hard_dead_ratio {
        if merit_ratio >= thresholds.flex_merit_ratio {
            return (KickVerdict::Keep, KickReason::FlexMeritRatio);
        }
        if merit_gain >= thresholds.absolute_merit_gain {
            return (KickVerdict::Keep, KickReason::FlexMeritGain);
        }
    }

    if is_new {
        return (KickVerdict::Warning, KickReason::NewPlayerGrace);
    }

    let reason = if merit_ratio < thresholds.normal_merit_ratio {
        KickReason::LowMerits
    } else {
        KickReason::LowDeaths
    };
    (KickVerdict::Kick, reason)
}

/// Assesses a cohort, kicks first, then warnings, then keeps.
///
/// Within each verdict players are ordered by merit ratio, lowest first.
/// Without a previous season roster nobody gets the new-player grace.
pub fn kickcheck(
    cohort: Vec<DeltaRecord>,
    thresholds: &KickThresholds,
    previous_roster: Option<&HashSet<String>>,
) -> Vec<KickAssessment> {
    let mut assessments: Vec<KickAssessment> = cohort
        .into_iter()
        .map(|record| {
            let is_new = previous_roster.is_some_and(|roster| !roster.contains(&record.lord_id));
            let (verdict, reason) = assess(&record, thresholds, is_new);
            KickAssessment {
                record,
                verdict,
                reason,
            }
        })
        .collect();

    assessments.sort_by(|a, b| {
        a.verdict.cmp(&b.verdict).then_with(|| {
            a.record
                .merit_ratio()
                .partial_cmp(&b.record.merit_ratio())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    assessments
}
