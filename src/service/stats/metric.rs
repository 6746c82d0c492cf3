use crate::model::stat_field::StatField;

use super::{delta::DeltaRecord, ranking::TieBreak};

/// A leaderboard metric.
///
/// Most metrics are the gain of one sheet field; `Spent` is the combined
/// gold, wood, ore and mana spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Kills,
    Deaths,
    Merits,
    Heals,
    Mana,
    Spent,
    Helps,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Kills,
        Metric::Deaths,
        Metric::Merits,
        Metric::Heals,
        Metric::Mana,
        Metric::Spent,
        Metric::Helps,
    ];

    /// Parses a metric argument such as `kills` or `dead`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "kills" | "kill" | "killed" => Some(Metric::Kills),
            "deaths" | "death" | "dead" | "deads" => Some(Metric::Deaths),
            "merits" | "merit" => Some(Metric::Merits),
            "heals" | "heal" | "healed" => Some(Metric::Heals),
            "mana" => Some(Metric::Mana),
            "spent" | "spend" | "resources" => Some(Metric::Spent),
            "helps" | "help" => Some(Metric::Helps),
            _ => None,
        }
    }

    /// Argument name, as accepted by [`Metric::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Metric::Kills => "kills",
            Metric::Deaths => "deaths",
            Metric::Merits => "merits",
            Metric::Heals => "heals",
            Metric::Mana => "mana",
            Metric::Spent => "spent",
            Metric::Helps => "helps",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Spent => "Resources Spent",
            Metric::Mana => "Mana Spent",
            other => other.field().map(StatField::label).unwrap_or_default(),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Metric::Kills => "⚔️",
            Metric::Deaths => "💀",
            Metric::Merits => "🎖️",
            Metric::Heals => "🩹",
            Metric::Mana => "🔮",
            Metric::Spent => "💰",
            Metric::Helps => "🤝",
        }
    }

    /// Leaderboard command of this metric, e.g. `topkills`.
    pub fn command(self) -> String {
        format!("top{}", self.name())
    }

    pub fn from_command(command: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.command() == command)
    }

    /// The sheet field behind the metric, `None` for combined metrics.
    pub fn field(self) -> Option<StatField> {
        match self {
            Metric::Kills => Some(StatField::UnitsKilled),
            Metric::Deaths => Some(StatField::UnitsDead),
            Metric::Merits => Some(StatField::Merits),
            Metric::Heals => Some(StatField::UnitsHealed),
            Metric::Mana => Some(StatField::ManaSpent),
            Metric::Spent => None,
            Metric::Helps => Some(StatField::HelpsGiven),
        }
    }

    pub fn value(self, record: &DeltaRecord) -> i64 {
        match self.field() {
            Some(field) => record.gain(field),
            None => record.resources_spent(),
        }
    }

    /// Secondary order for players with equal values.
    ///
    /// Merit and death boards break ties on the other half of the kick
    /// criteria; every other board is alphabetical.
    pub fn tie_break(self) -> TieBreak {
        match self {
            Metric::Merits => TieBreak::Secondary(StatField::UnitsDead),
            Metric::Deaths => TieBreak::Secondary(StatField::Merits),
            _ => TieBreak::Name,
        }
    }
}
