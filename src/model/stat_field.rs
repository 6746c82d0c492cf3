//! Logical player fields and their mapping onto sheet columns.
//!
//! Exported sheets are not consistent: headers get renamed, reordered or
//! dropped between snapshots. Every logical field therefore carries a list of
//! accepted header aliases and a fallback column position, and a [`ColumnMap`]
//! is resolved once per fetched tab.

use crate::error::stats::StatsError;

/// A logical field of a player row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    LordId,
    Name,
    Alliance,
    HomeServer,
    Power,
    Merits,
    UnitsKilled,
    UnitsDead,
    UnitsHealed,
    T1Kills,
    T2Kills,
    T3Kills,
    T4Kills,
    T5Kills,
    GoldSpent,
    WoodSpent,
    OreSpent,
    ManaSpent,
    ResourcesGathered,
    HelpsGiven,
}

impl StatField {
    pub const COUNT: usize = 20;

    pub const ALL: [StatField; Self::COUNT] = [
        StatField::LordId,
        StatField::Name,
        StatField::Alliance,
        StatField::HomeServer,
        StatField::Power,
        StatField::Merits,
        StatField::UnitsKilled,
        StatField::UnitsDead,
        StatField::UnitsHealed,
        StatField::T1Kills,
        StatField::T2Kills,
        StatField::T3Kills,
        StatField::T4Kills,
        StatField::T5Kills,
        StatField::GoldSpent,
        StatField::WoodSpent,
        StatField::OreSpent,
        StatField::ManaSpent,
        StatField::ResourcesGathered,
        StatField::HelpsGiven,
    ];

    /// Fields holding integer stats (everything except identity text).
    pub const NUMERIC: [StatField; 16] = [
        StatField::Power,
        StatField::Merits,
        StatField::UnitsKilled,
        StatField::UnitsDead,
        StatField::UnitsHealed,
        StatField::T1Kills,
        StatField::T2Kills,
        StatField::T3Kills,
        StatField::T4Kills,
        StatField::T5Kills,
        StatField::GoldSpent,
        StatField::WoodSpent,
        StatField::OreSpent,
        StatField::ManaSpent,
        StatField::ResourcesGathered,
        StatField::HelpsGiven,
    ];

    /// Position of the field in [`StatField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            StatField::LordId => "Lord ID",
            StatField::Name => "Name",
            StatField::Alliance => "Alliance",
            StatField::HomeServer => "Home Server",
            StatField::Power => "Power",
            StatField::Merits => "Merits",
            StatField::UnitsKilled => "Units Killed",
            StatField::UnitsDead => "Units Dead",
            StatField::UnitsHealed => "Units Healed",
            StatField::T1Kills => "T1 Kills",
            StatField::T2Kills => "T2 Kills",
            StatField::T3Kills => "T3 Kills",
            StatField::T4Kills => "T4 Kills",
            StatField::T5Kills => "T5 Kills",
            StatField::GoldSpent => "Gold Spent",
            StatField::WoodSpent => "Wood Spent",
            StatField::OreSpent => "Ore Spent",
            StatField::ManaSpent => "Mana Spent",
            StatField::ResourcesGathered => "Resources Gathered",
            StatField::HelpsGiven => "Helps Given",
        }
    }

    /// Accepted header spellings, already normalized by [`normalize_header`].
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            StatField::LordId => &["lordid", "id", "playerid", "governorid"],
            StatField::Name => &["name", "lordname", "playername"],
            StatField::Alliance => &["alliance", "alliancetag", "tag"],
            StatField::HomeServer => &["homeserver", "server", "kingdom", "homekingdom"],
            StatField::Power => &["power", "currentpower", "highestpower"],
            StatField::Merits => &["merits", "merit", "totalmerits"],
            StatField::UnitsKilled => &["unitskilled", "kills", "totalkills", "killed"],
            StatField::UnitsDead => &["unitsdead", "dead", "deaths", "deads"],
            StatField::UnitsHealed => &["unitshealed", "healed", "heals", "wounded"],
            StatField::T1Kills => &["t1kills", "t1killcount", "killst1", "t1"],
            StatField::T2Kills => &["t2kills", "t2killcount", "killst2", "t2"],
            StatField::T3Kills => &["t3kills", "t3killcount", "killst3", "t3"],
            StatField::T4Kills => &["t4kills", "t4killcount", "killst4", "t4"],
            StatField::T5Kills => &["t5kills", "t5killcount", "killst5", "t5"],
            StatField::GoldSpent => &["goldspent", "gold"],
            StatField::WoodSpent => &["woodspent", "wood"],
            StatField::OreSpent => &["orespent", "ore", "stonespent"],
            StatField::ManaSpent => &["manaspent", "mana"],
            StatField::ResourcesGathered => &["resourcesgathered", "gathered", "totalgathered"],
            StatField::HelpsGiven => &["helpsgiven", "helps", "alliancehelps"],
        }
    }

    /// Column used when no header matches, following the export tool's layout.
    pub fn fallback_index(self) -> usize {
        self.index()
    }

    /// Fields without which a tab cannot be used at all.
    pub fn is_required(self) -> bool {
        matches!(self, StatField::LordId | StatField::Power)
    }
}

/// Lowercases a header and drops everything but letters and digits.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolved column position of every logical field for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<usize>; StatField::COUNT],
}

impl ColumnMap {
    /// Resolves field positions from a header row.
    ///
    /// Header aliases win. Fields without a matching header take their
    /// fallback position when the header row is wide enough and no other
    /// field claimed that column. Missing optional fields read as empty.
    ///
    /// # Arguments
    /// - `tab` - Tab title, for error reporting
    /// - `header` - Header row cells
    ///
    /// # Returns
    /// - `Ok(ColumnMap)` - Every required field resolved
    /// - `Err(StatsError::MissingColumn)` - A required field has no column
    pub fn resolve(tab: &str, header: &[String]) -> Result<Self, StatsError> {
        let mut columns = [None; StatField::COUNT];
        let mut claimed = vec![false; header.len()];

        for (position, cell) in header.iter().enumerate() {
            let normalized = normalize_header(cell);
            if normalized.is_empty() {
                continue;
            }

            let matched = StatField::ALL.iter().find(|field| {
                columns[field.index()].is_none() && field.aliases().contains(&normalized.as_str())
            });

            if let Some(field) = matched {
                columns[field.index()] = Some(position);
                claimed[position] = true;
            }
        }

        for field in StatField::ALL {
            if columns[field.index()].is_some() {
                continue;
            }
            let fallback = field.fallback_index();
            if fallback < header.len() && !claimed[fallback] {
                columns[field.index()] = Some(fallback);
                claimed[fallback] = true;
            }
        }

        if let Some(missing) = StatField::ALL
            .iter()
            .find(|field| field.is_required() && columns[field.index()].is_none())
        {
            return Err(StatsError::MissingColumn {
                tab: tab.to_string(),
                field: missing.label().to_string(),
            });
        }

        Ok(Self { columns })
    }

    /// Column position of a field, if resolved.
    pub fn position(&self, field: StatField) -> Option<usize> {
        self.columns[field.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    /// Tests matching reordered headers with varied spelling.
    ///
    /// Expected: every named field resolves to its header position
    #[test]
    fn resolves_reordered_headers_by_alias() {
        let map = ColumnMap::resolve(
            "Week 3",
            &header(&["Power", "Lord ID", "Units Dead", "Name", "Kills"]),
        )
        .unwrap();

        assert_eq!(map.position(StatField::Power), Some(0));
        assert_eq!(map.position(StatField::LordId), Some(1));
        assert_eq!(map.position(StatField::UnitsDead), Some(2));
        assert_eq!(map.position(StatField::Name), Some(3));
        assert_eq!(map.position(StatField::UnitsKilled), Some(4));
        assert_eq!(map.position(StatField::UnitsHealed), None);
    }

    /// Tests the positional fallback for unrecognised headers.
    ///
    /// Expected: lord ID and power fall back to columns 0 and 4
    #[test]
    fn falls_back_to_fixed_positions() {
        let map = ColumnMap::resolve(
            "Week 3",
            &header(&["governor", "nick", "tag", "srv", "pwr"]),
        )
        .unwrap();

        assert_eq!(map.position(StatField::LordId), Some(0));
        assert_eq!(map.position(StatField::Name), Some(1));
        assert_eq!(map.position(StatField::Power), Some(4));
    }

    /// Tests that a fallback never steals a column claimed by a header.
    ///
    /// Expected: Name keeps column 1 only if unclaimed; here Power claimed it
    #[test]
    fn fallback_skips_claimed_columns() {
        let map = ColumnMap::resolve("Week 3", &header(&["Lord ID", "Power"])).unwrap();

        assert_eq!(map.position(StatField::Power), Some(1));
        assert_eq!(map.position(StatField::Name), None);
    }

    /// Tests that a tab without a power column is rejected.
    ///
    /// Expected: Err(MissingColumn { field: "Power" })
    #[test]
    fn missing_required_column_is_an_error() {
        let result = ColumnMap::resolve("Week 3", &header(&["Lord ID", "Name"]));

        assert_eq!(
            result,
            Err(StatsError::MissingColumn {
                tab: "Week 3".to_string(),
                field: "Power".to_string(),
            })
        );
    }
}
