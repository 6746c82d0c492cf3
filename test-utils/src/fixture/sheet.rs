//! Snapshot tab fixtures.
//!
//! Rows follow the column layout of the stats export tool. Numbers are
//! written with thousands separators like the exported sheets.

/// Column positions of the export layout.
pub mod col {
    pub const LORD_ID: usize = 0;
    pub const NAME: usize = 1;
    pub const ALLIANCE: usize = 2;
    pub const HOME_SERVER: usize = 3;
    pub const POWER: usize = 4;
    pub const MERITS: usize = 5;
    pub const UNITS_KILLED: usize = 6;
    pub const UNITS_DEAD: usize = 7;
    pub const UNITS_HEALED: usize = 8;
    pub const T1_KILLS: usize = 9;
    pub const T2_KILLS: usize = 10;
    pub const T3_KILLS: usize = 11;
    pub const T4_KILLS: usize = 12;
    pub const T5_KILLS: usize = 13;
    pub const GOLD_SPENT: usize = 14;
    pub const WOOD_SPENT: usize = 15;
    pub const ORE_SPENT: usize = 16;
    pub const MANA_SPENT: usize = 17;
    pub const RESOURCES_GATHERED: usize = 18;
    pub const HELPS_GIVEN: usize = 19;
}

pub const HEADER: [&str; 20] = [
    "Lord ID",
    "Name",
    "Alliance",
    "Home Server",
    "Power",
    "Merits",
    "Units Killed",
    "Units Dead",
    "Units Healed",
    "T1 Kills",
    "T2 Kills",
    "T3 Kills",
    "T4 Kills",
    "T5 Kills",
    "Gold Spent",
    "Wood Spent",
    "Ore Spent",
    "Mana Spent",
    "Resources Gathered",
    "Helps Given",
];

pub fn header() -> Vec<String> {
    HEADER.iter().map(|h| h.to_string()).collect()
}

/// Prepends the export header to player rows.
pub fn tab(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    std::iter::once(header()).chain(rows).collect()
}

/// Formats an integer with `,` thousands separators, e.g. `1,234,567`.
pub fn with_separators(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Builder for one player row.
///
/// Defaults:
/// - name: `"Lord {lord_id}"`
/// - alliance: `"ABC"`
/// - home server: `"101"`
/// - every stat: `"0"`
pub struct PlayerRowBuilder {
    cells: Vec<String>,
}

/// Starts a player row for the given lord ID.
pub fn player_row(lord_id: &str) -> PlayerRowBuilder {
    let mut cells = vec!["0".to_string(); HEADER.len()];
    cells[col::LORD_ID] = lord_id.to_string();
    cells[col::NAME] = format!("Lord {}", lord_id);
    cells[col::ALLIANCE] = "ABC".to_string();
    cells[col::HOME_SERVER] = "101".to_string();
    PlayerRowBuilder { cells }
}

impl PlayerRowBuilder {
    pub fn name(self, name: &str) -> Self {
        self.raw(col::NAME, name)
    }

    pub fn alliance(self, alliance: &str) -> Self {
        self.raw(col::ALLIANCE, alliance)
    }

    pub fn server(self, server: &str) -> Self {
        self.raw(col::HOME_SERVER, server)
    }

    pub fn power(self, value: i64) -> Self {
        self.stat(col::POWER, value)
    }

    pub fn merits(self, value: i64) -> Self {
        self.stat(col::MERITS, value)
    }

    pub fn killed(self, value: i64) -> Self {
        self.stat(col::UNITS_KILLED, value)
    }

    pub fn dead(self, value: i64) -> Self {
        self.stat(col::UNITS_DEAD, value)
    }

    pub fn healed(self, value: i64) -> Self {
        self.stat(col::UNITS_HEALED, value)
    }

    pub fn gathered(self, value: i64) -> Self {
        self.stat(col::RESOURCES_GATHERED, value)
    }

    pub fn helps(self, value: i64) -> Self {
        self.stat(col::HELPS_GIVEN, value)
    }

    /// Sets a numeric column, formatted with thousands separators.
    pub fn stat(self, column: usize, value: i64) -> Self {
        let formatted = with_separators(value);
        self.raw(column, &formatted)
    }

    /// Sets a column to exactly the given text.
    pub fn raw(mut self, column: usize, value: &str) -> Self {
        if column >= self.cells.len() {
            self.cells.resize(column + 1, String::new());
        }
        self.cells[column] = value.to_string();
        self
    }

    pub fn build(self) -> Vec<String> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests thousands separator formatting.
    ///
    /// Expected: groups of three from the right, sign kept
    #[test]
    fn formats_with_separators() {
        assert_eq!(with_separators(0), "0");
        assert_eq!(with_separators(999), "999");
        assert_eq!(with_separators(1_000), "1,000");
        assert_eq!(with_separators(-25_000_000), "-25,000,000");
    }
}
