//! Snapshot domain models.
//!
//! A workbook holds one tab per time-stamped export of every tracked player.
//! Tabs are chronological in creation order: the last tab is the latest
//! snapshot and the one before it is the previous snapshot.

use std::collections::HashMap;

use crate::{
    error::stats::StatsError,
    model::stat_field::{ColumnMap, StatField},
    util::parse::parse_stat,
};

/// One tab of a workbook as listed by the sheet source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Numeric sheet identifier inside the workbook.
    pub sheet_id: i64,
    /// Tab title shown in the spreadsheet UI.
    pub title: String,
    /// Position of the tab; tabs are returned sorted by it.
    pub index: i64,
}

/// One player row of a snapshot with raw cell text per logical field.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    cells: [String; StatField::COUNT],
}

impl PlayerRecord {
    fn from_row(columns: &ColumnMap, row: &[String]) -> Self {
        let cells = StatField::ALL.map(|field| {
            columns
                .position(field)
                .and_then(|position| row.get(position))
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default()
        });
        Self { cells }
    }

    /// Raw cell text of a field, empty when the column is absent.
    pub fn text(&self, field: StatField) -> &str {
        &self.cells[field.index()]
    }

    /// Normalized integer value of a field.
    pub fn stat(&self, field: StatField) -> i64 {
        parse_stat(self.text(field))
    }

    pub fn lord_id(&self) -> &str {
        self.text(StatField::LordId)
    }

    /// Player name, falling back to the lord ID when the cell is empty.
    pub fn name(&self) -> &str {
        match self.text(StatField::Name) {
            "" => self.lord_id(),
            name => name,
        }
    }

    pub fn alliance(&self) -> &str {
        self.text(StatField::Alliance)
    }

    pub fn home_server(&self) -> &str {
        self.text(StatField::HomeServer)
    }

    pub fn power(&self) -> i64 {
        self.stat(StatField::Power)
    }
}

/// One immutable snapshot tab.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Tab title, usually the export date.
    pub title: String,
    players: Vec<PlayerRecord>,
    by_id: HashMap<String, usize>,
}

impl Snapshot {
    /// Builds a snapshot from raw tab values.
    ///
    /// Row 0 is the header. Rows without a lord ID are skipped. When a lord ID
    /// appears more than once the last occurrence wins, keeping the position
    /// of the first.
    ///
    /// # Arguments
    /// - `title` - Tab title
    /// - `rows` - All cell values of the tab, header first
    ///
    /// # Returns
    /// - `Ok(Snapshot)` - Parsed snapshot
    /// - `Err(StatsError::MissingColumn)` - Header lacks a required field
    pub fn from_rows(title: impl Into<String>, rows: &[Vec<String>]) -> Result<Self, StatsError> {
        let title = title.into();
        let header = rows.first().map(Vec::as_slice).unwrap_or(&[]);
        let columns = ColumnMap::resolve(&title, header)?;

        let mut players: Vec<PlayerRecord> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for row in rows.iter().skip(1) {
            let record = PlayerRecord::from_row(&columns, row);
            if record.lord_id().is_empty() {
                continue;
            }

            match by_id.get(record.lord_id()) {
                Some(&position) => players[position] = record,
                None => {
                    by_id.insert(record.lord_id().to_string(), players.len());
                    players.push(record);
                }
            }
        }

        Ok(Self {
            title,
            players,
            by_id,
        })
    }

    /// Looks up a player by lord ID.
    pub fn player(&self, lord_id: &str) -> Option<&PlayerRecord> {
        self.by_id
            .get(lord_id.trim())
            .map(|&position| &self.players[position])
    }

    pub fn contains(&self, lord_id: &str) -> bool {
        self.by_id.contains_key(lord_id.trim())
    }

    /// Players in sheet order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// The two most recent snapshots of a workbook.
#[derive(Debug, Clone)]
pub struct SnapshotPair {
    pub workbook: String,
    pub previous: Snapshot,
    pub latest: Snapshot,
}
