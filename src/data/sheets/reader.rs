use std::collections::HashSet;

use crate::{
    data::sheets::SnapshotSource,
    error::{stats::StatsError, AppError},
    model::snapshot::{Snapshot, SnapshotPair, Tab},
};

/// Loads typed snapshots from a workbook.
///
/// The last tab of a workbook is the latest snapshot, the one before it the
/// previous snapshot. Each call fetches fresh values; nothing is cached
/// between commands.
pub struct SnapshotReader<'a> {
    source: &'a dyn SnapshotSource,
}

impl<'a> SnapshotReader<'a> {
    pub fn new(source: &'a dyn SnapshotSource) -> Self {
        Self { source }
    }

    /// Loads the two most recent snapshots of a workbook.
    ///
    /// # Returns
    /// - `Ok(SnapshotPair)` - Previous and latest snapshot
    /// - `Err(StatsError::NotEnoughSnapshots)` - Fewer than two tabs
    /// - `Err(StatsError::MissingColumn)` - A tab lacks a required column
    /// - `Err(AppError)` - Spreadsheet request failed
    pub async fn load_pair(&self, workbook: &str) -> Result<SnapshotPair, AppError> {
        let tabs = self.require_tabs(workbook, 2).await?;
        let previous_tab = &tabs[tabs.len() - 2];
        let latest_tab = &tabs[tabs.len() - 1];

        let (previous, latest) = tokio::try_join!(
            self.load_tab(workbook, previous_tab),
            self.load_tab(workbook, latest_tab)
        )?;

        Ok(SnapshotPair {
            workbook: workbook.to_string(),
            previous,
            latest,
        })
    }

    /// Loads only the latest snapshot of a workbook.
    ///
    /// # Returns
    /// - `Ok(Snapshot)` - Latest snapshot
    /// - `Err(StatsError::NotEnoughSnapshots)` - Workbook has no tabs
    pub async fn load_latest(&self, workbook: &str) -> Result<Snapshot, AppError> {
        let tabs = self.require_tabs(workbook, 1).await?;
        self.load_tab(workbook, &tabs[tabs.len() - 1]).await
    }

    /// Lord IDs present in the latest snapshot of a workbook.
    ///
    /// Used as the previous-season roster by the kick check.
    pub async fn roster(&self, workbook: &str) -> Result<HashSet<String>, AppError> {
        let snapshot = self.load_latest(workbook).await?;

        Ok(snapshot
            .players()
            .iter()
            .map(|player| player.lord_id().to_string())
            .collect())
    }

    async fn require_tabs(&self, workbook: &str, required: usize) -> Result<Vec<Tab>, AppError> {
        let tabs = self.source.list_tabs(workbook).await?;
        if tabs.len() < required {
            return Err(StatsError::NotEnoughSnapshots {
                workbook: workbook.to_string(),
                required,
                found: tabs.len(),
            }
            .into());
        }
        Ok(tabs)
    }

    async fn load_tab(&self, workbook: &str, tab: &Tab) -> Result<Snapshot, AppError> {
        let rows = self.source.get_values(workbook, &tab.title).await?;
        Ok(Snapshot::from_rows(tab.title.clone(), &rows)?)
    }
}
