//! Snapshot reports behind the statistics commands.
//!
//! Every report loads fresh snapshots through [`SnapshotReader`], runs them
//! through the stats engine and returns a plain value for the presenter.
//!
//! - `progress` - One player's deltas and kill rank
//! - `leaderboard` - Metric leaderboards, optionally per server or alliance
//! - `performer` - Composite performer scores
//! - `kickcheck` - Kick recommendations for one alliance
//! - `farms` - Low-power accounts by resources gathered

pub mod farms;
pub mod kickcheck;
pub mod leaderboard;
pub mod performer;
pub mod progress;

#[cfg(test)]
mod test;

use crate::{
    config::Config,
    data::sheets::{SnapshotReader, SnapshotSource},
    error::{stats::StatsError, AppError},
    model::snapshot::SnapshotPair,
    service::stats::delta::{pair_deltas, ClampPolicy, DeltaRecord},
};

/// Tabs a report was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPeriod {
    pub workbook: String,
    pub previous_tab: String,
    pub latest_tab: String,
}

impl ReportPeriod {
    fn of(pair: &SnapshotPair) -> Self {
        Self {
            workbook: pair.workbook.clone(),
            previous_tab: pair.previous.title.clone(),
            latest_tab: pair.latest.title.clone(),
        }
    }
}

pub struct ReportService<'a> {
    source: &'a dyn SnapshotSource,
    config: &'a Config,
}

impl<'a> ReportService<'a> {
    pub fn new(source: &'a dyn SnapshotSource, config: &'a Config) -> Self {
        Self { source, config }
    }

    fn reader(&self) -> SnapshotReader<'a> {
        SnapshotReader::new(self.source)
    }

    /// Resolves an optional season argument to a workbook name.
    ///
    /// # Returns
    /// - `Ok(&str)` - Configured workbook, the current season when `season` is `None`
    /// - `Err(StatsError::UnknownSeason)` - Season key is not configured
    fn workbook(&self, season: Option<&str>) -> Result<&'a str, AppError> {
        self.config.season_workbook(season).ok_or_else(|| {
            StatsError::UnknownSeason(
                season.unwrap_or_default().to_string(),
                self.config.season_keys(),
            )
            .into()
        })
    }

    /// Loads the latest pair of a workbook with deltas of every player in both.
    async fn deltas(
        &self,
        season: Option<&str>,
        policy: ClampPolicy,
    ) -> Result<(SnapshotPair, Vec<DeltaRecord>), AppError> {
        let workbook = self.workbook(season)?;
        let pair = self.reader().load_pair(workbook).await?;
        let records = pair_deltas(&pair)
            .into_iter()
            .map(|record| record.clamped(policy))
            .collect();

        Ok((pair, records))
    }
}
