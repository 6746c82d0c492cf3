use crate::{
    error::{stats::StatsError, AppError},
    model::stat_field::StatField,
    service::stats::{
        delta::{ClampPolicy, DeltaRecord},
        ranking::{position_of, Eligibility, Scope},
    },
};

use super::{ReportPeriod, ReportService};

/// One player's progress between the two latest snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub period: ReportPeriod,
    /// Unclamped deltas, so sheet corrections stay visible.
    pub record: DeltaRecord,
    pub previous_power: i64,
    /// Kill rank among eligible players of the same home server, with cohort size.
    pub server_kill_rank: Option<(usize, usize)>,
    /// Kill rank among all eligible players, with cohort size.
    pub global_kill_rank: Option<(usize, usize)>,
}

impl<'a> ReportService<'a> {
    /// Builds the `!progress` report.
    ///
    /// # Arguments
    /// - `lord_id` - Player to report on
    /// - `season` - Optional season key, current season when `None`
    ///
    /// # Returns
    /// - `Ok(ProgressReport)` - Player present in both snapshots
    /// - `Err(StatsError::PlayerNotFound)` - Player missing from either snapshot
    pub async fn progress(&self, lord_id: &str, season: Option<&str>) -> Result<ProgressReport, AppError> {
        let lord_id = lord_id.trim();
        let (pair, clamped) = self.deltas(season, ClampPolicy::Clamp).await?;

        let (Some(then), Some(now)) = (pair.previous.player(lord_id), pair.latest.player(lord_id)) else {
            return Err(StatsError::PlayerNotFound {
                lord_id: lord_id.to_string(),
                previous: pair.previous.title.clone(),
                latest: pair.latest.title.clone(),
            }
            .into());
        };
        let record = DeltaRecord::between(then, now);

        let min_power = self.config.scoring.leaderboard_min_power;
        let global = Eligibility::new(min_power, Scope::Global).filter(clamped.iter().cloned());
        let server = Eligibility::new(min_power, Scope::Server(record.home_server.clone()))
            .filter(clamped);

        Ok(ProgressReport {
            period: ReportPeriod::of(&pair),
            previous_power: then.power(),
            server_kill_rank: position_of(server, lord_id, StatField::UnitsKilled),
            global_kill_rank: position_of(global, lord_id, StatField::UnitsKilled),
            record,
        })
    }
}
