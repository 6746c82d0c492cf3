use crate::{
    error::AppError,
    service::stats::{
        delta::{ClampPolicy, DeltaRecord},
        metric::Metric,
        ranking::{rank, Eligibility, Order, Ranked, Scope},
    },
};

use super::{ReportPeriod, ReportService};

#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub period: ReportPeriod,
    pub metric: Metric,
    pub scope: Scope,
    pub min_power: i64,
    /// Number of eligible players before truncation.
    pub cohort_size: usize,
    pub entries: Vec<Ranked<DeltaRecord, i64>>,
}

impl<'a> ReportService<'a> {
    /// Builds a delta leaderboard.
    ///
    /// Negative deltas are clamped to zero and players below the leaderboard
    /// power minimum are excluded before ranking.
    ///
    /// # Arguments
    /// - `metric` - Ranked metric
    /// - `scope` - Global, one home server, or one alliance
    /// - `count` - Number of entries to keep
    /// - `season` - Optional season key
    pub async fn leaderboard(
        &self,
        metric: Metric,
        scope: Scope,
        count: usize,
        season: Option<&str>,
    ) -> Result<Leaderboard, AppError> {
        let (pair, records) = self.deltas(season, ClampPolicy::Clamp).await?;
        let min_power = self.config.scoring.leaderboard_min_power;

        let cohort = Eligibility::new(min_power, scope.clone()).filter(records);
        let cohort_size = cohort.len();
        let tie_break = metric.tie_break();

        let mut entries = rank(
            cohort,
            |record| metric.value(record),
            Order::Descending,
            |a, b| tie_break.compare(a, b),
        );
        entries.truncate(count);

        Ok(Leaderboard {
            period: ReportPeriod::of(&pair),
            metric,
            scope,
            min_power,
            cohort_size,
            entries,
        })
    }
}
