use crate::{
    error::AppError,
    service::stats::{
        delta::ClampPolicy,
        ranking::{rank, Eligibility, Order, Ranked, Scope, TieBreak},
        scoring::{composite_scores, PerformerScore},
    },
};

use super::{ReportPeriod, ReportService};

#[derive(Debug, Clone, PartialEq)]
pub struct PerformerReport {
    pub period: ReportPeriod,
    /// `Descending` for top performers, `Ascending` for low performers.
    pub order: Order,
    pub scope: Scope,
    pub min_power: i64,
    pub cohort_size: usize,
    pub entries: Vec<Ranked<PerformerScore, f64>>,
}

impl<'a> ReportService<'a> {
    /// Scores and ranks the performer cohort.
    ///
    /// Normalization happens within the filtered cohort, so scoping to one
    /// alliance compares its members only with each other.
    ///
    /// # Arguments
    /// - `order` - `Descending` for `!topperformer`, `Ascending` for `!lowperformer`
    /// - `count` - Number of entries to keep
    /// - `alliance` - Optional alliance tag restricting the cohort
    pub async fn performers(
        &self,
        order: Order,
        count: usize,
        alliance: Option<&str>,
    ) -> Result<PerformerReport, AppError> {
        let (pair, records) = self.deltas(None, ClampPolicy::Clamp).await?;
        let scoring = &self.config.scoring;

        let scope = match alliance {
            Some(tag) => Scope::Alliance(tag.to_string()),
            None => Scope::Global,
        };
        let cohort = Eligibility::new(scoring.performer_min_power, scope.clone()).filter(records);
        let cohort_size = cohort.len();

        let scores = composite_scores(cohort, scoring.death_target_percent);
        let mut entries = rank(scores, |s| s.score, order, |a, b| {
            TieBreak::Name.compare(&a.record, &b.record)
        });
        entries.truncate(count);

        Ok(PerformerReport {
            period: ReportPeriod::of(&pair),
            order,
            scope,
            min_power: scoring.performer_min_power,
            cohort_size,
            entries,
        })
    }
}
