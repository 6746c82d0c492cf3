use dioxus_logger::tracing;

use crate::{
    error::AppError,
    service::stats::{
        delta::ClampPolicy,
        kickcheck::{kickcheck, KickAssessment, KickThresholds},
        ranking::{Eligibility, Scope},
    },
};

use super::{ReportPeriod, ReportService};

#[derive(Debug, Clone, PartialEq)]
pub struct KickReport {
    pub period: ReportPeriod,
    pub alliance: String,
    pub thresholds: KickThresholds,
    /// Whether a previous-season roster was available for the new-player grace.
    pub roster_checked: bool,
    /// Kicks first, then warnings, then keeps.
    pub entries: Vec<KickAssessment>,
}

impl<'a> ReportService<'a> {
    /// Runs the kick rule tree over one alliance.
    ///
    /// Players absent from the previous-season roster get a warning instead
    /// of a kick. When no previous season workbook is configured nobody gets
    /// that grace.
    pub async fn kickcheck(&self, alliance: &str) -> Result<KickReport, AppError> {
        let (pair, records) = self.deltas(None, ClampPolicy::Clamp).await?;
        let scoring = &self.config.scoring;

        let cohort = Eligibility::new(
            scoring.performer_min_power,
            Scope::Alliance(alliance.to_string()),
        )
        .filter(records);

        let roster = match self.config.previous_season_workbook.as_deref() {
            Some(workbook) => Some(self.reader().roster(workbook).await?),
            None => {
                tracing::debug!("No previous season workbook configured, kickcheck without grace");
                None
            }
        };

        Ok(KickReport {
            period: ReportPeriod::of(&pair),
            alliance: alliance.to_string(),
            thresholds: scoring.kick,
            roster_checked: roster.is_some(),
            entries: kickcheck(cohort, &scoring.kick, roster.as_ref()),
        })
    }
}
