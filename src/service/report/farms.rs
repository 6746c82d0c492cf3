use crate::{
    error::AppError,
    model::{snapshot::PlayerRecord, stat_field::StatField},
    service::stats::ranking::{rank, Order, Ranked},
};

use super::ReportService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmAccount {
    pub lord_id: String,
    pub name: String,
    pub alliance: String,
    pub power: i64,
    pub gathered: i64,
}

impl FarmAccount {
    fn from_record(player: &PlayerRecord) -> Self {
        Self {
            lord_id: player.lord_id().to_string(),
            name: player.name().to_string(),
            alliance: player.alliance().to_string(),
            power: player.power(),
            gathered: player.stat(StatField::ResourcesGathered),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmReport {
    pub workbook: String,
    pub tab: String,
    pub alliance: Option<String>,
    pub power_ceiling: i64,
    pub entries: Vec<Ranked<FarmAccount, i64>>,
}

impl<'a> ReportService<'a> {
    /// Lists accounts at or below the farm power ceiling in the latest snapshot.
    ///
    /// Only needs a single snapshot. Accounts are ordered by total resources
    /// gathered, then by name.
    pub async fn farms(&self, alliance: Option<&str>) -> Result<FarmReport, AppError> {
        let workbook = self.workbook(None)?;
        let snapshot = self.reader().load_latest(workbook).await?;
        let ceiling = self.config.scoring.farm_power_ceiling;

        let accounts: Vec<FarmAccount> = snapshot
            .players()
            .iter()
            .filter(|player| player.power() <= ceiling)
            .filter(|player| {
                alliance.map_or(true, |tag| player.alliance().eq_ignore_ascii_case(tag.trim()))
            })
            .map(FarmAccount::from_record)
            .collect();

        let entries = rank(accounts, |a| a.gathered, Order::Descending, |a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        });

        Ok(FarmReport {
            workbook: workbook.to_string(),
            tab: snapshot.title.clone(),
            alliance: alliance.map(str::to_string),
            power_ceiling: ceiling,
            entries,
        })
    }
}
