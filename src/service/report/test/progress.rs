use super::*;
use crate::{error::stats::StatsError, model::stat_field::StatField};

/// Tests a player's progress report.
///
/// Verifies raw deltas and kill ranks within the server and globally.
///
/// Expected: 9,000 kills, rank 2 of 2 on server 101, rank 3 of 4 globally
#[tokio::test]
async fn reports_player_progress() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);

    let report = ReportService::new(&source, &config).progress("1", None).await?;

    assert_eq!(report.record.gain(StatField::UnitsKilled), 9_000);
    assert_eq!(report.previous_power, 80_000_000);
    assert_eq!(report.period.latest_tab, "2026-01-08");
    assert_eq!(report.server_kill_rank, Some((2, 2)));
    assert_eq!(report.global_kill_rank, Some((3, 4)));

    Ok(())
}

/// Tests that progress keeps negative deltas.
///
/// Expected: -500 kills for player 5
#[tokio::test]
async fn progress_shows_raw_negative_delta() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);

    let report = ReportService::new(&source, &config).progress("5", None).await?;

    assert_eq!(report.record.gain(StatField::UnitsKilled), -500);

    Ok(())
}

/// Tests a player present only in the latest snapshot.
///
/// Expected: Err(StatsError::PlayerNotFound)
#[tokio::test]
async fn new_player_is_not_found() {
    let source = source();
    let config = config(&[]);

    let result = ReportService::new(&source, &config).progress("6", None).await;

    assert!(matches!(
        result,
        Err(AppError::StatsErr(StatsError::PlayerNotFound { .. }))
    ));
}

/// Tests an unknown season key.
///
/// Expected: Err(StatsError::UnknownSeason) listing the known keys
#[tokio::test]
async fn unknown_season_is_reported() {
    let source = source();
    let config = config(&[]);

    let result = ReportService::new(&source, &config).progress("1", Some("s9")).await;

    assert!(matches!(
        result,
        Err(AppError::StatsErr(StatsError::UnknownSeason(ref season, ref known)))
            if season == "s9" && known == "s3"
    ));
}
