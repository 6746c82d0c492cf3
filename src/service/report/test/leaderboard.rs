use super::*;
use crate::service::stats::{metric::Metric, ranking::Scope};

fn ids(board: &crate::service::report::leaderboard::Leaderboard) -> Vec<&str> {
    board
        .entries
        .iter()
        .map(|entry| entry.entity.lord_id.as_str())
        .collect()
}

/// Tests the global kill leaderboard.
///
/// Verifies the 10M account is excluded despite the largest gain, ties break
/// by name and the negative delta is clamped.
///
/// Expected: Bran, Cato, Aria, Eve with Eve at 0
#[tokio::test]
async fn global_kill_leaderboard() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);

    let board = ReportService::new(&source, &config)
        .leaderboard(Metric::Kills, Scope::Global, 10, None)
        .await?;

    assert_eq!(ids(&board), vec!["2", "3", "1", "5"]);
    assert_eq!(board.cohort_size, 4);
    assert_eq!(board.entries[3].value, 0);

    Ok(())
}

/// Tests truncation to the requested count.
///
/// Expected: two entries
#[tokio::test]
async fn leaderboard_truncates_to_count() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);

    let board = ReportService::new(&source, &config)
        .leaderboard(Metric::Merits, Scope::Global, 2, None)
        .await?;

    assert_eq!(ids(&board), vec!["5", "1"]);
    assert_eq!(board.cohort_size, 4);

    Ok(())
}

/// Tests server and alliance scoped boards.
///
/// Expected: only members of the scope
#[tokio::test]
async fn scoped_leaderboards() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);
    let service = ReportService::new(&source, &config);

    let server = service
        .leaderboard(Metric::Kills, Scope::Server("102".to_string()), 10, None)
        .await?;
    let alliance = service
        .leaderboard(Metric::Deaths, Scope::Alliance("abc".to_string()), 10, None)
        .await?;

    assert_eq!(ids(&server), vec!["3", "5"]);
    assert_eq!(ids(&alliance), vec!["5", "1", "2"]);

    Ok(())
}
