use super::*;

/// Tests the farm listing from the latest snapshot only.
///
/// Expected: Fay then Dax by resources gathered
#[tokio::test]
async fn lists_farms_by_gathered() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);

    let report = ReportService::new(&source, &config).farms(None).await?;
    let ids: Vec<_> = report
        .entries
        .iter()
        .map(|e| e.entity.lord_id.as_str())
        .collect();

    assert_eq!(ids, vec!["6", "4"]);
    assert_eq!(report.entries[0].value, 9_000_000);
    assert_eq!(report.tab, "2026-01-08");

    Ok(())
}

/// Tests the alliance filter of the farm listing.
///
/// Expected: only Dax for XYZ
#[tokio::test]
async fn filters_farms_by_alliance() -> Result<(), AppError> {
    let source = source();
    let config = config(&[]);

    let report = ReportService::new(&source, &config).farms(Some("xyz")).await?;

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].entity.lord_id, "4");

    Ok(())
}
