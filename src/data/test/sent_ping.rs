use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::sent_ping::SentPingRepository;

/// Tests that an unrecorded key does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_key_does_not_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SentPingRepository::new(db);

    assert!(!repo.exists("raid-1767261600", 3600).await?);

    Ok(())
}

/// Tests recording a key and reading it back.
///
/// Expected: first record inserts, key exists afterwards
#[tokio::test]
async fn records_sent_ping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SentPingRepository::new(db);
    let inserted = repo.record("raid-1767261600", 600, Utc::now()).await?;

    assert!(inserted);
    assert!(repo.exists("raid-1767261600", 600).await?);
    assert!(!repo.exists("raid-1767261600", 3600).await?);

    Ok(())
}

/// Tests that recording an existing key keeps the first timestamp.
///
/// Expected: Ok(false) and the original sent_at unchanged
#[tokio::test]
async fn duplicate_record_is_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_sent = Utc.with_ymd_and_hms(2026, 1, 1, 17, 0, 0).unwrap();
    factory::sent_ping::SentPingFactory::new(db)
        .event_id("raid-1767290400")
        .offset_seconds(3600)
        .sent_at(first_sent)
        .build()
        .await?;

    let repo = SentPingRepository::new(db);
    let inserted = repo
        .record("raid-1767290400", 3600, first_sent + Duration::minutes(5))
        .await?;
    let rows = repo.get_by_event("raid-1767290400").await?;

    assert!(!inserted);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sent_at, first_sent);

    Ok(())
}

/// Tests importing the legacy JSON state.
///
/// Verifies malformed keys are skipped and existing keys are not counted.
///
/// Expected: Ok(1) with both valid keys present
#[tokio::test]
async fn imports_legacy_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sent_ping(db, "caravan-1767261600", 86400).await?;

    let now = Utc::now();
    let entries = HashMap::from([
        ("caravan-1767261600@86400".to_string(), now),
        ("caravan-1767261600@3600".to_string(), now),
        ("not-a-key".to_string(), now),
    ]);

    let repo = SentPingRepository::new(db);
    let imported = repo.import_legacy(&entries).await?;

    assert_eq!(imported, 1);
    assert!(repo.exists("caravan-1767261600", 86400).await?);
    assert!(repo.exists("caravan-1767261600", 3600).await?);

    Ok(())
}
