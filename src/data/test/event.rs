use chrono::{TimeZone, Utc};
use test_utils::fixture::events;

use crate::{
    data::{event::EventRepository, sheets::memory::MemorySource},
    error::AppError,
    model::event::{EventType, ReminderEvent},
};

/// Tests parsing events with a header row and a bad row.
///
/// Expected: two events, one rejected row reported with its sheet row number
#[tokio::test]
async fn reads_events_and_reports_bad_rows() -> Result<(), AppError> {
    let source = MemorySource::new().with_tab(
        "Events",
        "Events",
        events::tab(vec![
            events::event_row("Behemoth", "2026-01-01 18:00", "behemoth"),
            events::event_row("Broken", "tomorrow", "behemoth"),
            vec![String::new(); 6],
            events::event_row("Caravan", "2026-01-02 12:00", "caravan"),
        ]),
    );

    let repo = EventRepository::new(&source, "Events", "Events");
    let sheet = repo.get_all().await?;

    assert_eq!(sheet.events.len(), 2);
    assert_eq!(sheet.events[0].event_type, EventType::Behemoth);
    assert_eq!(
        sheet.events[0].start_time,
        Utc.with_ymd_and_hms(2026, 1, 1, 18, 0, 0).unwrap()
    );
    assert_eq!(sheet.rejected.len(), 1);
    assert_eq!(sheet.rejected[0].0, 3);

    Ok(())
}

/// Tests appending an event to an empty sheet and reading it back.
///
/// Expected: header written first, appended event parses to the same value
#[tokio::test]
async fn appends_event_row() -> Result<(), AppError> {
    let source = MemorySource::new().with_tab("Events", "Events", vec![]);
    let repo = EventRepository::new(&source, "Events", "Events");

    let event = ReminderEvent {
        event_name: "Shadow Fort".to_string(),
        start_time: Utc.with_ymd_and_hms(2026, 2, 1, 20, 0, 0).unwrap(),
        channel_id: 123456789012345678,
        message: "Gather at the fort".to_string(),
        event_type: EventType::ShadowFort,
        ping_role_id: Some(876543210987654321),
    };
    repo.append(&event).await?;

    let sheet = repo.get_all().await?;

    assert_eq!(sheet.events, vec![event]);
    assert!(sheet.rejected.is_empty());
    assert_eq!(source.rows("Events", "Events")[0], events::header());

    Ok(())
}
