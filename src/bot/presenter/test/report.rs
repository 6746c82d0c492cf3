use chrono::{Duration, TimeZone, Utc};
use test_utils::fixture::sheet;

use crate::{
    bot::presenter::{
        events::events_text,
        report::{kickcheck_text, leaderboard_text},
    },
    model::{
        event::{EventType, ReminderEvent},
        snapshot::{Snapshot, SnapshotPair},
        stat_field::StatField,
    },
    service::{
        event::schedule::UpcomingEvent,
        report::{kickcheck::KickReport, leaderboard::Leaderboard, ReportPeriod},
        stats::{
            delta::pair_deltas,
            kickcheck::{kickcheck, KickThresholds},
            metric::Metric,
            ranking::{rank_by_gain, Order, Scope},
        },
    },
};

fn period() -> ReportPeriod {
    ReportPeriod {
        workbook: "Season 4 Stats".to_string(),
        previous_tab: "2026-01-01".to_string(),
        latest_tab: "2026-01-08".to_string(),
    }
}

/// Two players in ABC: Aria earns 5M merits with 1M dead, Bran earns nothing.
fn pair() -> SnapshotPair {
    let previous = vec![
        sheet::player_row("1").name("Aria").power(100_000_000).build(),
        sheet::player_row("2").name("Bran").power(100_000_000).build(),
    ];
    let latest = vec![
        sheet::player_row("1")
            .name("Aria")
            .power(100_000_000)
            .merits(5_000_000)
            .dead(1_000_000)
            .killed(1_234_567)
            .build(),
        sheet::player_row("2").name("Bran").power(100_000_000).build(),
    ];

    SnapshotPair {
        workbook: "Season 4 Stats".to_string(),
        previous: Snapshot::from_rows("2026-01-01", &sheet::tab(previous)).unwrap(),
        latest: Snapshot::from_rows("2026-01-08", &sheet::tab(latest)).unwrap(),
    }
}

/// Tests the leaderboard text.
///
/// Expected: heading, period and ranked lines with grouped numbers
#[test]
fn formats_leaderboard() {
    let records = pair_deltas(&pair());
    let board = Leaderboard {
        period: period(),
        metric: Metric::Kills,
        scope: Scope::Global,
        min_power: 25_000_000,
        cohort_size: records.len(),
        entries: rank_by_gain(records, StatField::UnitsKilled, Order::Descending, Metric::Kills.tie_break()),
    };

    let text = leaderboard_text(&board);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].contains("Top 2 Units Killed"));
    assert!(lines[1].contains("`2026-01-01` → `2026-01-08`"));
    assert_eq!(lines[4], "1. **Aria** [ABC] `1` · S101 · 1,234,567");
    assert_eq!(lines[5], "2. **Bran** [ABC] `2` · S101 · 0");
}

/// Tests that kickcheck sections appear in kick, warning, keep order.
///
/// Expected: KICK section before KEEP, no WARNING section
#[test]
fn formats_kickcheck_sections() {
    let thresholds = KickThresholds::default();
    let report = KickReport {
        period: period(),
        alliance: "ABC".to_string(),
        thresholds,
        roster_checked: false,
        entries: kickcheck(pair_deltas(&pair()), &thresholds, None),
    };

    let text = kickcheck_text(&report);
    let kick = text.find("🔴 KICK (1)").unwrap();
    let keep = text.find("🟢 KEEP (1)").unwrap();

    assert!(kick < keep);
    assert!(!text.contains("WARNING ("));
    assert!(text.contains("No previous season roster configured"));
    assert!(text.contains("- **Bran** `2`"));
}

/// Tests the events listing.
///
/// Expected: event line with Discord timestamps and next reminder, then all-sent marker
#[test]
fn formats_events() {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 18, 0, 0).unwrap();
    let event = ReminderEvent {
        event_name: "Behemoth".to_string(),
        start_time: start,
        channel_id: 42,
        message: String::new(),
        event_type: EventType::Behemoth,
        ping_role_id: None,
    };
    let next = event.slots()[1];

    let text = events_text(&[
        UpcomingEvent {
            event: event.clone(),
            next_reminder: Some(next),
        },
        UpcomingEvent {
            event: ReminderEvent {
                start_time: start + Duration::days(1),
                ..event
            },
            next_reminder: None,
        },
    ]);

    assert!(text.contains(&format!("<t:{}:F>", start.timestamp())));
    assert!(text.contains("in <#42>"));
    assert!(text.contains("next reminder 15 minutes before"));
    assert!(text.contains("all reminders sent"));
    assert_eq!(events_text(&[]), "📅 No upcoming events.");
}
