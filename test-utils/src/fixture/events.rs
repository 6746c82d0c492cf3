//! Events sheet fixtures.

pub const HEADER: [&str; 6] = [
    "event_name",
    "start_time_utc",
    "channel_id",
    "message",
    "event_type",
    "ping_role_id",
];

pub fn header() -> Vec<String> {
    HEADER.iter().map(|h| h.to_string()).collect()
}

/// One events sheet row.
///
/// # Arguments
/// - `name` - Event name
/// - `start` - Start time cell, e.g. `"2026-01-01 18:00"`
/// - `event_type` - Event type cell, e.g. `"behemoth"`
pub fn event_row(name: &str, start: &str, event_type: &str) -> Vec<String> {
    vec![
        name.to_string(),
        start.to_string(),
        "111111111111111111".to_string(),
        String::new(),
        event_type.to_string(),
        String::new(),
    ]
}

/// Prepends the events header to rows.
pub fn tab(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    std::iter::once(header()).chain(rows).collect()
}
