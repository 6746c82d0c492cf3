//! Scheduled in-game events and their reminder offsets.
//!
//! Events are rows of the events sheet. Each event type has a fixed list of
//! reminder offsets before the start time; one reminder is sent per
//! (event, offset) pair.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::util::parse::parse_snowflake;

const DAY: i64 = 24 * 60 * 60;
const HOUR: i64 = 60 * 60;
const MINUTE: i64 = 60;

/// Header row written to an empty events sheet.
pub const EVENT_SHEET_HEADER: [&str; 6] = [
    "event_name",
    "start_time_utc",
    "channel_id",
    "message",
    "event_type",
    "ping_role_id",
];

/// Formats accepted for the start time column, all interpreted as UTC.
const START_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Format used when writing start times to the sheet.
pub const START_TIME_WRITE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Caravan,
    ShadowFort,
    AllianceMobilization,
    Behemoth,
    Pass,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Caravan,
        EventType::ShadowFort,
        EventType::AllianceMobilization,
        EventType::Behemoth,
        EventType::Pass,
    ];

    /// Parses the sheet / command spelling of an event type.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "caravan" => Some(EventType::Caravan),
            "shadowfort" | "sf" => Some(EventType::ShadowFort),
            "alliancemobilization" | "mobilization" | "mobi" | "am" => {
                Some(EventType::AllianceMobilization)
            }
            "behemoth" => Some(EventType::Behemoth),
            "pass" => Some(EventType::Pass),
            _ => None,
        }
    }

    /// Spelling stored in the sheet.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Caravan => "caravan",
            EventType::ShadowFort => "shadow_fort",
            EventType::AllianceMobilization => "alliance_mobilization",
            EventType::Behemoth => "behemoth",
            EventType::Pass => "pass",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Caravan => "🐫 Caravan",
            EventType::ShadowFort => "🏰 Shadow Fort",
            EventType::AllianceMobilization => "⚔️ Alliance Mobilization",
            EventType::Behemoth => "🐉 Behemoth",
            EventType::Pass => "🚪 Pass",
        }
    }

    /// Reminder offsets before the start, in seconds, largest first.
    pub fn offsets(self) -> &'static [i64] {
        match self {
            EventType::Caravan => &[DAY, HOUR, 10 * MINUTE],
            EventType::ShadowFort => &[HOUR, 10 * MINUTE],
            EventType::AllianceMobilization => &[DAY, HOUR, 10 * MINUTE],
            EventType::Behemoth => &[HOUR, 15 * MINUTE],
            EventType::Pass => &[HOUR, 10 * MINUTE],
        }
    }
}

/// One row of the events sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEvent {
    pub event_name: String,
    pub start_time: DateTime<Utc>,
    pub channel_id: u64,
    pub message: String,
    pub event_type: EventType,
    pub ping_role_id: Option<u64>,
}

/// Lowercases a name and replaces everything but letters and digits with `_`.
pub fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

impl ReminderEvent {
    /// Stable identifier derived from the event content.
    ///
    /// Row numbers shift when the sheet is edited by hand, so the name and
    /// start time identify the event instead.
    pub fn event_id(&self) -> String {
        format!("{}-{}", slug(&self.event_name), self.start_time.timestamp())
    }

    /// Parses one events sheet row.
    ///
    /// # Returns
    /// - `Ok(ReminderEvent)` - Valid row
    /// - `Err(String)` - Human readable reason the row was rejected
    pub fn from_row(row: &[String]) -> Result<Self, String> {
        let cell = |position: usize| row.get(position).map(|c| c.trim()).unwrap_or("");

        let event_name = cell(0);
        if event_name.is_empty() {
            return Err("missing event name".to_string());
        }

        let start_time = parse_start_time(cell(1))
            .ok_or_else(|| format!("unreadable start time '{}'", cell(1)))?;

        let channel_id = parse_snowflake(cell(2))
            .ok_or_else(|| format!("unreadable channel id '{}'", cell(2)))?;

        let event_type = EventType::parse(cell(4))
            .ok_or_else(|| format!("unknown event type '{}'", cell(4)))?;

        let ping_role_id = match cell(5) {
            "" => None,
            raw => Some(
                parse_snowflake(raw).ok_or_else(|| format!("unreadable role id '{}'", raw))?,
            ),
        };

        Ok(Self {
            event_name: event_name.to_string(),
            start_time,
            channel_id,
            message: cell(3).to_string(),
            event_type,
            ping_role_id,
        })
    }

    /// Serializes the event in events sheet column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.event_name.clone(),
            self.start_time.format(START_TIME_WRITE_FORMAT).to_string(),
            self.channel_id.to_string(),
            self.message.clone(),
            self.event_type.as_str().to_string(),
            self.ping_role_id.map(|id| id.to_string()).unwrap_or_default(),
        ]
    }

    /// Every reminder of this event with its fire time.
    pub fn slots(&self) -> Vec<ReminderSlot> {
        self.event_type
            .offsets()
            .iter()
            .map(|&offset_seconds| ReminderSlot {
                offset_seconds,
                fire_time: self.start_time - chrono::Duration::seconds(offset_seconds),
            })
            .collect()
    }
}

/// One reminder of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSlot {
    /// Seconds before the event start.
    pub offset_seconds: i64,
    /// Instant the reminder becomes due.
    pub fire_time: DateTime<Utc>,
}

/// Key of the sent-ping store for one (event, offset) pair.
pub fn sent_key(event_id: &str, offset_seconds: i64) -> String {
    format!("{}@{}", event_id, offset_seconds)
}

/// Splits a sent-ping key back into its event ID and offset.
pub fn split_sent_key(key: &str) -> Option<(&str, i64)> {
    let (event_id, offset) = key.rsplit_once('@')?;
    Some((event_id, offset.parse().ok()?))
}

/// Parses a start time cell as UTC.
///
/// Accepts RFC 3339 and the plain formats in [`START_TIME_FORMATS`], with an
/// optional trailing `UTC`.
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    let value = value
        .strip_suffix("UTC")
        .map(str::trim_end)
        .unwrap_or(value);

    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Human readable offset such as "1 day", "1 hour" or "10 minutes".
pub fn describe_offset(offset_seconds: i64) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    if offset_seconds >= DAY && offset_seconds % DAY == 0 {
        plural(offset_seconds / DAY, "day")
    } else if offset_seconds >= HOUR && offset_seconds % HOUR == 0 {
        plural(offset_seconds / HOUR, "hour")
    } else {
        plural(offset_seconds / MINUTE, "minute")
    }
}
