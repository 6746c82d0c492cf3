use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::{
    config::Config,
    error::AppError,
    service::event::ReminderNotifier,
};


const EVENTS: &str = "Events";

fn config() -> Config {
    let vars = HashMap::from([
        ("TOKEN", "token"),
        ("CREDENTIALS_JSON", "{}"),
        ("STATS_WORKBOOK", "Season 4 Stats"),
        ("EVENTS_WORKBOOK", EVENTS),
    ]);
    Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap()
}

fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, hour, minute, second).unwrap()
}

/// Notifier recording every message, optionally failing the first sends.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(u64, String)>>,
    failures_left: Mutex<usize>,
}

impl RecordingNotifier {
    fn failing(times: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failures_left: Mutex::new(times),
        }
    }

    fn sent(&self) -> Vec<(u64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

/// Notifier yielding to the runtime before every send, like a slow Discord request.
#[derive(Default)]
struct SlowNotifier {
    inner: RecordingNotifier,
}

#[async_trait]
impl ReminderNotifier for SlowNotifier {
    async fn notify(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        for _ in 0..50 {
            tokio::task::yield_now().await;
        }
        self.inner.notify(channel_id, content).await
    }
}

#[async_trait]
impl ReminderNotifier for RecordingNotifier {
    async fn notify(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        let mut failures_left = self.failures_left.lock().unwrap();
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err(std::io::Error::other("discord unavailable").into());
        }

        self.sent.lock().unwrap().push((channel_id, content));
        Ok(())
    }
}
