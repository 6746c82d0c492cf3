//! Reminder delivery.
//!
//! Each (event, offset) pair is either pending or fired. A pending reminder
//! becomes due at its fire time and stays due through the catch-up window or
//! until the event starts, whichever comes first. Sends within the on-time
//! tolerance are regular reminders; later ones are catch-ups after downtime.
//! A reminder is recorded only after a successful send, so a failed send is
//! retried on the next tick while it is still due. Ticks never overlap: a
//! tick starting while the previous one is still sending is skipped.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use tokio::sync::Mutex;

use crate::{
    data::sent_ping::SentPingRepository,
    error::AppError,
    model::event::{describe_offset, ReminderEvent, ReminderSlot},
};

use super::{EventService, ReminderNotifier};

/// Lateness still considered an on-time send.
pub const ON_TIME_TOLERANCE_SECS: i64 = 7 * 60;

/// How long after its fire time a missed reminder is still sent.
pub const CATCH_UP_WINDOW_SECS: i64 = 12 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    OnTime,
    Late,
}

/// Whether a reminder is due at `now`, and how late it would be.
///
/// # Returns
/// - `Some(Delivery)` - Due: `fire_time <= now`, within the catch-up window and before the start
/// - `None` - Not due yet, expired, or the event already started
pub fn delivery_window(slot: &ReminderSlot, start_time: DateTime<Utc>, now: DateTime<Utc>) -> Option<Delivery> {
    if now < slot.fire_time || now >= start_time {
        return None;
    }

    let lateness = now - slot.fire_time;
    if lateness <= Duration::seconds(ON_TIME_TOLERANCE_SECS) {
        Some(Delivery::OnTime)
    } else if lateness <= Duration::seconds(CATCH_UP_WINDOW_SECS) {
        Some(Delivery::Late)
    } else {
        None
    }
}

/// Builds the reminder message.
///
/// Starts with the role mention when the event has a ping role, followed by
/// the event label, name and start as a Discord timestamp.
pub fn reminder_content(event: &ReminderEvent, slot: &ReminderSlot, delivery: Delivery) -> String {
    let mut content = String::new();

    if let Some(role_id) = event.ping_role_id {
        content.push_str(&format!("<@&{}> ", role_id));
    }

    let start = event.start_time.timestamp();
    match delivery {
        Delivery::OnTime => content.push_str(&format!(
            "**{}: {}** starts in {} (<t:{}:F>)",
            event.event_type.label(),
            event.event_name,
            describe_offset(slot.offset_seconds),
            start
        )),
        Delivery::Late => content.push_str(&format!(
            "**{}: {}** starts <t:{}:R> (<t:{}:F>)",
            event.event_type.label(),
            event.event_name,
            start,
            start
        )),
    }

    if !event.message.trim().is_empty() {
        content.push('\n');
        content.push_str(event.message.trim());
    }

    content
}

/// Outcome of one scheduler tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub sent: usize,
    pub failed: usize,
}

/// Serializes scheduler ticks.
///
/// Clones share the same lock, so the cron job can hand one to every tick.
#[derive(Debug, Clone, Default)]
pub struct TickGuard(Arc<Mutex<()>>);

impl<'a> EventService<'a> {
    /// Runs [`Self::process_due`] unless another tick holding `guard` is still running.
    ///
    /// # Returns
    /// - `Ok(Some(TickSummary))` - Tick ran
    /// - `Ok(None)` - Skipped, the previous tick has not finished
    /// - `Err(AppError)` - Events sheet or database unavailable
    pub async fn run_tick(
        &self,
        guard: &TickGuard,
        notifier: &dyn ReminderNotifier,
        now: DateTime<Utc>,
    ) -> Result<Option<TickSummary>, AppError> {
        let Ok(_running) = guard.0.try_lock() else {
            tracing::debug!("Previous reminder tick still running, skipping tick at {}", now);
            return Ok(None);
        };

        self.process_due(notifier, now).await.map(Some)
    }

    /// Sends every due reminder that has not been sent yet.
    ///
    /// A failed send is logged and left pending. Only errors reading the
    /// events sheet or the sent state abort the tick.
    ///
    /// # Arguments
    /// - `notifier` - Delivers the messages
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(TickSummary)` - Reminders sent and failed this tick
    /// - `Err(AppError)` - Events sheet or database unavailable
    pub async fn process_due(
        &self,
        notifier: &dyn ReminderNotifier,
        now: DateTime<Utc>,
    ) -> Result<TickSummary, AppError> {
        let events = self.load_events().await?;
        let sent_repo = SentPingRepository::new(self.db);
        let mut summary = TickSummary::default();

        for event in &events {
            let event_id = event.event_id();

            for slot in event.slots() {
                let Some(delivery) = delivery_window(&slot, event.start_time, now) else {
                    continue;
                };
                if sent_repo.exists(&event_id, slot.offset_seconds).await? {
                    continue;
                }

                let content = reminder_content(event, &slot, delivery);
                match notifier.notify(event.channel_id, content).await {
                    Ok(()) => {
                        sent_repo.record(&event_id, slot.offset_seconds, now).await?;
                        summary.sent += 1;

                        if delivery == Delivery::Late {
                            tracing::warn!(
                                "Sent late {} reminder for event {} ({}s after fire time)",
                                describe_offset(slot.offset_seconds),
                                event_id,
                                (now - slot.fire_time).num_seconds()
                            );
                        } else {
                            tracing::info!(
                                "Sent {} reminder for event {}",
                                describe_offset(slot.offset_seconds),
                                event_id
                            );
                        }
                    }
                    Err(e) => {
                        summary.failed += 1;
                        tracing::error!(
                            "Failed to send {} reminder for event {} to channel {}: {}",
                            describe_offset(slot.offset_seconds),
                            event_id,
                            event.channel_id,
                            e
                        );
                    }
                }
            }
        }

        Ok(summary)
    }
}
