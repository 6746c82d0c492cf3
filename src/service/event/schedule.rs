use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    data::sent_ping::SentPingRepository,
    error::{command::CommandError, AppError},
    model::event::{ReminderEvent, ReminderSlot},
};

use super::{reminder::delivery_window, EventService};

/// An event that has not started yet.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingEvent {
    pub event: ReminderEvent,
    /// Earliest reminder not sent yet that can still fire.
    pub next_reminder: Option<ReminderSlot>,
}

impl<'a> EventService<'a> {
    /// Lists events starting after `now`, soonest first.
    pub async fn upcoming(&self, now: DateTime<Utc>) -> Result<Vec<UpcomingEvent>, AppError> {
        let mut events: Vec<ReminderEvent> = self
            .load_events()
            .await?
            .into_iter()
            .filter(|event| event.start_time > now)
            .collect();
        events.sort_by_key(|event| event.start_time);

        let sent_repo = SentPingRepository::new(self.db);
        let mut upcoming = Vec::with_capacity(events.len());

        for event in events {
            let sent: HashSet<i64> = sent_repo
                .get_by_event(&event.event_id())
                .await?
                .into_iter()
                .map(|ping| ping.offset_seconds)
                .collect();

            let next_reminder = event.slots().into_iter().find(|slot| {
                !sent.contains(&slot.offset_seconds)
                    && (slot.fire_time > now || delivery_window(slot, event.start_time, now).is_some())
            });

            upcoming.push(UpcomingEvent {
                event,
                next_reminder,
            });
        }

        Ok(upcoming)
    }

    /// Appends a new event to the events sheet.
    ///
    /// # Returns
    /// - `Ok(())` - Row appended; the scheduler picks it up on its next tick
    /// - `Err(CommandError::InvalidArgument)` - Start time is not in the future
    pub async fn add(&self, event: &ReminderEvent, now: DateTime<Utc>) -> Result<(), AppError> {
        if event.start_time <= now {
            return Err(CommandError::InvalidArgument(format!(
                "Start time <t:{}:F> is in the past.",
                event.start_time.timestamp()
            ))
            .into());
        }

        self.repository().append(event).await
    }
}
