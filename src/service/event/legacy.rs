//! Adoption of sent reminders recorded by the previous bot.
//!
//! Legacy keys are `event_id@offset_seconds`, but the old event IDs do not
//! follow the `<slug>-<unix start>` scheme used now. A legacy key is matched
//! to a current event when the event's name slug prefixes the legacy ID and
//! the recorded send time falls inside that reminder's due window.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    data::sent_ping::SentPingRepository,
    error::AppError,
    model::event::{slug, split_sent_key, ReminderEvent},
};

use super::{reminder::delivery_window, EventService};

/// Whether a legacy reminder record refers to `event`'s reminder at `offset_seconds`.
fn matches_legacy(
    event: &ReminderEvent,
    legacy_id: &str,
    offset_seconds: i64,
    sent_at: DateTime<Utc>,
) -> bool {
    let same_event =
        legacy_id == event.event_id() || slug(legacy_id).starts_with(&slug(&event.event_name));
    if !same_event {
        return false;
    }

    event
        .slots()
        .iter()
        .find(|slot| slot.offset_seconds == offset_seconds)
        .is_some_and(|slot| delivery_window(slot, event.start_time, sent_at).is_some())
}

impl<'a> EventService<'a> {
    /// Records legacy sent reminders under the IDs of the current events.
    ///
    /// Entries matching no event, or more than one, are left alone.
    ///
    /// # Arguments
    /// - `entries` - Legacy map of `event_id@offset` to the send time
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reminders newly recorded
    /// - `Err(AppError)` - Events sheet or database unavailable
    pub async fn adopt_legacy(
        &self,
        entries: &HashMap<String, DateTime<Utc>>,
    ) -> Result<u64, AppError> {
        let events = self.load_events().await?;
        let sent_repo = SentPingRepository::new(self.db);
        let mut adopted = 0;

        for (key, sent_at) in entries {
            let Some((legacy_id, offset_seconds)) = split_sent_key(key) else {
                continue;
            };

            let candidates: Vec<&ReminderEvent> = events
                .iter()
                .filter(|event| matches_legacy(event, legacy_id, offset_seconds, *sent_at))
                .collect();

            match candidates.as_slice() {
                [event] => {
                    if sent_repo
                        .record(&event.event_id(), offset_seconds, *sent_at)
                        .await?
                    {
                        adopted += 1;
                    }
                }
                [] => {}
                _ => tracing::debug!(
                    "Legacy sent reminder {} matches {} events, not adopted",
                    key,
                    candidates.len()
                ),
            }
        }

        Ok(adopted)
    }
}
