//! Scheduled events and their reminders.
//!
//! The events sheet is the source of truth for events; the database only
//! records which reminders were already sent. The service is organized by
//! concern:
//! - `legacy` - Adopting the previous bot's sent reminder records
//! - `reminder` - Due reminder detection and delivery, run by the scheduler
//! - `schedule` - Upcoming events listing and `!add`

pub mod legacy;
pub mod reminder;
pub mod schedule;

#[cfg(test)]
mod test;

use std::sync::Arc;

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage},
    http::Http,
};

use crate::{
    config::Config,
    data::{event::EventRepository, sheets::SnapshotSource},
    error::AppError,
    model::event::ReminderEvent,
};

/// Delivers reminder messages to a channel.
#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn notify(&self, channel_id: u64, content: String) -> Result<(), AppError>;
}

/// Posts reminders through the Discord REST API.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReminderNotifier for DiscordNotifier {
    async fn notify(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new().all_roles(true));

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}

pub struct EventService<'a> {
    /// Sent reminder state
    db: &'a DatabaseConnection,
    source: &'a dyn SnapshotSource,
    workbook: &'a str,
    tab: &'a str,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService reading the configured events sheet.
    pub fn new(db: &'a DatabaseConnection, source: &'a dyn SnapshotSource, config: &'a Config) -> Self {
        Self {
            db,
            source,
            workbook: &config.events_workbook,
            tab: &config.events_tab,
        }
    }

    fn repository(&self) -> EventRepository<'a> {
        EventRepository::new(self.source, self.workbook, self.tab)
    }

    /// Reads every valid event, logging and skipping unreadable rows.
    async fn load_events(&self) -> Result<Vec<ReminderEvent>, AppError> {
        let sheet = self.repository().get_all().await?;

        for (row, reason) in &sheet.rejected {
            tracing::warn!("Skipping events sheet row {}: {}", row, reason);
        }

        Ok(sheet.events)
    }
}
