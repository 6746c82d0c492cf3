//! Sent ping factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for recorded reminder sends.
///
/// The key is derived from the event ID and offset the same way the bot
/// derives it, `{event_id}@{offset_seconds}`.
pub struct SentPingFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: String,
    offset_seconds: i64,
    sent_at: DateTime<Utc>,
}

impl<'a> SentPingFactory<'a> {
    /// Creates a factory with defaults.
    ///
    /// Defaults:
    /// - event_id: `"event_{id}-1767261600"` where id is auto-incremented
    /// - offset_seconds: `3600`
    /// - sent_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            event_id: format!("event_{}-1767261600", next_id()),
            offset_seconds: 3600,
            sent_at: Utc::now(),
        }
    }

    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    pub fn offset_seconds(mut self, offset_seconds: i64) -> Self {
        self.offset_seconds = offset_seconds;
        self
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = sent_at;
        self
    }

    /// Inserts the row.
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted row
    /// - `Err(DbErr)` - Insert failed, e.g. the key already exists
    pub async fn build(self) -> Result<entity::sent_ping::Model, DbErr> {
        entity::sent_ping::ActiveModel {
            key: ActiveValue::Set(format!("{}@{}", self.event_id, self.offset_seconds)),
            event_id: ActiveValue::Set(self.event_id),
            offset_seconds: ActiveValue::Set(self.offset_seconds),
            sent_at: ActiveValue::Set(self.sent_at),
        }
        .insert(self.db)
        .await
    }
}

/// Records a sent reminder for the given event and offset.
pub async fn create_sent_ping(
    db: &DatabaseConnection,
    event_id: &str,
    offset_seconds: i64,
) -> Result<entity::sent_ping::Model, DbErr> {
    SentPingFactory::new(db)
        .event_id(event_id)
        .offset_seconds(offset_seconds)
        .build()
        .await
}
