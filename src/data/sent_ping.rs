use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::event::{sent_key, split_sent_key};

/// Persistent record of reminders already sent.
///
/// One row per (event, offset) key. Rows are only ever inserted, so a key
/// once recorded stays recorded across restarts.
pub struct SentPingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SentPingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a reminder has been sent.
    ///
    /// # Returns
    /// - `Ok(true)` - Key already recorded
    /// - `Ok(false)` - Not sent yet
    /// - `Err(DbErr)` - Database error
    pub async fn exists(&self, event_id: &str, offset_seconds: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::SentPing::find()
            .filter(entity::sent_ping::Column::Key.eq(sent_key(event_id, offset_seconds)))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Records a sent reminder.
    ///
    /// Recording an existing key keeps the original timestamp.
    ///
    /// # Returns
    /// - `Ok(true)` - Row inserted
    /// - `Ok(false)` - Key was already recorded
    /// - `Err(DbErr)` - Database error
    pub async fn record(
        &self,
        event_id: &str,
        offset_seconds: i64,
        sent_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let model = entity::sent_ping::ActiveModel {
            key: ActiveValue::Set(sent_key(event_id, offset_seconds)),
            event_id: ActiveValue::Set(event_id.to_string()),
            offset_seconds: ActiveValue::Set(offset_seconds),
            sent_at: ActiveValue::Set(sent_at),
        };

        let inserted = entity::prelude::SentPing::insert(model)
            .on_conflict(
                OnConflict::column(entity::sent_ping::Column::Key)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// Imports keys from the legacy JSON state file.
    ///
    /// Keys that do not split into an event ID and offset are skipped, as are
    /// keys already present.
    ///
    /// # Arguments
    /// - `entries` - Legacy map of `event_id@offset` to the send time
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of keys imported
    /// - `Err(DbErr)` - Database error
    pub async fn import_legacy(&self, entries: &HashMap<String, DateTime<Utc>>) -> Result<u64, DbErr> {
        let mut imported = 0;
        for (key, sent_at) in entries {
            let Some((event_id, offset_seconds)) = split_sent_key(key) else {
                continue;
            };
            if self.record(event_id, offset_seconds, *sent_at).await? {
                imported += 1;
            }
        }
        Ok(imported)
    }

    /// Keys recorded for one event.
    pub async fn get_by_event(&self, event_id: &str) -> Result<Vec<entity::sent_ping::Model>, DbErr> {
        entity::prelude::SentPing::find()
            .filter(entity::sent_ping::Column::EventId.eq(event_id))
            .all(self.db)
            .await
    }
}
