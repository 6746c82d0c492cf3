//! War status channel renames.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::{
    all::{ChannelId, EditChannel},
    http::Http,
};

use crate::{error::AppError, model::war_status::WarStatus};

/// Reply sent before the rename is attempted.
///
/// Discord allows two channel renames per ten minutes, so the rename itself
/// may be held back by the rate limiter long after the command.
pub fn acknowledgement(status: WarStatus) -> String {
    format!(
        "✅ Command received: Setting status to {} {}...\n⚠️ *Channel rename may be delayed due to Discord rate limits.*",
        status.emoji(),
        status.label()
    )
}

pub struct WarStatusService {
    http: Arc<Http>,
    channel_id: u64,
}

impl WarStatusService {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self { http, channel_id }
    }

    /// Renames the war status channel to encode `status`.
    ///
    /// # Returns
    /// - `Ok(())` - Channel renamed
    /// - `Err(AppError::DiscordErr)` - Rename rejected or rate limited
    pub async fn set_status(&self, status: WarStatus) -> Result<(), AppError> {
        ChannelId::new(self.channel_id)
            .edit(&self.http, EditChannel::new().name(status.channel_name()))
            .await?;

        tracing::info!(
            "War status channel {} set to {}",
            self.channel_id,
            status.label()
        );

        Ok(())
    }
}
