//! Error types and chat reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Command handlers
//! never let an error escape: they turn it into a chat reply through
//! [`AppError::user_message`] and move on.

pub mod command;
pub mod config;
pub mod sheets;
pub mod stats;

use serenity::http::HttpError;
use serenity::model::ModelError;
use thiserror::Error;

use crate::error::{
    command::CommandError, config::ConfigError, sheets::SheetsError, stats::StatsError,
};

/// Discord JSON error code for an invalid form body (oversized content).
const DISCORD_INVALID_FORM_BODY: isize = 50035;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Google Sheets or Drive request failed.
    #[error(transparent)]
    SheetsErr(#[from] SheetsError),

    /// Lookup failure in the player statistics (reported verbatim to users).
    #[error(transparent)]
    StatsErr(#[from] StatsError),

    /// Chat command usage or permission failure (reported verbatim to users).
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Local file access error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Builds the chat reply shown to the member who invoked a command.
    ///
    /// - Lookup and usage failures are shown as-is.
    /// - Oversized messages and Discord rate limits get a hint to narrow the request.
    /// - Everything else is shown as `❌ Error: {message}`.
    pub fn user_message(&self) -> String {
        match self {
            Self::StatsErr(err) => err.to_string(),
            Self::CommandErr(err) => err.to_string(),
            Self::DiscordErr(err) if is_quota_error(err) => {
                "⚠️ The result is too large or Discord is rate limiting the bot. \
                 Try narrowing the request (smaller count, a single alliance or server)."
                    .to_string()
            }
            err => format!("❌ Error: {}", err),
        }
    }
}

/// Whether a Discord failure is a message-size or rate-limit problem.
fn is_quota_error(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Model(ModelError::MessageTooLong(_))
        | serenity::Error::Model(ModelError::EmbedTooLarge(_)) => true,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 429
                || response.error.code == DISCORD_INVALID_FORM_BODY
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that lookup failures are shown without the generic error prefix.
    ///
    /// Expected: message equals the StatsError display text
    #[test]
    fn lookup_failures_are_reported_verbatim() {
        let err: AppError = StatsError::UnknownSeason("s9".to_string(), "s1, s2".to_string()).into();

        assert_eq!(
            err.user_message(),
            "❌ Unknown season 's9'. Known seasons: s1, s2"
        );
    }

    /// Tests that oversized messages produce the narrowing hint.
    ///
    /// Expected: message mentions narrowing the request
    #[test]
    fn oversized_message_gets_hint() {
        let err: AppError = serenity::Error::Model(ModelError::MessageTooLong(2500)).into();

        assert!(err.user_message().contains("narrowing the request"));
    }

    /// Tests that upstream failures use the generic error prefix.
    ///
    /// Expected: message starts with "❌ Error:"
    #[test]
    fn upstream_failures_use_generic_prefix() {
        let err: AppError = SheetsError::WorkbookNotFound("Season 3".to_string()).into();

        assert_eq!(
            err.user_message(),
            "❌ Error: Spreadsheet 'Season 3' not found"
        );
    }
}
