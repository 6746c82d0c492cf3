//! Discord bot integration.
//!
//! The bot listens to raw gateway events: `!` prefixed messages are parsed
//! into commands, and reactions on the war status message change the war
//! status. The bot's HTTP client is shared with the reminder scheduler so
//! both post through the same rate limiter.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel data
//! - `GUILD_MESSAGES` - Message events in guild channels
//! - `MESSAGE_CONTENT` - Message text for prefix commands (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Reactions on the war status message
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod presenter;
pub mod start;
