use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{
    bot::command::{self, dispatch, gate, Command},
    error::{command::CommandError, AppError},
    state::AppState,
};

/// Handle message creation in a channel
///
/// Messages from bots and messages that are not known commands are ignored.
/// Any failure is logged and answered with one reply in the same channel.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(parsed) = command::parse(&message.content) else {
        return;
    };

    tracing::debug!(
        "Command from {} ({}) in channel {}: {}",
        message.author.name,
        message.author.id,
        message.channel_id,
        message.content
    );

    let result = match parsed {
        Ok(command) => run_command(state, &ctx, &message, command).await,
        Err(e) => Err(e.into()),
    };

    let Err(e) = result else {
        return;
    };

    tracing::warn!(
        "Command '{}' in channel {} failed: {}",
        message.content,
        message.channel_id,
        e
    );

    if let Err(reply_err) = message.channel_id.say(&ctx.http, e.user_message()).await {
        tracing::error!(
            "Failed to send error reply in channel {}: {}",
            message.channel_id,
            reply_err
        );
    }
}

/// Checks the gate and runs the command.
async fn run_command(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    command: Command,
) -> Result<(), AppError> {
    if command.requires_manager() && message.guild_id.is_none() {
        return Err(CommandError::GuildOnly.into());
    }

    let roles: Vec<u64> = message
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    gate::admit(
        &state.config.gate,
        &command,
        &state.config.manager_role_ids,
        &roles,
    )?;

    dispatch::execute(state, &ctx.http, message.channel_id, command).await
}
