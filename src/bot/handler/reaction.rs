//! War status reactions.
//!
//! A manager reacting with a status emoji on the configured war status
//! message renames the war status channel. Reactions on that message are
//! always removed again so the message keeps showing only the bot's own.

use dioxus_logger::tracing;
use serenity::all::{Context, Reaction, ReactionType};

use crate::{
    bot::command::gate::is_manager, model::war_status::WarStatus,
    service::war_status::WarStatusService, state::AppState,
};

/// Handles a reaction added to any message.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let config = &state.config;
    let (Some(message_id), Some(channel_id)) =
        (config.war_status_message_id, config.war_status_channel_id)
    else {
        return;
    };
    if reaction.message_id.get() != message_id {
        return;
    }

    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return;
    };
    let Some(status) = WarStatus::from_emoji(emoji) else {
        return;
    };

    let roles: Vec<u64> = reaction
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    if is_manager(&roles, &config.manager_role_ids) {
        let service = WarStatusService::new(ctx.http.clone(), channel_id);
        if let Err(e) = service.set_status(status).await {
            tracing::error!(
                "Failed to set war status {} from reaction: {}",
                status.label(),
                e
            );
        }
    } else {
        tracing::debug!(
            "Ignoring war status reaction {} from non-manager {:?}",
            emoji,
            reaction.user_id
        );
    }

    if let Err(e) = reaction.delete(&ctx.http).await {
        tracing::warn!("Failed to remove war status reaction: {}", e);
    }
}
