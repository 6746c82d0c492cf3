use std::sync::Arc;

use chrono::Utc;
use serenity::{all::ChannelId, http::Http};

use crate::{
    bot::presenter::{self, events, report},
    error::{command::CommandError, AppError},
    service::{
        event::EventService,
        report::ReportService,
        stats::ranking::Scope,
        war_status::{acknowledgement, WarStatusService},
    },
    state::AppState,
};

use super::{help::help_text, parser::Command};

/// Runs a parsed and admitted command, replying in `channel_id`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `http` - Discord HTTP client
/// - `channel_id` - Channel the command was sent in
/// - `command` - Command to run
///
/// # Returns
/// - `Ok(())` - Reply posted
/// - `Err(AppError)` - Command failed; the caller reports it once
pub async fn execute(
    state: &AppState,
    http: &Arc<Http>,
    channel_id: ChannelId,
    command: Command,
) -> Result<(), AppError> {
    let reports = ReportService::new(state.sheets.as_ref(), &state.config);

    match command {
        Command::Help => presenter::send_chunked(http, channel_id, &help_text()).await,
        Command::Progress { lord_id, season } => {
            let progress = reports.progress(&lord_id, season.as_deref()).await?;
            let (title, description) = report::progress_heading(&progress);
            let embeds =
                presenter::field_embeds(&title, &description, report::progress_fields(&progress));
            presenter::send_embeds(http, channel_id, embeds).await
        }
        Command::Top {
            metric,
            count,
            season,
        } => {
            let board = reports
                .leaderboard(metric, Scope::Global, count, season.as_deref())
                .await?;
            presenter::send_chunked(http, channel_id, &report::leaderboard_text(&board)).await
        }
        Command::ServerRank {
            server,
            metric,
            count,
        } => {
            let board = reports
                .leaderboard(metric, Scope::Server(server), count, None)
                .await?;
            presenter::send_chunked(http, channel_id, &report::leaderboard_text(&board)).await
        }
        Command::AllianceRank {
            alliance,
            metric,
            count,
        } => {
            let board = reports
                .leaderboard(metric, Scope::Alliance(alliance), count, None)
                .await?;
            presenter::send_chunked(http, channel_id, &report::leaderboard_text(&board)).await
        }
        Command::Performers {
            order,
            count,
            alliance,
        } => {
            let performers = reports.performers(order, count, alliance.as_deref()).await?;
            presenter::send_chunked(http, channel_id, &report::performer_text(&performers)).await
        }
        Command::KickCheck { alliance } => {
            let kicks = reports.kickcheck(&alliance).await?;
            presenter::send_chunked(http, channel_id, &report::kickcheck_text(&kicks)).await
        }
        Command::Farms { alliance } => {
            let farms = reports.farms(alliance.as_deref()).await?;
            presenter::send_chunked(http, channel_id, &report::farms_text(&farms)).await
        }
        Command::War(status) => {
            let Some(war_channel) = state.config.war_status_channel_id else {
                return Err(CommandError::NotConfigured {
                    command: status.command().to_string(),
                    missing: "WAR_STATUS_CHANNEL_ID".to_string(),
                }
                .into());
            };

            channel_id.say(http, acknowledgement(status)).await?;
            WarStatusService::new(http.clone(), war_channel)
                .set_status(status)
                .await
        }
        Command::Add(event) => {
            EventService::new(&state.db, state.sheets.as_ref(), &state.config)
                .add(&event, Utc::now())
                .await?;
            channel_id
                .say(http, events::event_added_text(&event))
                .await?;
            Ok(())
        }
        Command::Events => {
            let upcoming = EventService::new(&state.db, state.sheets.as_ref(), &state.config)
                .upcoming(Utc::now())
                .await?;
            presenter::send_chunked(http, channel_id, &events::events_text(&upcoming)).await
        }
    }
}
