use std::sync::Arc;

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::event::{reminder::TickGuard, DiscordNotifier, EventService},
    state::AppState,
};

/// Starts the event reminder scheduler
///
/// Runs on the configured cron schedule (every 30 seconds by default) and
/// sends every reminder that became due since the last tick. A tick is
/// skipped while the previous one is still running. A failed tick is logged
/// and does not affect later ticks.
///
/// # Arguments
/// - `state`: Shared application state
/// - `discord_http`: Discord HTTP client for sending reminders
pub async fn start_scheduler(state: AppState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = state.config.reminder_cron.clone();
    let guard = TickGuard::default();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();
        let guard = guard.clone();

        Box::pin(async move {
            if let Err(e) = process_event_reminders(&state, http, &guard).await {
                tracing::error!("Error processing event reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Event reminder scheduler started ({})", schedule);

    Ok(())
}

/// Sends due reminders once.
async fn process_event_reminders(
    state: &AppState,
    discord_http: Arc<Http>,
    guard: &TickGuard,
) -> Result<(), AppError> {
    let notifier = DiscordNotifier::new(discord_http);
    let service = EventService::new(&state.db, state.sheets.as_ref(), &state.config);

    let Some(summary) = service.run_tick(guard, &notifier, Utc::now()).await? else {
        return Ok(());
    };

    if summary.sent > 0 || summary.failed > 0 {
        tracing::debug!(
            "Reminder tick: {} sent, {} failed",
            summary.sent,
            summary.failed
        );
    }

    Ok(())
}
