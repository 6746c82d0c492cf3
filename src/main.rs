mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    config::Config, data::sheets::GoogleSheetsClient, error::AppError,
    scheduler::event_reminders, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let db = startup::connect_to_database(&config).await?;

    let http_client = startup::setup_reqwest_client()?;
    let sheets = GoogleSheetsClient::new(http_client, &config.credentials_json)?;

    if let Err(e) = startup::import_legacy_pings(&db, &sheets, &config).await {
        tracing::error!(
            "Failed to import legacy sent reminders from {}: {}",
            config.legacy_pings_path.display(),
            e
        );
    }

    tracing::info!("Starting statboard");

    let state = AppState::new(db, Arc::new(sheets), Arc::new(config));

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(state.clone()).await?;

    event_reminders::start_scheduler(state, discord_http).await?;

    bot::start::start_bot(bot_client).await
}
