use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{sent_ping::SentPingRepository, sheets::SnapshotSource},
    error::AppError,
    service::event::EventService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Imports the legacy sent reminder JSON file, if present.
///
/// The file maps `event_id@offset_seconds` to the ISO-8601 send time. Keys
/// are first copied as-is, then matched against the current events sheet so
/// reminders the previous bot sent under its own event IDs are not sent
/// again. Keys already in the database are kept, so running the import on
/// every start is harmless. The file is left in place.
///
/// # Returns
/// - `Ok(u64)` - Number of reminders recorded, 0 when there is no file
/// - `Err(AppError)` - File unreadable or malformed, events sheet or database error
pub async fn import_legacy_pings(
    db: &DatabaseConnection,
    source: &dyn SnapshotSource,
    config: &Config,
) -> Result<u64, AppError> {
    let path = &config.legacy_pings_path;
    if !tokio::fs::try_exists(path).await? {
        return Ok(0);
    }

    let raw = tokio::fs::read_to_string(path).await?;
    let entries: HashMap<String, DateTime<Utc>> = serde_json::from_str(&raw)?;

    let copied = SentPingRepository::new(db).import_legacy(&entries).await?;
    let adopted = EventService::new(db, source, config)
        .adopt_legacy(&entries)
        .await?;

    if copied + adopted > 0 {
        tracing::info!(
            "Imported {} sent reminders ({} copied, {} matched to current events) from {} legacy entries in {}",
            copied + adopted,
            copied,
            adopted,
            entries.len(),
            path.display()
        );
    }

    Ok(copied + adopted)
}

/// Builds the HTTP client used for Google API requests.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}
