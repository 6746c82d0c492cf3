use dioxus_logger::tracing::Level;
use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};
use crate::service::stats::ScoringConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://statboard.sqlite?mode=rwc";
const DEFAULT_EVENTS_TAB: &str = "Events";
const DEFAULT_LEGACY_PINGS_PATH: &str = "sent_event_pings.json";
const DEFAULT_REMINDER_CRON: &str = "*/30 * * * * *";

/// Process-wide maintenance switches consulted before every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandGate {
    /// Only managers may run commands.
    pub test_mode: bool,
    /// Every command except the help listing answers with a vacation notice.
    pub vacation_mode: bool,
}

#[derive(Clone)]
pub struct Config {
    pub discord_bot_token: String,
    pub credentials_json: String,
    pub database_url: String,

    /// Workbook holding the current season's snapshots.
    pub stats_workbook: String,
    /// Named seasons selectable from commands, as `(key, workbook name)`.
    pub seasons: Vec<(String, String)>,
    /// Roster used to grant new players a grace period in kickcheck.
    pub previous_season_workbook: Option<String>,

    pub events_workbook: String,
    pub events_tab: String,

    pub war_status_channel_id: Option<u64>,
    pub war_status_message_id: Option<u64>,
    pub manager_role_ids: Vec<u64>,

    pub gate: CommandGate,
    pub legacy_pings_path: PathBuf,
    pub reminder_cron: String,
    pub log_level: Level,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_bot_token: required("TOKEN")?,
            credentials_json: required("CREDENTIALS_JSON")?,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            stats_workbook: required("STATS_WORKBOOK")?,
            seasons: match get("SEASON_WORKBOOKS") {
                Some(raw) => parse_seasons(&raw)?,
                None => Vec::new(),
            },
            previous_season_workbook: get("PREVIOUS_SEASON_WORKBOOK"),
            events_workbook: required("EVENTS_WORKBOOK")?,
            events_tab: get("EVENTS_TAB").unwrap_or_else(|| DEFAULT_EVENTS_TAB.to_string()),
            war_status_channel_id: get("WAR_STATUS_CHANNEL_ID")
                .map(|v| parse_id("WAR_STATUS_CHANNEL_ID", &v))
                .transpose()?,
            war_status_message_id: get("WAR_STATUS_MESSAGE_ID")
                .map(|v| parse_id("WAR_STATUS_MESSAGE_ID", &v))
                .transpose()?,
            manager_role_ids: match get("MANAGER_ROLE_IDS") {
                Some(raw) => parse_id_list("MANAGER_ROLE_IDS", &raw)?,
                None => Vec::new(),
            },
            gate: CommandGate {
                test_mode: get("TEST_MODE")
                    .map(|v| parse_bool("TEST_MODE", &v))
                    .transpose()?
                    .unwrap_or(false),
                vacation_mode: get("VACATION_MODE")
                    .map(|v| parse_bool("VACATION_MODE", &v))
                    .transpose()?
                    .unwrap_or(false),
            },
            legacy_pings_path: PathBuf::from(
                get("LEGACY_PINGS_PATH").unwrap_or_else(|| DEFAULT_LEGACY_PINGS_PATH.to_string()),
            ),
            reminder_cron: get("REMINDER_CRON").unwrap_or_else(|| DEFAULT_REMINDER_CRON.to_string()),
            log_level: match get("LOG_LEVEL") {
                Some(raw) => raw.parse::<Level>().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    reason: format!("'{}' is not a log level", raw),
                })?,
                None => Level::INFO,
            },
            scoring: ScoringConfig::default(),
        })
    }

    /// Resolves an optional season key to a workbook name.
    ///
    /// `None` selects the current season. A key that matches a configured
    /// workbook name exactly is accepted as well.
    pub fn season_workbook(&self, season: Option<&str>) -> Option<&str> {
        let Some(season) = season else {
            return Some(&self.stats_workbook);
        };

        self.seasons
            .iter()
            .find(|(key, name)| key.eq_ignore_ascii_case(season) || name == season)
            .map(|(_, name)| name.as_str())
    }

    /// Comma separated list of configured season keys for error messages.
    pub fn season_keys(&self) -> String {
        if self.seasons.is_empty() {
            return "(none configured)".to_string();
        }
        self.seasons
            .iter()
            .map(|(key, _)| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(invalid(name, format!("'{}' is not a boolean", other))),
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| invalid(name, format!("'{}': {}", value.trim(), e)))
}

fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| parse_id(name, v))
        .collect()
}

/// Parses `key=Workbook Name` pairs separated by commas.
fn parse_seasons(value: &str) -> Result<Vec<(String, String)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, name) = pair
                .split_once('=')
                .ok_or_else(|| invalid("SEASON_WORKBOOKS", format!("'{}' is not key=name", pair)))?;
            Ok((key.trim().to_string(), name.trim().to_string()))
        })
        .collect()
}
