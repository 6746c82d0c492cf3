//! Chat command parsing.
//!
//! Messages starting with `!` are split into a command name and whitespace
//! separated arguments. Unknown command names are ignored so other bots
//! sharing the prefix are left alone.

use crate::{
    error::command::CommandError,
    model::{
        event::{parse_start_time, EventType, ReminderEvent},
        war_status::WarStatus,
    },
    service::stats::{metric::Metric, ranking::Order},
    util::parse::parse_snowflake,
};

pub const PREFIX: char = '!';

/// Entries shown when no count is given.
pub const DEFAULT_COUNT: usize = 10;

/// Largest accepted count.
pub const MAX_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Progress {
        lord_id: String,
        season: Option<String>,
    },
    Top {
        metric: Metric,
        count: usize,
        season: Option<String>,
    },
    ServerRank {
        server: String,
        metric: Metric,
        count: usize,
    },
    AllianceRank {
        alliance: String,
        metric: Metric,
        count: usize,
    },
    Performers {
        order: Order,
        count: usize,
        alliance: Option<String>,
    },
    KickCheck {
        alliance: String,
    },
    Farms {
        alliance: Option<String>,
    },
    War(WarStatus),
    Add(ReminderEvent),
    Events,
}

impl Command {
    /// Command name as typed, without the prefix.
    pub fn name(&self) -> String {
        match self {
            Command::Help => "commands".to_string(),
            Command::Progress { .. } => "progress".to_string(),
            Command::Top { metric, .. } => metric.command(),
            Command::ServerRank { .. } => "serverrank".to_string(),
            Command::AllianceRank { .. } => "alliancerank".to_string(),
            Command::Performers { order, .. } => match order {
                Order::Descending => "topperformer".to_string(),
                Order::Ascending => "lowperformer".to_string(),
            },
            Command::KickCheck { .. } => "kickcheck".to_string(),
            Command::Farms { .. } => "farms".to_string(),
            Command::War(status) => status.command().to_string(),
            Command::Add(_) => "add".to_string(),
            Command::Events => "events".to_string(),
        }
    }

    /// Whether only members with a manager role may run the command.
    pub fn requires_manager(&self) -> bool {
        matches!(
            self,
            Command::KickCheck { .. } | Command::War(_) | Command::Add(_)
        )
    }
}

/// Parses a message into a command.
///
/// # Returns
/// - `None` - Not a command, or a command name this bot does not know
/// - `Some(Ok(Command))` - Parsed command
/// - `Some(Err(CommandError))` - Known command with bad arguments
pub fn parse(content: &str) -> Option<Result<Command, CommandError>> {
    let body = content.trim().strip_prefix(PREFIX)?;
    let (name, rest) = next_token(body)?;
    let name = name.to_lowercase();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match name.as_str() {
        "commands" | "help" => Ok(Command::Help),
        "progress" => parse_progress(&args),
        "serverrank" => parse_scoped_rank(&args, "!serverrank <server> <metric> [count]")
            .map(|(server, metric, count)| Command::ServerRank {
                server,
                metric,
                count,
            }),
        "alliancerank" => parse_scoped_rank(&args, "!alliancerank <tag> <metric> [count]")
            .map(|(alliance, metric, count)| Command::AllianceRank {
                alliance,
                metric,
                count,
            }),
        "topperformer" => parse_performers(&args, Order::Descending),
        "lowperformer" => parse_performers(&args, Order::Ascending),
        "kickcheck" => match args.as_slice() {
            [alliance] => Ok(Command::KickCheck {
                alliance: alliance.to_string(),
            }),
            _ => Err(CommandError::Usage("!kickcheck <alliance>".to_string())),
        },
        "farms" => match args.as_slice() {
            [] => Ok(Command::Farms { alliance: None }),
            [alliance] => Ok(Command::Farms {
                alliance: Some(alliance.to_string()),
            }),
            _ => Err(CommandError::Usage("!farms [alliance]".to_string())),
        },
        "add" => parse_add(rest).map(Command::Add),
        "events" => Ok(Command::Events),
        other => {
            if let Some(metric) = Metric::from_command(other) {
                parse_top(&args, metric)
            } else if let Some(status) = WarStatus::from_command(other) {
                Ok(Command::War(status))
            } else {
                return None;
            }
        }
    };

    Some(command)
}

/// Splits off the first whitespace separated token.
fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.find(char::is_whitespace) {
        Some(end) => Some((&text[..end], &text[end..])),
        None => Some((text, "")),
    }
}

fn parse_count(value: &str) -> Result<usize, CommandError> {
    match value.parse::<usize>() {
        Ok(count) if (1..=MAX_COUNT).contains(&count) => Ok(count),
        _ => Err(CommandError::InvalidArgument(format!(
            "Count must be a number from 1 to {}, got `{}`.",
            MAX_COUNT, value
        ))),
    }
}

fn is_count(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn parse_metric(value: &str) -> Result<Metric, CommandError> {
    Metric::parse(value).ok_or_else(|| {
        let known: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        CommandError::InvalidArgument(format!(
            "Unknown metric `{}`. Use one of: {}",
            value,
            known.join(", ")
        ))
    })
}

fn parse_progress(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [lord_id] => Ok(Command::Progress {
            lord_id: lord_id.to_string(),
            season: None,
        }),
        [lord_id, season] => Ok(Command::Progress {
            lord_id: lord_id.to_string(),
            season: Some(season.to_string()),
        }),
        _ => Err(CommandError::Usage("!progress <lord_id> [season]".to_string())),
    }
}

/// `[count] [season]`, where a numeric first argument is the count.
fn parse_top(args: &[&str], metric: Metric) -> Result<Command, CommandError> {
    let usage = || CommandError::Usage(format!("!{} [count] [season]", metric.command()));

    let (count, season) = match args {
        [] => (DEFAULT_COUNT, None),
        [first] if is_count(first) => (parse_count(first)?, None),
        [season] => (DEFAULT_COUNT, Some(season.to_string())),
        [count, season] if is_count(count) => (parse_count(count)?, Some(season.to_string())),
        _ => return Err(usage()),
    };

    Ok(Command::Top {
        metric,
        count,
        season,
    })
}

fn parse_scoped_rank(args: &[&str], usage: &str) -> Result<(String, Metric, usize), CommandError> {
    match args {
        [scope, metric] => Ok((scope.to_string(), parse_metric(metric)?, DEFAULT_COUNT)),
        [scope, metric, count] => Ok((scope.to_string(), parse_metric(metric)?, parse_count(count)?)),
        _ => Err(CommandError::Usage(usage.to_string())),
    }
}

fn parse_performers(args: &[&str], order: Order) -> Result<Command, CommandError> {
    let usage = || {
        let name = match order {
            Order::Descending => "topperformer",
            Order::Ascending => "lowperformer",
        };
        CommandError::Usage(format!("!{} [count] [alliance]", name))
    };

    let (count, alliance) = match args {
        [] => (DEFAULT_COUNT, None),
        [first] if is_count(first) => (parse_count(first)?, None),
        [alliance] => (DEFAULT_COUNT, Some(alliance.to_string())),
        [count, alliance] if is_count(count) => (parse_count(count)?, Some(alliance.to_string())),
        _ => return Err(usage()),
    };

    Ok(Command::Performers {
        order,
        count,
        alliance,
    })
}

const ADD_USAGE: &str = "!add <type> <YYYY-MM-DD HH:MM> <#channel> <@role|none> <name> [| message]";

/// Parses `!add` arguments.
///
/// The name runs to the end of the message or up to a `|`, after which
/// everything is the reminder message.
fn parse_add(rest: &str) -> Result<ReminderEvent, CommandError> {
    let usage = || CommandError::Usage(ADD_USAGE.to_string());

    let mut remaining = rest;
    let mut tokens = Vec::with_capacity(5);
    for _ in 0..5 {
        let (token, tail) = next_token(remaining).ok_or_else(usage)?;
        tokens.push(token);
        remaining = tail;
    }

    let (name, message) = match remaining.split_once('|') {
        Some((name, message)) => (name.trim(), message.trim()),
        None => (remaining.trim(), ""),
    };
    if name.is_empty() {
        return Err(usage());
    }

    let event_type = EventType::parse(tokens[0]).ok_or_else(|| {
        let known: Vec<&str> = EventType::ALL.iter().map(|t| t.as_str()).collect();
        CommandError::InvalidArgument(format!(
            "Unknown event type `{}`. Use one of: {}",
            tokens[0],
            known.join(", ")
        ))
    })?;

    let start = format!("{} {}", tokens[1], tokens[2]);
    let start_time = parse_start_time(&start).ok_or_else(|| {
        CommandError::InvalidArgument(format!(
            "Start time `{}` is not in `YYYY-MM-DD HH:MM` (UTC) format.",
            start
        ))
    })?;

    let channel_id = parse_snowflake(tokens[3]).ok_or_else(|| {
        CommandError::InvalidArgument(format!("`{}` is not a channel.", tokens[3]))
    })?;

    let ping_role_id = match tokens[4].to_lowercase().as_str() {
        "none" | "-" => None,
        raw => Some(parse_snowflake(raw).ok_or_else(|| {
            CommandError::InvalidArgument(format!("`{}` is not a role.", tokens[4]))
        })?),
    };

    Ok(ReminderEvent {
        event_name: name.to_string(),
        start_time,
        channel_id,
        message: message.to_string(),
        event_type,
        ping_role_id,
    })
}
