use crate::{
    model::{event::EventType, war_status::WarStatus},
    service::stats::metric::Metric,
};

use super::parser::{DEFAULT_COUNT, MAX_COUNT};

/// The `!commands` listing.
pub fn help_text() -> String {
    let mut lines = vec![
        "📖 **Statboard commands**".to_string(),
        String::new(),
        "**Player stats**".to_string(),
        "`!progress <lord_id> [season]` - Your gains since the previous snapshot and kill rank"
            .to_string(),
    ];

    for metric in Metric::ALL {
        lines.push(format!(
            "`!{} [count] [season]` - {} {} leaderboard",
            metric.command(),
            metric.emoji(),
            metric.label()
        ));
    }

    lines.extend([
        "`!serverrank <server> <metric> [count]` - Leaderboard for one home server".to_string(),
        "`!alliancerank <tag> <metric> [count]` - Leaderboard for one alliance".to_string(),
        "`!topperformer [count] [alliance]` - Best composite scores".to_string(),
        "`!lowperformer [count] [alliance]` - Lowest composite scores".to_string(),
        "`!farms [alliance]` - Low power accounts by resources gathered".to_string(),
        format!(
            "Counts default to {} and go up to {}. Metrics: {}",
            DEFAULT_COUNT,
            MAX_COUNT,
            Metric::ALL
                .iter()
                .map(|m| m.name())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        String::new(),
        "**Events**".to_string(),
        "`!events` - Upcoming events and their next reminder".to_string(),
        "`!add <type> <YYYY-MM-DD HH:MM> <#channel> <@role|none> <name> [| message]` - Schedule an event (UTC, managers)".to_string(),
        format!(
            "Event types: {}",
            EventType::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        String::new(),
        "**Management**".to_string(),
        "`!kickcheck <alliance>` - Keep / warning / kick recommendations (managers)".to_string(),
    ]);

    for status in WarStatus::ALL {
        lines.push(format!(
            "`!{}` - Set war status to {} {} (managers)",
            status.command(),
            status.emoji(),
            status.label()
        ));
    }

    lines.join("\n")
}
