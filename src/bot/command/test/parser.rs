use chrono::{TimeZone, Utc};

use crate::{
    bot::command::{
        help::help_text,
        parse,
        parser::{Command, DEFAULT_COUNT, MAX_COUNT},
    },
    error::command::CommandError,
    model::{event::EventType, war_status::WarStatus},
    service::stats::{metric::Metric, ranking::Order},
};

/// Tests that ordinary chat and unknown commands are ignored.
///
/// Expected: None
#[test]
fn ignores_non_commands() {
    assert_eq!(parse("hello there"), None);
    assert_eq!(parse("!"), None);
    assert_eq!(parse("!play some music"), None);
}

/// Tests the progress command with and without a season.
///
/// Expected: lord ID and optional season parsed, missing ID is a usage error
#[test]
fn parses_progress() {
    assert_eq!(
        parse("!progress 12345"),
        Some(Ok(Command::Progress {
            lord_id: "12345".to_string(),
            season: None,
        }))
    );
    assert_eq!(
        parse("!Progress 12345 s3"),
        Some(Ok(Command::Progress {
            lord_id: "12345".to_string(),
            season: Some("s3".to_string()),
        }))
    );
    assert!(matches!(parse("!progress"), Some(Err(CommandError::Usage(_)))));
}

/// Tests leaderboard count and season arguments.
///
/// Expected: numeric first argument is the count, otherwise the season
#[test]
fn parses_leaderboards() {
    assert_eq!(
        parse("!topkills"),
        Some(Ok(Command::Top {
            metric: Metric::Kills,
            count: DEFAULT_COUNT,
            season: None,
        }))
    );
    assert_eq!(
        parse("!topmerits 25 s3"),
        Some(Ok(Command::Top {
            metric: Metric::Merits,
            count: 25,
            season: Some("s3".to_string()),
        }))
    );
    assert_eq!(
        parse("!tophelps s3"),
        Some(Ok(Command::Top {
            metric: Metric::Helps,
            count: DEFAULT_COUNT,
            season: Some("s3".to_string()),
        }))
    );
    assert!(matches!(
        parse("!topdeaths 500"),
        Some(Err(CommandError::InvalidArgument(_)))
    ));
    assert!(matches!(
        parse("!topdeaths 0"),
        Some(Err(CommandError::InvalidArgument(_)))
    ));
}

/// Tests scoped rankings.
///
/// Expected: scope, metric and count parsed; unknown metric rejected
#[test]
fn parses_scoped_rankings() {
    assert_eq!(
        parse("!serverrank 101 kills 5"),
        Some(Ok(Command::ServerRank {
            server: "101".to_string(),
            metric: Metric::Kills,
            count: 5,
        }))
    );
    assert_eq!(
        parse("!alliancerank ABC dead"),
        Some(Ok(Command::AllianceRank {
            alliance: "ABC".to_string(),
            metric: Metric::Deaths,
            count: DEFAULT_COUNT,
        }))
    );
    assert!(matches!(
        parse("!alliancerank ABC power"),
        Some(Err(CommandError::InvalidArgument(_)))
    ));
    assert!(matches!(parse("!serverrank 101"), Some(Err(CommandError::Usage(_)))));
}

/// Tests performer, kickcheck, farms and war commands.
///
/// Expected: each parsed to its command
#[test]
fn parses_management_commands() {
    assert_eq!(
        parse("!lowperformer 5 ABC"),
        Some(Ok(Command::Performers {
            order: Order::Ascending,
            count: 5,
            alliance: Some("ABC".to_string()),
        }))
    );
    assert_eq!(
        parse("!kickcheck ABC"),
        Some(Ok(Command::KickCheck {
            alliance: "ABC".to_string(),
        }))
    );
    assert!(matches!(parse("!kickcheck"), Some(Err(CommandError::Usage(_)))));
    assert_eq!(parse("!farms"), Some(Ok(Command::Farms { alliance: None })));
    assert_eq!(parse("!warred"), Some(Ok(Command::War(WarStatus::FullWar))));
    assert_eq!(parse("!warmana"), Some(Ok(Command::War(WarStatus::FarmMana))));
    assert_eq!(parse("!commands"), Some(Ok(Command::Help)));
    assert_eq!(parse("!events"), Some(Ok(Command::Events)));
}

/// Tests adding an event with a role mention and a message.
///
/// Expected: all fields parsed, name taken up to the separator
#[test]
fn parses_add() {
    let Some(Ok(Command::Add(event))) =
        parse("!add behemoth 2026-02-01 20:00 <#123> <@&456> Behemoth Hunt | Bring healers")
    else {
        panic!("expected an add command");
    };

    assert_eq!(event.event_type, EventType::Behemoth);
    assert_eq!(event.start_time, Utc.with_ymd_and_hms(2026, 2, 1, 20, 0, 0).unwrap());
    assert_eq!(event.channel_id, 123);
    assert_eq!(event.ping_role_id, Some(456));
    assert_eq!(event.event_name, "Behemoth Hunt");
    assert_eq!(event.message, "Bring healers");
}

/// Tests add argument errors.
///
/// Expected: usage error without a name, invalid argument for a bad type or time
#[test]
fn rejects_bad_add() {
    assert!(matches!(
        parse("!add caravan 2026-02-01 20:00 <#123> none"),
        Some(Err(CommandError::Usage(_)))
    ));
    assert!(matches!(
        parse("!add raid 2026-02-01 20:00 <#123> none Raid"),
        Some(Err(CommandError::InvalidArgument(_)))
    ));
    assert!(matches!(
        parse("!add caravan tomorrow 20:00 <#123> none Caravan"),
        Some(Err(CommandError::InvalidArgument(_)))
    ));

    let Some(Ok(Command::Add(event))) = parse("!add caravan 2026-02-01 20:00 123 none Caravan")
    else {
        panic!("expected an add command");
    };
    assert_eq!(event.ping_role_id, None);
    assert_eq!(event.message, "");
}

/// Tests that every command appears in the help listing.
///
/// Expected: each leaderboard and war command listed
#[test]
fn help_lists_commands() {
    let help = help_text();

    for metric in Metric::ALL {
        assert!(help.contains(&format!("!{}", metric.command())));
    }
    for status in WarStatus::ALL {
        assert!(help.contains(&format!("!{}", status.command())));
    }
    assert!(help.contains("!kickcheck"));
    assert!(help.contains("!add"));
}

/// Tests the upper bound of the count argument.
///
/// Expected: 50 accepted as-is, 51 rejected with the allowed range
#[test]
fn count_above_maximum_is_rejected() {
    assert_eq!(
        parse("!topkills 50"),
        Some(Ok(Command::Top {
            metric: Metric::Kills,
            count: MAX_COUNT,
            season: None,
        }))
    );

    match parse("!topkills 51") {
        Some(Err(CommandError::InvalidArgument(message))) => {
            assert!(message.contains("from 1 to 50"));
        }
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}
