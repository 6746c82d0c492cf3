//! Report formatting for the statistics commands.

use crate::{
    model::stat_field::StatField,
    service::{
        report::{
            farms::FarmReport, kickcheck::KickReport, leaderboard::Leaderboard,
            performer::PerformerReport, progress::ProgressReport, ReportPeriod,
        },
        stats::{
            kickcheck::{KickThresholds, KickVerdict},
            ranking::Order,
        },
    },
};

use super::{format_number, format_percent, EmbedField};

fn period_line(period: &ReportPeriod) -> String {
    format!(
        "📒 {} · `{}` → `{}`",
        period.workbook, period.previous_tab, period.latest_tab
    )
}

fn alliance_tag(alliance: &str) -> String {
    if alliance.trim().is_empty() {
        String::new()
    } else {
        format!(" [{}]", alliance.trim())
    }
}

/// `!topkills` and the other metric leaderboards.
pub fn leaderboard_text(board: &Leaderboard) -> String {
    let mut lines = vec![
        format!(
            "{} **Top {} {}** ({})",
            board.metric.emoji(),
            board.entries.len(),
            board.metric.label(),
            board.scope.describe()
        ),
        period_line(&board.period),
        format!(
            "Min power {} · {} eligible players",
            format_number(board.min_power),
            board.cohort_size
        ),
        String::new(),
    ];

    if board.entries.is_empty() {
        lines.push("No eligible players.".to_string());
    }

    for entry in &board.entries {
        let record = &entry.entity;
        lines.push(format!(
            "{}. **{}**{} `{}` · S{} · {}",
            entry.rank,
            record.name,
            alliance_tag(&record.alliance),
            record.lord_id,
            record.home_server,
            format_number(entry.value)
        ));
    }

    lines.join("\n")
}

/// Fields of the `!progress` embed.
pub fn progress_fields(report: &ProgressReport) -> Vec<EmbedField> {
    let record = &report.record;
    let rank = |position: Option<(usize, usize)>| match position {
        Some((rank, size)) => format!("#{} of {}", rank, size),
        None => "not ranked".to_string(),
    };

    let mut fields = vec![(
        "⚡ Power".to_string(),
        format!(
            "{} → {} ({:+})",
            format_number(report.previous_power),
            format_number(record.power),
            record.power.saturating_sub(report.previous_power)
        ),
        false,
    )];

    for field in [
        StatField::Merits,
        StatField::UnitsKilled,
        StatField::UnitsDead,
        StatField::UnitsHealed,
        StatField::T5Kills,
        StatField::T4Kills,
        StatField::ManaSpent,
        StatField::HelpsGiven,
    ] {
        fields.push((field.label().to_string(), format_number(record.gain(field)), true));
    }

    fields.extend([
        (
            "Resources Spent".to_string(),
            format_number(record.resources_spent()),
            true,
        ),
        (
            "Merit / Dead ratio".to_string(),
            format!(
                "{} / {}",
                format_percent(record.merit_ratio()),
                format_percent(record.dead_ratio())
            ),
            true,
        ),
        (
            format!("🏠 Kill rank, server {}", record.home_server),
            rank(report.server_kill_rank),
            true,
        ),
        ("🌍 Kill rank, global".to_string(), rank(report.global_kill_rank), true),
    ]);

    fields
}

/// Title and description of the `!progress` embed.
pub fn progress_heading(report: &ProgressReport) -> (String, String) {
    let record = &report.record;
    (
        format!("📈 {}{}", record.name, alliance_tag(&record.alliance)),
        format!(
            "Lord ID `{}` · Server {}\n{}",
            record.lord_id,
            record.home_server,
            period_line(&report.period)
        ),
    )
}

/// `!topperformer` and `!lowperformer`.
pub fn performer_text(report: &PerformerReport) -> String {
    let heading = match report.order {
        Order::Descending => "🏆 **Top performers**",
        Order::Ascending => "🐢 **Low performers**",
    };

    let mut lines = vec![
        format!("{} ({})", heading, report.scope.describe()),
        period_line(&report.period),
        format!(
            "Min power {} · {} scored players · 40% merits, 40% dead, 20% heals",
            format_number(report.min_power),
            report.cohort_size
        ),
        String::new(),
    ];

    if report.entries.is_empty() {
        lines.push("No eligible players.".to_string());
    }

    for entry in &report.entries {
        let score = &entry.entity;
        let record = &score.record;
        lines.push(format!(
            "{}. **{}**{} `{}` · **{:.1}** · merits {} · dead {} ({}) · healed {}",
            entry.rank,
            record.name,
            alliance_tag(&record.alliance),
            record.lord_id,
            entry.value,
            format_percent(record.merit_ratio()),
            format_number(record.gain(StatField::UnitsDead)),
            format_percent(record.dead_ratio()),
            format_number(record.gain(StatField::UnitsHealed))
        ));
    }

    lines.join("\n")
}

fn thresholds_line(thresholds: &KickThresholds) -> String {
    format!(
        "Keep: merits ≥ {}% and dead ≥ {}% of power. Flex: merits ≥ {}% or ≥ {} merits, with dead ≥ {}%.",
        thresholds.normal_merit_ratio,
        thresholds.normal_dead_ratio,
        thresholds.flex_merit_ratio,
        format_number(thresholds.absolute_merit_gain),
        thresholds.hard_dead_ratio
    )
}

/// `!kickcheck`, one section per verdict.
pub fn kickcheck_text(report: &KickReport) -> String {
    let mut lines = vec![
        format!("🧹 **Kickcheck [{}]**", report.alliance),
        period_line(&report.period),
        thresholds_line(&report.thresholds),
    ];
    if !report.roster_checked {
        lines.push("⚠️ No previous season roster configured, new players get no grace.".to_string());
    }

    if report.entries.is_empty() {
        lines.push(String::new());
        lines.push("No eligible players.".to_string());
    }

    for verdict in [KickVerdict::Kick, KickVerdict::Warning, KickVerdict::Keep] {
        let section: Vec<_> = report
            .entries
            .iter()
            .filter(|entry| entry.verdict == verdict)
            .collect();
        if section.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(format!("**{} ({})**", verdict.label(), section.len()));
        for entry in section {
            let record = &entry.record;
            lines.push(format!(
                "- **{}** `{}` · merits {} ({}) · dead {} ({}) · {}",
                record.name,
                record.lord_id,
                format_number(record.gain(StatField::Merits)),
                format_percent(record.merit_ratio()),
                format_number(record.gain(StatField::UnitsDead)),
                format_percent(record.dead_ratio()),
                entry.reason.describe()
            ));
        }
    }

    lines.join("\n")
}

/// `!farms`.
pub fn farms_text(report: &FarmReport) -> String {
    let scope = report
        .alliance
        .as_deref()
        .map(alliance_tag)
        .unwrap_or_default();

    let mut lines = vec![
        format!("🌾 **Farm accounts**{}", scope),
        format!(
            "📒 {} · `{}` · power ≤ {}",
            report.workbook,
            report.tab,
            format_number(report.power_ceiling)
        ),
        String::new(),
    ];

    if report.entries.is_empty() {
        lines.push("No farm accounts found.".to_string());
    }

    for entry in &report.entries {
        let farm = &entry.entity;
        lines.push(format!(
            "{}. **{}**{} `{}` · power {} · gathered {}",
            entry.rank,
            farm.name,
            alliance_tag(&farm.alliance),
            farm.lord_id,
            format_number(farm.power),
            format_number(entry.value)
        ));
    }

    lines.join("\n")
}
