use std::collections::HashMap;

use test_utils::fixture::sheet;

use crate::{
    config::Config,
    data::sheets::memory::MemorySource,
    error::AppError,
    service::report::ReportService,
};

mod farms;
mod leaderboard;
mod progress;

const STATS: &str = "Season 4 Stats";
const PREVIOUS_SEASON: &str = "Season 3 Stats";

fn config(extra: &[(&'static str, &'static str)]) -> Config {
    let mut vars = HashMap::from([
        ("TOKEN", "token"),
        ("CREDENTIALS_JSON", "{}"),
        ("STATS_WORKBOOK", STATS),
        ("EVENTS_WORKBOOK", "Events"),
        ("SEASON_WORKBOOKS", "s3=Season 3 Stats"),
    ]);
    vars.extend(extra.iter().copied());
    Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap()
}

/// Two-week workbook with five players.
///
/// | id | alliance | server | power | kills gained | merits gained | dead gained |
/// |----|----------|--------|-------|--------------|---------------|-------------|
/// | 1  | ABC      | 101    | 80M   | 9,000        | 4M            | 600k        |
/// | 2  | ABC      | 101    | 60M   | 12,000       | 1M            | 100k        |
/// | 3  | XYZ      | 102    | 30M   | 12,000       | 0             | 0           |
/// | 4  | XYZ      | 102    | 10M   | 99,000       | 0             | 0           |
/// | 5  | ABC      | 102    | 70M   | -500         | 5M            | 700k        |
fn source() -> MemorySource {
    let week1 = sheet::tab(vec![
        sheet::player_row("1").name("Aria").power(80_000_000).killed(1_000).build(),
        sheet::player_row("2").name("Bran").power(60_000_000).build(),
        sheet::player_row("3").name("Cato").alliance("XYZ").server("102").power(30_000_000).build(),
        sheet::player_row("4").name("Dax").alliance("XYZ").server("102").power(10_000_000).build(),
        sheet::player_row("5").name("Eve").server("102").power(70_000_000).killed(2_000).build(),
    ]);
    let week2 = sheet::tab(vec![
        sheet::player_row("1")
            .name("Aria")
            .power(80_000_000)
            .killed(10_000)
            .merits(4_000_000)
            .dead(600_000)
            .healed(50_000)
            .build(),
        sheet::player_row("2")
            .name("Bran")
            .power(60_000_000)
            .killed(12_000)
            .merits(1_000_000)
            .dead(100_000)
            .build(),
        sheet::player_row("3")
            .name("Cato")
            .alliance("XYZ")
            .server("102")
            .power(30_000_000)
            .killed(12_000)
            .build(),
        sheet::player_row("4")
            .name("Dax")
            .alliance("XYZ")
            .server("102")
            .power(10_000_000)
            .killed(99_000)
            .gathered(8_000_000)
            .build(),
        sheet::player_row("5")
            .name("Eve")
            .server("102")
            .power(70_000_000)
            .killed(1_500)
            .merits(5_000_000)
            .dead(700_000)
            .healed(10_000)
            .build(),
        sheet::player_row("6").name("Fay").power(5_000_000).gathered(9_000_000).build(),
    ]);

    MemorySource::new()
        .with_tab(STATS, "2026-01-01", week1)
        .with_tab(STATS, "2026-01-08", week2)
}
