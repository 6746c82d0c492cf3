use crate::{
    model::{
        snapshot::{Snapshot, SnapshotPair},
        stat_field::StatField,
    },
    service::stats::delta::{pair_deltas, DeltaRecord},
};
use test_utils::fixture::sheet;

mod scoring;

/// Builds a snapshot pair from player rows of both tabs.
fn pair(previous: Vec<Vec<String>>, latest: Vec<Vec<String>>) -> SnapshotPair {
    SnapshotPair {
        workbook: "Season Stats".to_string(),
        previous: Snapshot::from_rows("Week 1", &sheet::tab(previous)).unwrap(),
        latest: Snapshot::from_rows("Week 2", &sheet::tab(latest)).unwrap(),
    }
}

/// Builds one delta record with the given latest power and gains.
fn record(lord_id: &str, power: i64, merits: i64, dead: i64, healed: i64) -> DeltaRecord {
    let then = sheet::player_row(lord_id).power(power).build();
    let now = sheet::player_row(lord_id)
        .power(power)
        .merits(merits)
        .dead(dead)
        .healed(healed)
        .build();

    let records = pair_deltas(&pair(vec![then], vec![now]));
    records.into_iter().next().unwrap()
}

/// Same as [`record`] with a custom name and alliance.
fn named(lord_id: &str, name: &str, alliance: &str, server: &str, power: i64, kills: i64) -> DeltaRecord {
    let then = sheet::player_row(lord_id)
        .name(name)
        .alliance(alliance)
        .server(server)
        .power(power)
        .build();
    let now = sheet::player_row(lord_id)
        .name(name)
        .alliance(alliance)
        .server(server)
        .power(power)
        .killed(kills)
        .build();

    let records = pair_deltas(&pair(vec![then], vec![now]));
    let record = records.into_iter().next().unwrap();
    assert_eq!(record.gain(StatField::UnitsKilled), kills);
    record
}
