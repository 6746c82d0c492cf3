use thiserror::Error;

/// Lookup failures while reading player statistics.
///
/// These are reported to the invoking user verbatim and are never fatal.
#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    /// The workbook has fewer tabs than the operation needs.
    #[error("❌ Spreadsheet '{workbook}' needs at least {required} snapshot tab(s), found {found}.")]
    NotEnoughSnapshots {
        workbook: String,
        required: usize,
        found: usize,
    },

    /// Player is absent from one or both compared snapshots.
    #[error("❌ Lord ID `{lord_id}` was not found in both '{previous}' and '{latest}'.")]
    PlayerNotFound {
        lord_id: String,
        previous: String,
        latest: String,
    },

    /// A required column could not be resolved by header or position.
    #[error("❌ Tab '{tab}' has no '{field}' column.")]
    MissingColumn { tab: String, field: String },

    /// The season key is not configured.
    #[error("❌ Unknown season '{0}'. Known seasons: {1}")]
    UnknownSeason(String, String),
}
