//! Data access layer.
//!
//! Repositories wrap the two stores the bot reads and writes: Google Sheets
//! workbooks (player snapshots and the events sheet) behind the
//! [`sheets::SnapshotSource`] trait, and the SQLite database holding the
//! sent-reminder state. They return domain models and leave policy to the
//! service layer.

pub mod event;
pub mod sent_ping;
pub mod sheets;

#[cfg(test)]
mod test;
