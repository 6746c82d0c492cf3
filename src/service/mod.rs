//! Business logic layer.
//!
//! Services coordinate repositories and the stats engine. They return domain
//! values; formatting for Discord happens in `bot::presenter`.
//!
//! - `event` - Events sheet listing, `!add` and the reminder tick
//! - `report` - Snapshot reports behind the stats commands
//! - `stats` - Pure delta, ranking and scoring engine
//! - `war_status` - War status channel renames

pub mod event;
pub mod report;
pub mod stats;
pub mod war_status;
