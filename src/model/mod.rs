//! Domain models.
//!
//! Plain data types shared by the data, service and bot layers: sheet
//! snapshots and their column schema, scheduled events, and war status.

pub mod event;
pub mod snapshot;
pub mod stat_field;
pub mod war_status;
