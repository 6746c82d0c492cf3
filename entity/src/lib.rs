//! SeaORM entity models for the statboard database.

pub mod prelude;

pub mod sent_ping;
