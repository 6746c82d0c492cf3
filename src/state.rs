//! Application state shared by every event handler and the scheduler.
//!
//! The state is built once in `main` and cloned into the Discord event
//! handler. All fields are cheap to clone: `DatabaseConnection` is a pool,
//! the spreadsheet client and configuration sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, data::sheets::SnapshotSource};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool holding the sent reminder state.
    pub db: DatabaseConnection,

    /// Spreadsheet access for snapshots and the events sheet.
    pub sheets: Arc<dyn SnapshotSource>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, sheets: Arc<dyn SnapshotSource>, config: Arc<Config>) -> Self {
        Self { db, sheets, config }
    }
}
