//! Test fixtures providing spreadsheet data without any I/O.
//!
//! Unlike factories, fixtures never touch the database. They build the raw
//! cell values a sheet source would return, so snapshot parsing and the stats
//! engine can be tested with realistic input.
//!
//! ```rust,ignore
//! use test_utils::fixture::sheet;
//!
//! let rows = sheet::tab(vec![
//!     sheet::player_row("123").power(60_000_000).merits(2_000_000).build(),
//! ]);
//! ```

pub mod events;
pub mod sheet;
