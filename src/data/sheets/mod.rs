//! Spreadsheet access.
//!
//! [`SnapshotSource`] is the boundary to the spreadsheet service. The
//! production implementation talks to the Google Sheets and Drive REST APIs;
//! tests use an in-memory source.

pub mod google;
pub mod reader;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::{error::AppError, model::snapshot::Tab};

pub use google::GoogleSheetsClient;
pub use reader::SnapshotReader;

/// Read and append access to named workbooks.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Lists the tabs of a workbook in creation order, oldest first.
    async fn list_tabs(&self, workbook: &str) -> Result<Vec<Tab>, AppError>;

    /// Fetches every cell value of one tab as displayed text.
    ///
    /// Rows may have different lengths; trailing empty cells are usually omitted.
    async fn get_values(&self, workbook: &str, tab: &str) -> Result<Vec<Vec<String>>, AppError>;

    /// Appends one row after the last non-empty row of a tab.
    async fn append_row(&self, workbook: &str, tab: &str, values: Vec<String>) -> Result<(), AppError>;
}
