//! In-memory [`SnapshotSource`] for tests.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use crate::{
    data::sheets::SnapshotSource,
    error::{sheets::SheetsError, AppError},
    model::snapshot::Tab,
};

#[derive(Default)]
pub struct MemorySource {
    /// Workbook name to tabs in creation order.
    workbooks: Mutex<HashMap<String, Vec<(String, Vec<Vec<String>>)>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tab after the existing tabs of a workbook, creating the workbook if needed.
    pub fn with_tab(self, workbook: &str, title: &str, rows: Vec<Vec<String>>) -> Self {
        self.workbooks
            .lock()
            .unwrap()
            .entry(workbook.to_string())
            .or_default()
            .push((title.to_string(), rows));
        self
    }

    /// Current rows of a tab.
    pub fn rows(&self, workbook: &str, tab: &str) -> Vec<Vec<String>> {
        self.workbooks
            .lock()
            .unwrap()
            .get(workbook)
            .and_then(|tabs| tabs.iter().find(|(title, _)| title == tab))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default()
    }
}

fn tab_not_found(workbook: &str, tab: &str) -> AppError {
    SheetsError::TabNotFound {
        workbook: workbook.to_string(),
        tab: tab.to_string(),
    }
    .into()
}

#[async_trait]
impl SnapshotSource for MemorySource {
    async fn list_tabs(&self, workbook: &str) -> Result<Vec<Tab>, AppError> {
        let workbooks = self.workbooks.lock().unwrap();
        let tabs = workbooks
            .get(workbook)
            .ok_or_else(|| SheetsError::WorkbookNotFound(workbook.to_string()))?;

        Ok(tabs
            .iter()
            .enumerate()
            .map(|(index, (title, _))| Tab {
                sheet_id: index as i64,
                title: title.clone(),
                index: index as i64,
            })
            .collect())
    }

    async fn get_values(&self, workbook: &str, tab: &str) -> Result<Vec<Vec<String>>, AppError> {
        let workbooks = self.workbooks.lock().unwrap();
        workbooks
            .get(workbook)
            .and_then(|tabs| tabs.iter().find(|(title, _)| title == tab))
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| tab_not_found(workbook, tab))
    }

    async fn append_row(&self, workbook: &str, tab: &str, values: Vec<String>) -> Result<(), AppError> {
        let mut workbooks = self.workbooks.lock().unwrap();
        let rows = workbooks
            .get_mut(workbook)
            .and_then(|tabs| tabs.iter_mut().find(|(title, _)| title == tab))
            .map(|(_, rows)| rows)
            .ok_or_else(|| tab_not_found(workbook, tab))?;
        rows.push(values);
        Ok(())
    }
}
