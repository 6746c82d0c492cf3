use crate::{
    data::sheets::SnapshotSource,
    error::AppError,
    model::event::{ReminderEvent, EVENT_SHEET_HEADER},
};

/// Events parsed from the events sheet.
#[derive(Debug, Default)]
pub struct EventSheet {
    pub events: Vec<ReminderEvent>,
    /// Rejected rows as (1-based sheet row, reason).
    pub rejected: Vec<(usize, String)>,
}

/// Reads and appends rows of the events sheet.
pub struct EventRepository<'a> {
    source: &'a dyn SnapshotSource,
    workbook: &'a str,
    tab: &'a str,
}

impl<'a> EventRepository<'a> {
    pub fn new(source: &'a dyn SnapshotSource, workbook: &'a str, tab: &'a str) -> Self {
        Self {
            source,
            workbook,
            tab,
        }
    }

    /// Reads every event row.
    ///
    /// A header row is skipped when its first cell names the event name
    /// column. Blank rows are ignored; other unreadable rows are returned in
    /// [`EventSheet::rejected`] so the caller can log them.
    ///
    /// # Returns
    /// - `Ok(EventSheet)` - Parsed events and rejected rows
    /// - `Err(AppError)` - Spreadsheet request failed
    pub async fn get_all(&self) -> Result<EventSheet, AppError> {
        let rows = self.source.get_values(self.workbook, self.tab).await?;
        let mut sheet = EventSheet::default();

        for (position, row) in rows.iter().enumerate() {
            if position == 0 && is_header(row) {
                continue;
            }
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            match ReminderEvent::from_row(row) {
                Ok(event) => sheet.events.push(event),
                Err(reason) => sheet.rejected.push((position + 1, reason)),
            }
        }

        Ok(sheet)
    }

    /// Appends an event as a new row.
    ///
    /// An empty sheet gets the header row first.
    pub async fn append(&self, event: &ReminderEvent) -> Result<(), AppError> {
        let rows = self.source.get_values(self.workbook, self.tab).await?;
        if rows.is_empty() {
            let header = EVENT_SHEET_HEADER.iter().map(|h| h.to_string()).collect();
            self.source.append_row(self.workbook, self.tab, header).await?;
        }

        self.source
            .append_row(self.workbook, self.tab, event.to_row())
            .await
    }
}

fn is_header(row: &[String]) -> bool {
    row.first()
        .is_some_and(|cell| cell.trim().eq_ignore_ascii_case(EVENT_SHEET_HEADER[0]))
}
