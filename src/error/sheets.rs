use thiserror::Error;

/// Failures talking to Google Sheets / Drive.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// The service-account key in `CREDENTIALS_JSON` is unusable.
    #[error("Invalid Google credentials: {0}")]
    InvalidCredentials(String),

    /// Signing the service-account assertion failed.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Google answered with a non-success status.
    #[error("Google API request to {url} failed with status {status}: {body}")]
    Api {
        /// Request URL without query string
        url: String,
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// A request URL could not be built.
    #[error("Invalid Google API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No spreadsheet with this name is shared with the service account.
    #[error("Spreadsheet '{0}' not found")]
    WorkbookNotFound(String),

    /// The workbook has no tab with this title.
    #[error("Tab '{tab}' not found in spreadsheet '{workbook}'")]
    TabNotFound {
        /// Workbook name
        workbook: String,
        /// Requested tab title
        tab: String,
    },
}
