//! Google Sheets v4 / Drive v3 client authenticated as a service account.
//!
//! Workbooks are addressed by name. The name is resolved once to a
//! spreadsheet ID with a Drive `files.list` query and cached. Access tokens
//! come from the OAuth2 JWT bearer flow: a signed RS256 assertion is
//! exchanged at the key's token URI and the token is reused until shortly
//! before it expires.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::Mutex;
use url::Url;

use crate::{
    data::sheets::SnapshotSource,
    error::{sheets::SheetsError, AppError},
    model::snapshot::Tab,
};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DRIVE_FILES_API: &str = "https://www.googleapis.com/drive/v3/files";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive.readonly";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion.
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens are refreshed this long before Google says they expire.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;
/// Error bodies are cut to this many characters.
const MAX_ERROR_BODY: usize = 500;

/// Fields of the service-account key file the client needs.
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    #[serde(default)]
    token_uri: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
    #[serde(default)]
    index: i64,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
struct AppendBody {
    values: Vec<Vec<String>>,
}

pub struct GoogleSheetsClient {
    http: reqwest::Client,
    client_email: String,
    token_uri: String,
    encoding_key: EncodingKey,
    token: Mutex<Option<CachedToken>>,
    workbook_ids: Mutex<HashMap<String, String>>,
}

impl GoogleSheetsClient {
    /// Creates a client from a service-account key.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `credentials_json` - Contents of the service-account key file
    ///
    /// # Returns
    /// - `Ok(GoogleSheetsClient)` - Key parsed; no request has been made yet
    /// - `Err(SheetsError::InvalidCredentials)` - Key JSON or private key unusable
    pub fn new(http: reqwest::Client, credentials_json: &str) -> Result<Self, AppError> {
        let key: ServiceAccountKey = serde_json::from_str(credentials_json)
            .map_err(|e| SheetsError::InvalidCredentials(e.to_string()))?;

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| SheetsError::InvalidCredentials(e.to_string()))?;

        Ok(Self {
            http,
            client_email: key.client_email,
            token_uri: key
                .token_uri
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
            encoding_key,
            token: Mutex::new(None),
            workbook_ids: Mutex::new(HashMap::new()),
        })
    }

    /// Returns a valid bearer token, exchanging a fresh assertion when needed.
    async fn access_token(&self) -> Result<String, AppError> {
        let mut cached = self.token.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref() {
            if token.expires_at > now {
                return Ok(token.value.clone());
            }
        }

        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SCOPES,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(SheetsError::from)?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let token: TokenResponse = check_status(&self.token_uri, response).await?.json().await?;

        tracing::debug!("Obtained Google access token valid for {}s", token.expires_in);

        let expires_at = now + Duration::seconds(token.expires_in - TOKEN_REFRESH_MARGIN_SECS);
        let value = token.access_token.clone();
        *cached = Some(CachedToken {
            value: token.access_token,
            expires_at,
        });

        Ok(value)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let token = self.access_token().await?;
        let response = self.http.get(url.clone()).bearer_auth(token).send().await?;

        Ok(check_status(url.as_str(), response).await?.json().await?)
    }

    /// Resolves a workbook name to its spreadsheet ID.
    ///
    /// # Returns
    /// - `Ok(String)` - Spreadsheet ID (cached after the first lookup)
    /// - `Err(SheetsError::WorkbookNotFound)` - No spreadsheet with that name is shared
    ///   with the service account
    async fn workbook_id(&self, name: &str) -> Result<String, AppError> {
        if let Some(id) = self.workbook_ids.lock().await.get(name) {
            return Ok(id.clone());
        }

        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            escape_query_literal(name),
            SPREADSHEET_MIME
        );
        let url = Url::parse_with_params(
            DRIVE_FILES_API,
            &[
                ("q", query.as_str()),
                ("fields", "files(id)"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ],
        )
        .map_err(SheetsError::from)?;

        let list: DriveFileList = self.get_json(url).await?;
        let id = list
            .files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| SheetsError::WorkbookNotFound(name.to_string()))?;

        self.workbook_ids
            .lock()
            .await
            .insert(name.to_string(), id.clone());

        Ok(id)
    }

    /// Builds `{SHEETS_API}/{id}/values/{range}{suffix}` with the range path-encoded.
    fn values_url(id: &str, tab: &str, suffix: &str) -> Result<Url, SheetsError> {
        let range = format!("{}{}", a1_sheet_range(tab), suffix);
        spreadsheet_url(&[id, "values", range.as_str()])
    }
}

#[async_trait]
impl SnapshotSource for GoogleSheetsClient {
    async fn list_tabs(&self, workbook: &str) -> Result<Vec<Tab>, AppError> {
        let id = self.workbook_id(workbook).await?;
        let mut url = spreadsheet_url(&[id.as_str()])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(sheetId,title,index)");

        let meta: SpreadsheetMeta = self.get_json(url).await?;
        let mut tabs: Vec<Tab> = meta
            .sheets
            .into_iter()
            .map(|sheet| Tab {
                sheet_id: sheet.properties.sheet_id,
                title: sheet.properties.title,
                index: sheet.properties.index,
            })
            .collect();
        tabs.sort_by_key(|tab| tab.index);

        Ok(tabs)
    }

    async fn get_values(&self, workbook: &str, tab: &str) -> Result<Vec<Vec<String>>, AppError> {
        let id = self.workbook_id(workbook).await?;
        let mut url = Self::values_url(&id, tab, "")?;
        url.query_pairs_mut()
            .append_pair("valueRenderOption", "FORMATTED_VALUE")
            .append_pair("majorDimension", "ROWS");

        let range: ValueRange = self.get_json(url).await?;

        Ok(range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn append_row(&self, workbook: &str, tab: &str, values: Vec<String>) -> Result<(), AppError> {
        let id = self.workbook_id(workbook).await?;
        let mut url = Self::values_url(&id, tab, ":append")?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let token = self.access_token().await?;
        let response = self
            .http
            .post(url.clone())
            .bearer_auth(token)
            .json(&AppendBody {
                values: vec![values],
            })
            .send()
            .await?;
        check_status(url.as_str(), response).await?;

        Ok(())
    }
}

/// Turns a non-success response into [`SheetsError::Api`].
async fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let url = url.split('?').next().unwrap_or(url).to_string();

    Err(SheetsError::Api {
        url,
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    }
    .into())
}

/// Appends path-encoded segments to the Sheets API base URL.
fn spreadsheet_url(segments: &[&str]) -> Result<Url, SheetsError> {
    let mut url = Url::parse(SHEETS_API)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .extend(segments);
    Ok(url)
}

/// Quotes a tab title as an A1 range covering the whole sheet.
fn a1_sheet_range(tab: &str) -> String {
    format!("'{}'", tab.replace('\'', "''"))
}

/// Escapes a string literal for a Drive query.
fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn cell_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests quoting of tab titles containing apostrophes.
    ///
    /// Expected: apostrophes doubled inside single quotes
    #[test]
    fn quotes_tab_titles() {
        assert_eq!(a1_sheet_range("Week 1"), "'Week 1'");
        assert_eq!(a1_sheet_range("Lord's tab"), "'Lord''s tab'");
    }

    /// Tests escaping of workbook names in Drive queries.
    ///
    /// Expected: backslash-escaped quote
    #[test]
    fn escapes_drive_query_literals() {
        assert_eq!(escape_query_literal("KvK 'S3'"), "KvK \\'S3\\'");
    }

    /// Tests the values endpoint URL for a tab with spaces.
    ///
    /// Expected: range percent-encoded as a single path segment
    #[test]
    fn builds_values_url() {
        let url = GoogleSheetsClient::values_url("abc", "Week 1", ":append").unwrap();

        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/'Week%201':append"
        );
    }

    /// Tests conversion of non-string cells.
    ///
    /// Expected: numbers rendered, nulls empty
    #[test]
    fn converts_cells_to_text() {
        assert_eq!(cell_text(serde_json::json!("1,000")), "1,000");
        assert_eq!(cell_text(serde_json::json!(42)), "42");
        assert_eq!(cell_text(serde_json::Value::Null), "");
    }

    /// Tests rejection of malformed credentials.
    ///
    /// Expected: Err(SheetsError::InvalidCredentials)
    #[test]
    fn rejects_invalid_credentials() {
        let result = GoogleSheetsClient::new(reqwest::Client::new(), "{\"client_email\":\"x\"}");

        assert!(matches!(
            result,
            Err(AppError::SheetsErr(SheetsError::InvalidCredentials(_)))
        ));
    }
}
