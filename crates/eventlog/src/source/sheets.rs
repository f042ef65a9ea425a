//! Google Sheets row source.
//!
//! Reads columns `A` to `H` through the Sheets values API:
//!
//! ```text
//! GET {base}/v4/spreadsheets/{sheet_id}/values/{range}
//! x-goog-api-key: {api_key}
//! ```
//!
//! The key only ever travels in that header, never in a request URL, and
//! errors are stringified without their URL.
//!
//! Row 1 of the sheet is the header, so data position `n` lives on sheet
//! row `n + 2`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use eventlog_core::event::{raw_row_number, RawRow, HEADER_ROWS};
use eventlog_core::storage::{Result, RowSource, SourceError};

const FIRST_COLUMN: &str = "A";
const LAST_COLUMN: &str = "H";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Marker in the 400 response the API sends for rows past the sheet grid.
const GRID_LIMIT_MESSAGE: &str = "exceeds grid limits";

/// Body of a `spreadsheets.values.get` response.
///
/// `values` is omitted entirely when the range holds no data.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Row source reading a spreadsheet through the Google Sheets API.
#[derive(Debug, Clone)]
pub struct SheetsRowSource {
    client: reqwest::Client,
    base_url: Url,
    sheet_id: String,
    api_key: String,
    sheet_name: Option<String>,
}

impl SheetsRowSource {
    /// Creates a new Sheets row source.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, normally `https://sheets.googleapis.com`
    /// * `sheet_id` - The spreadsheet ID
    /// * `api_key` - API key with read access to the spreadsheet
    /// * `timeout` - Upper bound for each request
    pub fn new(
        base_url: Url,
        sheet_id: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "Sheets API URL cannot be used as a base: {base_url}"
        );

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            sheet_id: sheet_id.into(),
            api_key: api_key.into(),
            sheet_name: None,
        })
    }

    /// Reads from the named tab instead of the first one.
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    /// Builds an A1 range, quoting the tab name when one is set.
    fn range(&self, cells: &str) -> String {
        match &self.sheet_name {
            Some(name) => format!("'{}'!{cells}", name.replace('\'', "''")),
            None => cells.to_string(),
        }
    }

    fn values_url(&self, range: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "v4",
                "spreadsheets",
                self.sheet_id.as_str(),
                "values",
                range,
            ]);
        }
        url
    }

    async fn get_values(&self, range: &str) -> Result<Vec<RawRow>> {
        tracing::trace!(range, "Requesting sheet values");

        let response = self
            .client
            .get(self.values_url(range))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SourceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ValueRange = response.json().await.map_err(|err| {
            if err.is_decode() {
                SourceError::InvalidResponse(err.without_url().to_string())
            } else {
                transport_error(err)
            }
        })?;

        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }
}

#[async_trait]
impl RowSource for SheetsRowSource {
    async fn fetch_all_rows(&self) -> Result<Vec<RawRow>> {
        let range = self.range(&format!("{FIRST_COLUMN}:{LAST_COLUMN}"));
        let rows = self.get_values(&range).await?;

        Ok(rows.into_iter().skip(HEADER_ROWS).collect())
    }

    async fn fetch_row(&self, position: usize) -> Result<Option<RawRow>> {
        let Some(row_number) = raw_row_number(position) else {
            return Ok(None);
        };
        let range = self.range(&format!(
            "{FIRST_COLUMN}{row_number}:{LAST_COLUMN}{row_number}"
        ));

        match self.get_values(&range).await {
            Ok(rows) => Ok(rows.into_iter().next().filter(|row| !row.is_empty())),
            Err(SourceError::Status { status: 400, message })
                if message.contains(GRID_LIMIT_MESSAGE) =>
            {
                tracing::debug!(position, row_number, "Row is past the sheet grid");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn transport_error(err: reqwest::Error) -> SourceError {
    let err = err.without_url();
    if err.is_timeout() {
        SourceError::Unavailable(format!("request timed out: {err}"))
    } else {
        SourceError::Unavailable(err.to_string())
    }
}

/// Formatted values arrive as strings; anything else is rendered as JSON text.
fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
