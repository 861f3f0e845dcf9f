//! Google Sheets results store
//!
//! Talks to the Sheets v4 values API with a bearer token. The worksheet is
//! the source of truth shared with other sessions; reads pull the whole
//! value range, writes use the append endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, TrackerError};

use super::{SheetRow, SheetStore, COLUMN_HEADERS};

/// Base path for the Google Sheets v4 values API.
pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AppendRequest {
    values: Vec<Vec<String>>,
}

pub struct SheetsStore {
    client: Client,
    spreadsheet_id: String,
    worksheet: String,
    token: String,
}

impl SheetsStore {
    pub fn new(spreadsheet_id: &str, worksheet: &str, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            spreadsheet_id: spreadsheet_id.to_string(),
            worksheet: worksheet.to_string(),
            token,
        })
    }

    fn values_url(&self) -> String {
        format!(
            "{SHEETS_BASE_URL}/{}/values/{}",
            self.spreadsheet_id, self.worksheet
        )
    }

    async fn fetch_values(&self) -> Result<Vec<Vec<String>>> {
        let res = self
            .client
            .get(self.values_url())
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<ValueRange>()
            .await?;

        Ok(res.values)
    }

    async fn append_cells(&self, cells: Vec<String>) -> Result<()> {
        let url = format!("{}:append", self.values_url());
        let body = AppendRequest {
            values: vec![cells],
        };

        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[async_trait]
impl SheetStore for SheetsStore {
    async fn ensure_schema(&self) -> Result<()> {
        let values = self.fetch_values().await?;
        if values.is_empty() {
            self.append_cells(COLUMN_HEADERS.iter().map(|h| h.to_string()).collect())
                .await?;
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<SheetRow>> {
        rows_from_values(self.fetch_values().await?)
    }

    async fn append_row(&self, row: &SheetRow) -> Result<()> {
        self.append_cells(row.to_cells().to_vec()).await
    }
}

/// Turn a raw value range into rows: an empty worksheet yields no rows, a
/// worksheet whose first row disagrees with [`COLUMN_HEADERS`] is rejected.
pub(crate) fn rows_from_values(values: Vec<Vec<String>>) -> Result<Vec<SheetRow>> {
    let mut rows = values.into_iter();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    if header != COLUMN_HEADERS {
        return Err(TrackerError::HeaderMismatch {
            expected: COLUMN_HEADERS.iter().map(|h| h.to_string()).collect(),
            found: header,
        });
    }

    Ok(rows.map(|cells| SheetRow::from_cells(&cells)).collect())
}
