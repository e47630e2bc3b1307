//! HTTP client for the Google Sheets values API.
//!
//! Wraps `reqwest` with sheet-specific error handling and typed response
//! deserialization. Only the values endpoint is used: one GET per sheet,
//! returning the raw cell grid for the configured A1 range.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::SheetsError;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Response body of the values endpoint. `values` is absent for an empty
/// sheet, which callers must treat as zero rows rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetValues {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Client for the Google Sheets values API.
///
/// Use [`SheetsClient::new`] for production or
/// [`SheetsClient::with_base_url`] to point at a mock server in tests.
pub struct SheetsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SheetsClient {
    /// Creates a client pointed at the production Sheets API.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SheetsError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dropsight/0.1 (product-analysis)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the raw cell grid for `sheet_id` over the given A1 `range`
    /// (e.g. `"Sheet1!A:B"`).
    ///
    /// # Errors
    ///
    /// - [`SheetsError::Http`] on network failure.
    /// - [`SheetsError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SheetsError::Deserialize`] if the body is not the expected shape.
    pub async fn fetch_values(
        &self,
        sheet_id: &str,
        range: &str,
    ) -> Result<SheetValues, SheetsError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?key={}",
            self.base_url, sheet_id, range, self.api_key
        );

        tracing::debug!(sheet_id, range, "fetching sheet values");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                url: format!("{}/v4/spreadsheets/{}/values/{}", self.base_url, sheet_id, range),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SheetsError::Deserialize {
            context: format!("fetch_values(sheet_id={sheet_id})"),
            source: e,
        })
    }
}
