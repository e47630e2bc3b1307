/// Which spreadsheet column holds the product name vs. the creative link.
///
/// The two historical sheet layouts disagree, so the mapping is configuration
/// rather than a hardcoded assumption. `NameThenLink` (column A = product
/// name, column B = creative folder link) is the canonical default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrder {
    /// Column A = product name, column B = creative folder link.
    NameThenLink,
    /// Column A = creative folder link, column B = product name (legacy).
    LinkThenName,
}

#[derive(Clone)]
pub struct AppConfig {
    /// Postgres connection string. `None` disables persistence; the pipeline
    /// still runs and renders results.
    pub database_url: Option<String>,
    pub log_level: String,
    /// Google Sheets API key, sent as the `key` query parameter.
    pub sheets_api_key: String,
    /// Base URL of the tabular-values API.
    pub sheets_base_url: String,
    /// A1 range fetched from the first sheet.
    pub sheets_range: String,
    pub sheet_columns: ColumnOrder,
    /// Video analysis service endpoint. `None` selects the local seeded
    /// backend instead of a remote call.
    pub analyzer_url: Option<String>,
    pub analyzer_timeout_secs: u64,
    /// Number of analysis calls in flight per batch.
    pub batch_size: usize,
    pub request_timeout_secs: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "[redacted]"))
            .field("log_level", &self.log_level)
            .field("sheets_api_key", &"[redacted]")
            .field("sheets_base_url", &self.sheets_base_url)
            .field("sheets_range", &self.sheets_range)
            .field("sheet_columns", &self.sheet_columns)
            .field("analyzer_url", &self.analyzer_url)
            .field("analyzer_timeout_secs", &self.analyzer_timeout_secs)
            .field("batch_size", &self.batch_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
