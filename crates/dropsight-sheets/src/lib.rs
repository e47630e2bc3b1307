//! Google Sheet ingestion for dropsight.
//!
//! Validates sheet URLs, fetches tabular values through the Sheets values
//! API, and decodes raw rows into typed [`dropsight_core::ProductStub`]
//! records. Malformed rows are dropped before they enter the pipeline;
//! only an invalid source URL is a hard error.

pub mod client;
pub mod error;
pub mod parse;
pub mod url;

pub use client::{SheetValues, SheetsClient};
pub use error::SheetsError;
pub use parse::parse_rows;
pub use url::extract_sheet_id;
