//! Sheet URL validation and identifier extraction.

use regex::Regex;

use crate::error::SheetsError;

/// Marker every shareable Google Sheets URL carries.
const SHEETS_URL_MARKER: &str = "docs.google.com/spreadsheets";

/// Extracts the sheet identifier from a shareable Google Sheets URL.
///
/// The URL must contain the `docs.google.com/spreadsheets` marker and a
/// `/spreadsheets/d/<id>` segment where `<id>` matches `[A-Za-z0-9_-]+`.
/// Validation happens before any network call is attempted.
///
/// # Errors
///
/// Returns [`SheetsError::InvalidSheetUrl`] if the URL does not look like a
/// Google Sheets reference or has no extractable identifier.
pub fn extract_sheet_id(sheet_url: &str) -> Result<String, SheetsError> {
    if !sheet_url.contains(SHEETS_URL_MARKER) {
        return Err(SheetsError::InvalidSheetUrl {
            url: sheet_url.to_owned(),
            reason: "not a Google Sheets URL".to_owned(),
        });
    }

    let re = Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)").expect("valid sheet id regex");
    let id = re
        .captures(sheet_url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| SheetsError::InvalidSheetUrl {
            url: sheet_url.to_owned(),
            reason: "no sheet identifier segment found".to_owned(),
        })?;

    Ok(id)
}

#[cfg(test)]
#[path = "url_test.rs"]
mod tests;
