use super::*;

#[test]
fn extracts_id_from_standard_share_url() {
    let id = extract_sheet_id(
        "https://docs.google.com/spreadsheets/d/1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms/edit#gid=0",
    )
    .unwrap();
    assert_eq!(id, "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms");
}

#[test]
fn extracts_id_with_underscores_and_hyphens() {
    let id = extract_sheet_id("https://docs.google.com/spreadsheets/d/abc_DEF-123/edit").unwrap();
    assert_eq!(id, "abc_DEF-123");
}

#[test]
fn rejects_non_sheets_url() {
    let err = extract_sheet_id("https://example.com/spreadsheets/d/abc123").unwrap_err();
    assert!(
        matches!(err, SheetsError::InvalidSheetUrl { .. }),
        "expected InvalidSheetUrl, got: {err:?}"
    );
}

#[test]
fn rejects_sheets_url_without_id_segment() {
    let err = extract_sheet_id("https://docs.google.com/spreadsheets/u/0/").unwrap_err();
    assert!(
        matches!(err, SheetsError::InvalidSheetUrl { ref reason, .. } if reason.contains("identifier")),
        "expected missing-identifier error, got: {err:?}"
    );
}

#[test]
fn rejects_empty_string() {
    assert!(extract_sheet_id("").is_err());
}
