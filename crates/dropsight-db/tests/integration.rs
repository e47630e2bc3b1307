//! Offline unit tests for dropsight-db pool configuration and row types.
//! These tests do not require a live database connection.

use chrono::Utc;
use dropsight_core::{AppConfig, ColumnOrder};
use dropsight_db::{AnalysisRunRow, AnalyzedProductRow, PoolConfig};
use uuid::Uuid;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: Some("postgres://example".to_string()),
        log_level: "info".to_string(),
        sheets_api_key: "key".to_string(),
        sheets_base_url: "https://sheets.googleapis.com".to_string(),
        sheets_range: "Sheet1!A:B".to_string(),
        sheet_columns: ColumnOrder::NameThenLink,
        analyzer_url: None,
        analyzer_timeout_secs: 30,
        batch_size: 5,
        request_timeout_secs: 30,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn pool_config_defaults_are_sane() {
    let config = PoolConfig::default();
    assert!(config.max_connections >= config.min_connections);
    assert!(config.acquire_timeout_secs > 0);
}

/// Compile-time smoke test: confirm that [`AnalysisRunRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn analysis_run_row_has_expected_fields() {
    let row = AnalysisRunRow {
        id: 1,
        public_id: Uuid::new_v4(),
        sheet_id: "sheet-1".to_string(),
        status: "queued".to_string(),
        started_at: None,
        completed_at: None,
        products_total: 0,
        products_estimated: 0,
        error_message: None,
        created_at: Utc::now(),
    };
    assert_eq!(row.status, "queued");
}

/// Compile-time smoke test for [`AnalyzedProductRow`].
#[test]
fn analyzed_product_row_has_expected_fields() {
    let row = AnalyzedProductRow {
        id: 1,
        sheet_id: "sheet-1".to_string(),
        name: "Widget".to_string(),
        score: 72,
        score_breakdown: serde_json::json!([{"name": "Trend Status", "score": 7}]),
        google_drive_links: serde_json::json!(["https://drive.google.com/folder/a"]),
        insights: "Good product with moderate potential.".to_string(),
        status: "complete".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    assert_eq!(row.score, 72);
    assert!(row.google_drive_links.is_array());
}
