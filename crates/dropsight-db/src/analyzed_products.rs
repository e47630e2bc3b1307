//! Database operations for `analyzed_products`.

use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;

use dropsight_core::AnalyzedProduct;

use crate::DbError;

/// A row from the `analyzed_products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnalyzedProductRow {
    pub id: i64,
    pub sheet_id: String,
    pub name: String,
    pub score: i32,
    /// The ten criterion scores as a JSONB array of `{name, score}` objects.
    pub score_breakdown: serde_json::Value,
    /// JSONB array of creative-folder links. Currently always one element.
    pub google_drive_links: serde_json::Value,
    pub insights: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upserts one analyzed product, keyed by `(sheet_id, name)`.
///
/// Re-running the pipeline for the same sheet replaces each product's scores,
/// breakdown, links, insights, and status in place. Returns the internal `id`
/// of the upserted row.
///
/// # Errors
///
/// Returns [`DbError::Encode`] if the score breakdown cannot be serialized,
/// or [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_analyzed_product(
    pool: &PgPool,
    sheet_id: &str,
    product: &AnalyzedProduct,
) -> Result<i64, DbError> {
    let score_breakdown = serde_json::to_value(&product.scores)?;
    let google_drive_links = json!([product.video_creative_folder_link]);

    let id: i64 = sqlx::query_scalar::<_, i64>(
        "INSERT INTO analyzed_products \
           (sheet_id, name, score, score_breakdown, google_drive_links, insights, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         ON CONFLICT (sheet_id, name) DO UPDATE SET \
           score = EXCLUDED.score, \
           score_breakdown = EXCLUDED.score_breakdown, \
           google_drive_links = EXCLUDED.google_drive_links, \
           insights = EXCLUDED.insights, \
           status = EXCLUDED.status, \
           updated_at = NOW() \
         RETURNING id",
    )
    .bind(sheet_id)
    .bind(&product.product_name)
    .bind(i32::from(product.total_score))
    .bind(score_breakdown)
    .bind(google_drive_links)
    .bind(&product.insights)
    .bind(product.status.to_string())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Lists all analyzed products stored for a sheet, highest score first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_products_for_sheet(
    pool: &PgPool,
    sheet_id: &str,
) -> Result<Vec<AnalyzedProductRow>, DbError> {
    let rows = sqlx::query_as::<_, AnalyzedProductRow>(
        "SELECT id, sheet_id, name, score, score_breakdown, google_drive_links, \
                insights, status, created_at, updated_at \
         FROM analyzed_products \
         WHERE sheet_id = $1 \
         ORDER BY score DESC, name ASC",
    )
    .bind(sheet_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
