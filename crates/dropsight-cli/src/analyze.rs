//! The `analyze` command: the end-to-end pipeline driver.
//!
//! Validate the sheet URL, fetch and decode the rows, analyze every product
//! in batches, persist best-effort, then render (and optionally export) the
//! requested view. Only an invalid URL or a failed fetch aborts the run;
//! everything downstream degrades to estimated scores.

use std::path::PathBuf;

use dropsight_analyzer::{
    analyze_all, HttpBackend, LocalBackend, ThreadRngScores, FALLBACK_INSIGHT_PIPELINE,
    FALLBACK_INSIGHT_SERVICE, FALLBACK_INSIGHT_TRANSPORT,
};
use dropsight_core::{AnalyzedProduct, AppConfig};
use dropsight_sheets::{extract_sheet_id, parse_rows, SheetsClient};

use crate::report::{self, SortOrder};

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Shareable Google Sheets URL with product rows.
    pub sheet_url: String,

    /// Case-insensitive substring filter on product name.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort order for the rendered results.
    #[arg(long, value_enum, default_value_t = SortOrder::Highest)]
    pub sort: SortOrder,

    /// 1-based page to display.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page; unset shows everything.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Write the displayed rows to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Skip persistence even when DATABASE_URL is configured.
    #[arg(long)]
    pub no_persist: bool,
}

pub async fn run(config: &AppConfig, args: AnalyzeArgs) -> anyhow::Result<()> {
    let sheet_id = extract_sheet_id(&args.sheet_url)?;

    let client = SheetsClient::with_base_url(
        &config.sheets_api_key,
        config.request_timeout_secs,
        &config.sheets_base_url,
    )?;
    let values = client.fetch_values(&sheet_id, &config.sheets_range).await?;

    let stubs = parse_rows(&values.values, config.sheet_columns);
    if stubs.is_empty() {
        println!(
            "No valid product rows found in the sheet. Expected a header row, \
             then one product per row with a non-empty name and creative folder link."
        );
        return Ok(());
    }

    tracing::info!(
        sheet = %sheet_id,
        products = stubs.len(),
        batch_size = config.batch_size,
        "analyzing products"
    );

    let records = match config.analyzer_url.as_deref() {
        Some(url) => {
            let backend = HttpBackend::new(url, config.analyzer_timeout_secs)?;
            analyze_all(&backend, &ThreadRngScores, &stubs, config.batch_size).await
        }
        None => {
            tracing::debug!("no analyzer URL configured, using local seeded analysis");
            analyze_all(&LocalBackend, &ThreadRngScores, &stubs, config.batch_size).await
        }
    };

    if args.no_persist {
        tracing::debug!("--no-persist set, skipping persistence");
    } else {
        persist_best_effort(config, &sheet_id, &records).await;
    }

    let view = report::apply_view(
        &records,
        args.search.as_deref(),
        args.sort,
        args.page,
        args.page_size,
    );

    println!("{}", report::render_table(&view));
    println!(
        "{} of {} analyzed products shown",
        view.len(),
        records.len()
    );

    if let Some(path) = args.export {
        std::fs::write(&path, report::to_csv(&view))?;
        println!("Exported {} rows to {}", view.len(), path.display());
    }

    Ok(())
}

/// Returns `true` if the record settled on fallback scores rather than a
/// real analysis response.
fn is_estimated(record: &AnalyzedProduct) -> bool {
    record.insights == FALLBACK_INSIGHT_SERVICE
        || record.insights == FALLBACK_INSIGHT_TRANSPORT
        || record.insights == FALLBACK_INSIGHT_PIPELINE
}

/// Persists the analyzed set, never failing the pipeline: every database
/// error is logged at warn and swallowed, and the rendered results are
/// unaffected.
async fn persist_best_effort(config: &AppConfig, sheet_id: &str, records: &[AnalyzedProduct]) {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::debug!("DATABASE_URL not set, results not persisted");
        return;
    };

    let pool_config = dropsight_db::PoolConfig::from_app_config(config);
    let pool = match dropsight_db::connect_pool(database_url, pool_config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "database connection failed, results not persisted");
            return;
        }
    };

    if let Err(e) = dropsight_db::run_migrations(&pool).await {
        tracing::warn!(error = %e, "migrations failed, results not persisted");
        return;
    }

    let run_id = match dropsight_db::create_analysis_run(&pool, sheet_id).await {
        Ok(run) => match dropsight_db::start_analysis_run(&pool, run.id).await {
            Ok(()) => Some(run.id),
            Err(e) => {
                tracing::warn!(error = %e, "could not start analysis run record");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "could not create analysis run record");
            None
        }
    };

    let mut failed_upserts = 0usize;
    for record in records {
        if let Err(e) = dropsight_db::upsert_analyzed_product(&pool, sheet_id, record).await {
            tracing::warn!(
                product = %record.product_name,
                error = %e,
                "failed to persist analyzed product"
            );
            failed_upserts += 1;
        }
    }

    if let Some(id) = run_id {
        let estimated = records.iter().filter(|r| is_estimated(r)).count();
        let total = i32::try_from(records.len()).unwrap_or(i32::MAX);
        let estimated = i32::try_from(estimated).unwrap_or(i32::MAX);

        let result = if failed_upserts == records.len() && !records.is_empty() {
            dropsight_db::fail_analysis_run(&pool, id, "all product upserts failed").await
        } else {
            dropsight_db::complete_analysis_run(&pool, id, total, estimated).await
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "could not finalize analysis run record");
        }
    }

    tracing::info!(
        sheet = %sheet_id,
        persisted = records.len() - failed_upserts,
        failed = failed_upserts,
        "persistence pass finished"
    );
}
