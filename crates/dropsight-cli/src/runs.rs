//! The `runs` command: list recent analysis runs from the database.

use dropsight_core::AppConfig;

#[derive(Debug, clap::Args)]
pub struct RunsArgs {
    /// Maximum number of runs to show.
    #[arg(long, default_value_t = 20)]
    pub limit: i64,
}

pub async fn run(config: &AppConfig, args: RunsArgs) -> anyhow::Result<()> {
    let Some(database_url) = config.database_url.as_deref() else {
        anyhow::bail!("DATABASE_URL is not set; the runs command requires a database");
    };

    let pool_config = dropsight_db::PoolConfig::from_app_config(config);
    let pool = dropsight_db::connect_pool(database_url, pool_config).await?;
    dropsight_db::run_migrations(&pool).await?;

    let rows = dropsight_db::list_recent_runs(&pool, args.limit).await?;
    if rows.is_empty() {
        println!("No analysis runs recorded yet.");
        return Ok(());
    }

    println!(
        "{:<38} {:<24} {:<10} {:>8} {:>10}  {}",
        "Run", "Sheet", "Status", "Products", "Estimated", "Created"
    );
    for row in rows {
        println!(
            "{:<38} {:<24} {:<10} {:>8} {:>10}  {}",
            row.public_id,
            row.sheet_id,
            row.status,
            row.products_total,
            row.products_estimated,
            row.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
