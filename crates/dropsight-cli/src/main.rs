use clap::{Parser, Subcommand};

mod analyze;
mod report;
mod runs;

#[derive(Debug, Parser)]
#[command(name = "dropsight")]
#[command(about = "Evaluate dropshipping products from a Google Sheet of video ad creatives")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a sheet, analyze every product, and render the ranked results.
    Analyze(analyze::AnalyzeArgs),
    /// List recent analysis runs stored in the database.
    Runs(runs::RunsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = dropsight_core::load_app_config()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze::run(&config, args).await,
        Commands::Runs(args) => runs::run(&config, args).await,
    }
}

/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
