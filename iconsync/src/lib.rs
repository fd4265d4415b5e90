use anyhow::Context;
use clap::Parser;
use iconfetcher::CatalogClient;
use iconstore::config::{
    DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_STYLE_SUFFIX, StoreConfig, SyncConfig,
};
use iconstore::models::SyncReport;
use iconstore::IconStore;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Runs the command line interface for the icon sync pipeline.
pub async fn run_cli() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let report = run_sync(cli).await?;
    info!(
        fetched = report.fetched,
        skipped = report.skipped_missing_name + report.skipped_missing_file,
        prepared = report.prepared,
        "icon sync finished"
    );
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    name = "iconsync",
    about = "Reconcile the remote icon catalog with local SVGs and publish records to the vector store."
)]
pub struct Cli {
    /// Remote catalog endpoint; defaults to the Hugeicons API.
    #[arg(long, env = "ICON_CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Local folder where the SVGs already exist.
    #[arg(long, env = "ICON_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File-name style suffix matching the downloaded files.
    #[arg(long, env = "ICON_STYLE_SUFFIX", default_value = DEFAULT_STYLE_SUFFIX)]
    pub style_suffix: String,

    /// Records per bulk insert call.
    #[arg(long, env = "ICON_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

/// Assembles the pipeline from CLI arguments plus environment-provided
/// store credentials and runs one full pass.
pub async fn run_sync(cli: Cli) -> anyhow::Result<SyncReport> {
    let store_config =
        StoreConfig::from_env().context("failed to load vector store configuration")?;
    let sync_config = SyncConfig {
        output_dir: cli.output_dir,
        style_suffix: cli.style_suffix,
        chunk_size: cli.chunk_size,
    };

    let client = match &cli.catalog_url {
        Some(endpoint) => CatalogClient::with_endpoint(endpoint),
        None => CatalogClient::new(),
    };
    let storage = IconStore::new(store_config, sync_config);

    storage.synchronizer.sync(&client).await.map_err(Into::into)
}

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
