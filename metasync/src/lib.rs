//! Command line interface for the blob metadata sync.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use core_dataset::{load_descriptions, load_mappings, load_spheres};
use core_sync::MetadataSyncJob;
use provider_firebase::{FirebaseStorageConnector, ReqwestTransport};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Sync descriptions and sphere coordinates onto storage blob metadata.
#[derive(Parser)]
#[command(name = "metasync", author, version, about)]
pub struct Cli {
    /// Path to the description dataset (JSON array of {id, description})
    #[arg(long, default_value = "public/meta.json")]
    pub meta: PathBuf,

    /// Path to the sphere-position dataset (JSON object of key -> [x, y, z])
    #[arg(long, default_value = "public/sphere.json")]
    pub sphere: PathBuf,

    /// Path to the mapping CSV (columns imgur_url, firebase_filename)
    #[arg(long, default_value = "mapping.csv")]
    pub mapping: PathBuf,

    /// Firebase Storage bucket name
    #[arg(long, env = "FIREBASE_STORAGE_BUCKET")]
    pub bucket: String,

    /// OAuth 2.0 bearer token for the storage API
    #[arg(long, env = "FIREBASE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Tracing filter override (e.g. "core_sync=debug")
    #[arg(long, env = "METASYNC_LOG")]
    pub log_filter: Option<String>,
}

/// Run the sync end to end.
///
/// Startup failures (unreadable inputs, connector initialization) propagate
/// out and terminate the process non-zero before any row is touched. A run
/// that completes always succeeds, however many rows were skipped.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let descriptions = load_descriptions(&cli.meta)
        .with_context(|| format!("loading descriptions from {}", cli.meta.display()))?;
    let spheres = load_spheres(&cli.sphere)
        .with_context(|| format!("loading sphere positions from {}", cli.sphere.display()))?;
    let rows = load_mappings(&cli.mapping)
        .with_context(|| format!("loading mappings from {}", cli.mapping.display()))?;

    info!(count = descriptions.len(), "Loaded descriptions");
    info!(count = spheres.len(), "Loaded sphere positions");
    info!(count = rows.len(), "Loaded URL-to-filename mappings");

    let transport = Arc::new(ReqwestTransport::new().context("building HTTP transport")?);
    let connector = FirebaseStorageConnector::new(transport, &cli.bucket, cli.access_token)
        .context("initializing storage connector")?;
    info!(bucket = %cli.bucket, "Storage connector initialized");

    let job = MetadataSyncJob::new(descriptions, spheres, Arc::new(connector));
    let report = job.run(&rows).await;

    info!(
        updated = report.updated,
        skipped = report.skipped,
        "Successfully updated {} files, skipped or failed {}",
        report.updated,
        report.skipped
    );
    Ok(())
}

fn init_tracing(filter_override: Option<&str>) {
    let filter = match filter_override {
        Some(custom) => EnvFilter::new(custom),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn")),
    };

    fmt().with_env_filter(filter).init();
}
