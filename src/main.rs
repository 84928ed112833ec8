use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use store_catalog::{run_demo, CatalogConfig, CatalogLoader, CONFIG_FILE, VERSION};

fn main() -> Result<()> {
    init_logging();

    run_demo_mode()?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the catalog listing
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_demo_mode() -> Result<()> {
    info!(version = VERSION, "starting store catalog");

    // 1. Configuration (defaults when catalog.json is absent)
    let config = CatalogConfig::load_or_default(Path::new(CONFIG_FILE))
        .context("Failed to load configuration")?;

    // 2. Load the three sources
    let (mut catalog, report) = CatalogLoader::from_config(&config)
        .load_with_report()
        .context("Failed to load catalog")?;
    if report.is_clean() {
        info!("{}", report.summary());
    } else {
        warn!("{}", report.summary());
    }

    // 3. Demo: list, then sort by id, name, price
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut catalog, config.output, &mut out).context("Failed to print catalog")?;
    out.flush()?;

    Ok(())
}
