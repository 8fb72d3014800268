//! # cartwheel checkout
//!
//! ```bash
//! # Expected total on the command line
//! checkout 25.30
//!
//! # Prompted for on stdin, JSON receipt, no transfer frames
//! checkout --json --no-trace
//!
//! # Specific catalog file
//! CARTWHEEL_CATALOG=./prices.dat checkout 25.30
//! ```
//!
//! Failures are logged and the process still exits cleanly.

use std::io;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cartwheel_catalog::Catalog;
use cartwheel_checkout::config::CheckoutConfig;
use cartwheel_checkout::{run, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = checkout(&cli) {
        error!("{e:#}");
    }
}

fn checkout(cli: &Cli) -> anyhow::Result<()> {
    let config = CheckoutConfig::load()?.with_cli(cli)?;
    info!(
        trace = config.trace,
        currency = %config.currency,
        tolerance = config.total_tolerance,
        "Configuration loaded"
    );

    let catalog = Catalog::shared(&config.catalog);
    info!(items = catalog.size(), "Catalog ready");

    run(
        &config,
        catalog,
        cli.expected.as_deref(),
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )?;

    Ok(())
}
