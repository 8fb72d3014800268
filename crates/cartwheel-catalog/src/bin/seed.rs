//! # Seed Data Generator
//!
//! Writes a sample catalog file for development.
//!
//! ## Usage
//! ```bash
//! # Demo items plus 500 generated products (default)
//! cargo run -p cartwheel-catalog --bin seed
//!
//! # Generate custom amount
//! cargo run -p cartwheel-catalog --bin seed -- --count 10000
//!
//! # Specify file path, replacing an existing file
//! cargo run -p cartwheel-catalog --bin seed -- --out ./prices.dat --force
//! ```
//!
//! The six checkout demo items are always written first, so the checkout
//! app finds every item in its cart.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cartwheel_catalog::sample::sample_items;
use cartwheel_catalog::{Catalog, CatalogError, CatalogResult};

/// Write a sample grocery item catalog
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "cartwheel seed data generator", long_about = None)]
struct Args {
    /// Number of products to generate in addition to the demo items
    #[arg(short, long, default_value_t = 500)]
    count: usize,

    /// Catalog file to write
    #[arg(short, long, default_value = "Sample_GroceryItem_Database.dat")]
    out: PathBuf,

    /// Replace the file if it already exists
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Seed failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CatalogResult<()> {
    if args.out.exists() && !args.force {
        return Err(CatalogError::AlreadyExists {
            path: args.out.clone(),
        });
    }

    let catalog = Catalog::from_items(sample_items(args.count));

    let file = File::create(&args.out).map_err(|e| CatalogError::write(&args.out, e))?;
    catalog
        .write_to(BufWriter::new(file))
        .map_err(|e| CatalogError::write(&args.out, e))?;

    info!(
        path = %args.out.display(),
        items = catalog.len(),
        "Catalog written"
    );

    // read it back the way checkout will
    let reread = Catalog::load(&args.out)?;
    info!(items = reread.len(), "Catalog verified");

    Ok(())
}
