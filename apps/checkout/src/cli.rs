//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Move groceries off a broken cart and check the receipt total
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "checkout")]
#[command(about = "cartwheel checkout - ring up the demo cart and verify the total", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Expected total; prompted for on stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub expected: Option<String>,

    /// Catalog file to use instead of probing
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory to probe for catalog files
    #[arg(long, value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Don't print the cart transfer frames
    #[arg(long)]
    pub no_trace: bool,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,

    /// Currency symbol for the total line
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Absolute tolerance when comparing the total
    #[arg(long, value_name = "AMOUNT")]
    pub tolerance: Option<f64>,
}
