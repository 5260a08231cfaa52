//! # Acme Pricing CLI
//!
//! Prices carts against the Acme catalog, offer and delivery rules.
//!
//! ## Usage
//! ```bash
//! # Reference baskets
//! acme-pricing demo
//!
//! # One cart
//! acme-pricing total R01 R01 B01
//!
//! # Custom rules, JSON breakdown
//! acme-pricing --config pricing.toml --json total R01 G01
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging, stderr)
//! 3. Load configuration (defaults → file → env)
//! 4. Build catalog and rules
//! 5. Run the command, print its output to stdout

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::PricingConfig;

/// Acme pricing - cart totals with offers and delivery fees
#[derive(Parser)]
#[command(name = "acme-pricing")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print price breakdowns as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Pricing config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the four reference baskets
    Demo,

    /// Price a cart made of the given product codes
    Total {
        /// Product codes, one per unit (e.g. R01 R01 B01)
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// List the catalog
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = PricingConfig::load(cli.config.as_deref())?;
    debug!(products = config.products.len(), "Configuration loaded");
    let rules = config.build()?;

    let output = match &cli.command {
        Commands::Demo => commands::demo(&rules, cli.json)?,
        Commands::Total { codes } => commands::total(&rules, codes, cli.json)?,
        Commands::Catalog => commands::catalog(&rules, cli.json)?,
    };
    println!("{output}");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for the acme crates
/// - Default: warnings only, so stdout carries just the totals
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,acme_core=debug,acme_pricing=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
