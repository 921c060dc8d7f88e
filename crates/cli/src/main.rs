//! Nexo CLI - Storefront data file tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate the built-in datasets
//! nexo-cli validate
//!
//! # Validate data files before pointing the storefront at them
//! nexo-cli validate --catalog data/catalog.json --neighborhoods data/barrios.json
//!
//! # List catalog categories with product counts
//! nexo-cli categories --catalog data/catalog.json
//! ```
//!
//! # Commands
//!
//! - `validate` - Load every dataset and cross-check saved addresses
//! - `categories` - List categories in pill-bar order
//!
//! Paths default to the same `STOREFRONT_*_PATH` variables the storefront
//! reads, and to the built-in datasets when those are unset.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nexo_storefront::config::DataSources;

mod commands;

#[derive(Parser)]
#[command(name = "nexo-cli")]
#[command(author, version, about = "Nexo Ferretería CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and cross-check the storefront datasets
    Validate {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// List catalog categories with product counts
    Categories {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Product catalog JSON
    #[arg(long, env = "STOREFRONT_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// City → neighborhoods JSON
    #[arg(long, env = "STOREFRONT_NEIGHBORHOODS_PATH")]
    neighborhoods: Option<PathBuf>,

    /// Saved addresses JSON
    #[arg(long, env = "STOREFRONT_ADDRESSES_PATH")]
    addresses: Option<PathBuf>,
}

impl From<SourceArgs> for DataSources {
    fn from(args: SourceArgs) -> Self {
        Self {
            catalog_path: args.catalog,
            neighborhoods_path: args.neighborhoods,
            addresses_path: args.addresses,
        }
    }
}

fn main() {
    // Pick up STOREFRONT_* paths from .env like the storefront does
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Validate { sources } => commands::validate::run(&sources.into())?,
        Commands::Categories { sources } => commands::categories::run(&sources.into())?,
    }
    Ok(())
}
