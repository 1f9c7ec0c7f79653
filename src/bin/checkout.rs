//! Checkout CLI
//!
//! Prices the SKUs given on the command line and prints a receipt.
//!
//! Repeat a SKU to request more than one unit:
//!
//! ```text
//! checkout -c fixtures/data.json 120P90 120P90 120P90 120P90
//! ```

use std::{
    io::{self, Write},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use thiserror::Error;

use checkout::prelude::*;

/// Arguments for the checkout CLI
#[derive(Debug, Parser)]
#[command(name = "checkout", about = "Price a checkout basket", long_about = None)]
struct Args {
    /// Catalog JSON file
    #[arg(short, long, default_value = "data.json")]
    catalog: PathBuf,

    /// Promotions YAML file; the standard promotions are used when omitted
    #[arg(short, long)]
    promotions: Option<PathBuf>,

    /// Catalog currency (GBP, USD, EUR)
    #[arg(long, default_value = "USD")]
    currency: String,

    /// SKUs to price
    sku: Vec<String>,
}

/// CLI errors
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Promotions(#[from] PromotionsError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Checkout CLI entry point
fn main() -> Result<(), CliError> {
    let args = Args::parse();

    let currency = parse_currency(&args.currency)?;
    let catalog = load_json(&args.catalog, currency)?;

    let promotions = match &args.promotions {
        Some(path) => PromotionTable::load_yaml(path)?,
        None => PromotionTable::standard(),
    };

    let start = Instant::now();

    let basket = Basket::compute(&catalog, args.sku.as_slice(), &promotions)?;

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    basket.write_to(&mut handle)?;

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
