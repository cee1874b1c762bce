//! Order Example
//!
//! Builds a cupcake order from command line flags and prints its summary.
//!
//! Use `-q` to set the quantity and `-f` to choose a flavor
//! Use `-d` to pick the pickup day (0 is today, up to 3)
//! Use `-c` (or `CUPCAKE_PRICING_CONFIG`) to load prices from a YAML file

use std::{io, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use cupcake::prelude::*;
use tracing_subscriber::EnvFilter;

/// Arguments for the order example
#[derive(Debug, Parser)]
struct ExampleOrderArgs {
    /// Number of cupcakes
    #[arg(short, long, default_value_t = 12)]
    quantity: u32,

    /// Cupcake flavor
    #[arg(short, long, default_value = "Vanilla")]
    flavor: String,

    /// Pickup day, as an offset from today
    #[arg(short, long, default_value_t = 0)]
    day: usize,

    /// Mark the flavor as the special flavor (no same-day pickup)
    #[arg(long)]
    special: bool,

    /// Pricing config file
    #[arg(short, long, env = "CUPCAKE_PRICING_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

/// Order Example
pub fn main() -> Result<()> {
    let args = ExampleOrderArgs::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => PricingConfig::from_path(path)?,
        None => PricingConfig::default(),
    };

    let mut order = OrderModel::with_policy(&SystemClock, config.policy()?)?;

    let Some(pickup) = order
        .date_options()
        .get(args.day)
        .map(|option| option.label().to_string())
    else {
        bail!(
            "pickup day must be between 0 and {}",
            order.date_options().len() - 1
        );
    };

    order.set_quantity(args.quantity);
    order.set_flavor(args.flavor);
    order.set_date(pickup);
    order.set_special_flavor_selected(args.special);

    let formatter = PriceFormatter::new(config.currency()?);

    OrderSummary::new(&order, formatter).write_to(io::stdout().lock())?;

    Ok(())
}
