//! DineDash CLI - Quotes, checkout validation, and order tracking.
//!
//! # Usage
//!
//! ```bash
//! # Price a cart
//! dd-cli quote --items cart.json
//!
//! # Validate a checkout form
//! dd-cli validate --form checkout.json
//!
//! # Validate, price, and place an order
//! dd-cli checkout --items cart.json --form checkout.yaml
//!
//! # Tracking progress for a status
//! dd-cli track --status "Out for Delivery" --route-progress 60
//! ```
//!
//! # Commands
//!
//! - `quote` - Subtotal, tax, delivery fee, and total for a cart
//! - `validate` - Check a checkout form and print the record or field errors
//! - `checkout` - Full checkout against the local order desk
//! - `track` - Progress bars and badge for an order status

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "dd-cli")]
#[command(author, version, about = "DineDash CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a cart
    Quote {
        /// Cart lines file (JSON or YAML)
        #[arg(short, long)]
        items: PathBuf,
    },
    /// Validate a checkout form
    Validate {
        /// Checkout form file (JSON or YAML)
        #[arg(short, long)]
        form: PathBuf,
    },
    /// Validate, price, and place an order
    Checkout {
        /// Cart lines file (JSON or YAML)
        #[arg(short, long)]
        items: PathBuf,

        /// Checkout form file (JSON or YAML)
        #[arg(short, long)]
        form: PathBuf,
    },
    /// Show tracking progress for an order status
    Track {
        /// Status label, e.g. "Preparing" or "Out for Delivery"
        #[arg(short, long)]
        status: String,

        /// Courier route progress (0-100), used while out for delivery
        #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
        route_progress: u8,
    },
}

/// Initialize tracing, honouring `RUST_LOG` (default: info).
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays machine-readable
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Configuration failed: {e}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        match e {
            CliError::Invalid(errors) => {
                tracing::warn!(error_count = errors.len(), "Checkout form is invalid");
            }
            other => tracing::error!("Command failed: {other}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Quote { items } => commands::quote::run(&items, &config.pricing)?,
        Commands::Validate { form } => commands::validate::run(&form)?,
        Commands::Checkout { items, form } => {
            commands::checkout::run(&items, &form, &config.pricing)?;
        }
        Commands::Track {
            status,
            route_progress,
        } => commands::track::run(&status, route_progress)?,
    }
    Ok(())
}
