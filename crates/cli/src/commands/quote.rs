//! Price a cart.
//!
//! # Usage
//!
//! ```bash
//! dd-cli quote --items cart.json
//! ```
//!
//! Prints the breakdown, the header badge item count, and the formatted
//! order summary lines.

use std::path::Path;

use dinedash_core::{PricingBreakdown, compute_breakdown};
use serde::Serialize;

use crate::commands::{load_cart, write_json};
use crate::config::PricingConfig;
use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    currency: &'static str,
    item_count: u32,
    breakdown: PricingBreakdown,
    summary: Vec<SummaryLine>,
}

#[derive(Serialize)]
struct SummaryLine {
    label: String,
    amount: String,
}

/// Print a pricing quote for the items in `items_path`.
pub fn run(items_path: &Path, pricing: &PricingConfig) -> Result<(), CliError> {
    let cart = load_cart(items_path)?;
    let items = cart.line_items()?;
    let breakdown = compute_breakdown(&items, pricing.tax_rate, pricing.delivery_fee);

    tracing::info!(
        items = items.len(),
        subtotal = %breakdown.subtotal,
        total = %breakdown.total,
        "Computed quote"
    );

    let summary = breakdown
        .summary_lines(pricing.tax_rate, pricing.currency)
        .into_iter()
        .map(|(label, amount)| SummaryLine { label, amount })
        .collect();

    write_json(&Quote {
        currency: pricing.currency.code(),
        item_count: cart.item_count(),
        breakdown,
        summary,
    })
}
