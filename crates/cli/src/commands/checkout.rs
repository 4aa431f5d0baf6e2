//! Run a full checkout against the local order desk.
//!
//! # Usage
//!
//! ```bash
//! dd-cli checkout --items cart.json --form checkout.json
//! ```

use std::path::Path;

use dinedash_core::{CheckoutError, CheckoutInput, MockOrderDesk, submit_checkout};

use crate::commands::{load_cart, load_file, write_json};
use crate::config::PricingConfig;
use crate::error::CliError;

/// Validate the form, price the cart, and place the order.
pub fn run(items_path: &Path, form_path: &Path, pricing: &PricingConfig) -> Result<(), CliError> {
    let cart = load_cart(items_path)?;
    let input: CheckoutInput = load_file(form_path)?;
    let items = cart.line_items()?;

    match submit_checkout(
        &MockOrderDesk,
        &input,
        &items,
        pricing.tax_rate,
        pricing.delivery_fee,
    ) {
        Ok(order) => {
            tracing::info!(
                order_number = %order.number,
                total = %order.breakdown.total_price(pricing.currency),
                "Order confirmed"
            );
            write_json(&order)
        }
        Err(CheckoutError::Invalid(errors)) => {
            write_json(&errors)?;
            Err(errors.into())
        }
        Err(err) => Err(err.into()),
    }
}
