//! Validate a checkout form.
//!
//! # Usage
//!
//! ```bash
//! dd-cli validate --form checkout.json
//! ```
//!
//! Prints the validated record, or the field errors followed by a non-zero
//! exit.

use std::path::Path;

use dinedash_core::{CheckoutInput, validate};

use crate::commands::{load_file, write_json};
use crate::error::CliError;

/// Validate the form in `form_path` and print the outcome.
pub fn run(form_path: &Path) -> Result<(), CliError> {
    let input: CheckoutInput = load_file(form_path)?;

    match validate(&input) {
        Ok(record) => {
            tracing::info!(
                payment_method = %record.payment_method(),
                "Checkout form is valid"
            );
            write_json(&record)
        }
        Err(errors) => {
            write_json(&errors)?;
            Err(errors.into())
        }
    }
}
