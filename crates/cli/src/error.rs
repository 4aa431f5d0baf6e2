//! CLI error type.

use std::path::PathBuf;

use dinedash_core::{CartError, CheckoutError, ValidationErrors};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `dd-cli` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Cart(#[from] CartError),

    /// Form errors; already printed as JSON by the time this is returned.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Checkout(CheckoutError),
}

impl From<CheckoutError> for CliError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Invalid(errors) => Self::Invalid(errors),
            other @ CheckoutError::Placement(_) => Self::Checkout(other),
        }
    }
}
