//! Subcommand implementations and shared file/output helpers.

pub mod checkout;
pub mod quote;
pub mod track;
pub mod validate;

use std::io::Write;
use std::path::Path;

use dinedash_core::{Cart, LineItem};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Read a JSON file, or YAML when the extension is `.yaml`/`.yml`.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
        serde_yaml::from_str(&raw).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&raw).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| CliError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Load cart lines from a file, merging repeated item ids.
///
/// Each line is checked as a [`LineItem`], so a zero quantity or negative
/// price is a parse error rather than a dropped line.
pub fn load_cart(path: &Path) -> Result<Cart, CliError> {
    let items: Vec<LineItem> = load_file(path)?;
    let cart: Cart = items.into_iter().collect();
    tracing::debug!(item_count = cart.item_count(), "Loaded cart");
    Ok(cart)
}

/// Pretty-print a value as JSON on stdout.
pub fn write_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
