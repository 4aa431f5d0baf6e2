//! Show tracking progress for an order status.
//!
//! # Usage
//!
//! ```bash
//! dd-cli track --status "Out for Delivery" --route-progress 60
//! ```

use dinedash_core::{OrderStatus, TrackingSummary};

use crate::commands::write_json;
use crate::error::CliError;

/// Print the tracking summary for `status`.
pub fn run(status: &str, route_progress: u8) -> Result<(), CliError> {
    let status: OrderStatus = status.parse().map_err(CliError::InvalidStatus)?;
    write_json(&TrackingSummary::new(status, route_progress))
}
