//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DINEDASH_TAX_RATE` - Tax rate as a fraction in [0, 1] (default: 0.07)
//! - `DINEDASH_DELIVERY_FEE` - Flat delivery fee (default: 5.99)
//! - `DINEDASH_CURRENCY` - ISO 4217 currency code (default: USD)
//! - `DINEDASH_LOG_FORMAT` - `text` or `json` (default: text)
//! - `RUST_LOG` - Tracing filter (default: info)

use std::str::FromStr;

use dinedash_core::{CurrencyCode, DeliveryFee, TaxRate};
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_TAX_RATE: &str = "0.07";
const DEFAULT_DELIVERY_FEE: &str = "5.99";
const DEFAULT_CURRENCY: &str = "USD";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// Pricing parameters applied to every quote and checkout.
#[derive(Debug, Clone, Copy)]
pub struct PricingConfig {
    pub tax_rate: TaxRate,
    pub delivery_fee: DeliveryFee,
    pub currency: CurrencyCode,
}

/// Application configuration.
#[derive(Debug, Clone, Copy)]
pub struct CliConfig {
    pub pricing: PricingConfig,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            pricing: PricingConfig::from_env()?,
            log_format: parse_env("DINEDASH_LOG_FORMAT", "text")?,
        })
    }
}

impl PricingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let tax_rate: Decimal = parse_env("DINEDASH_TAX_RATE", DEFAULT_TAX_RATE)?;
        let delivery_fee: Decimal = parse_env("DINEDASH_DELIVERY_FEE", DEFAULT_DELIVERY_FEE)?;

        Ok(Self {
            tax_rate: TaxRate::new(tax_rate).map_err(|e| {
                ConfigError::InvalidEnvVar("DINEDASH_TAX_RATE".to_string(), e.to_string())
            })?,
            delivery_fee: DeliveryFee::new(delivery_fee).map_err(|e| {
                ConfigError::InvalidEnvVar("DINEDASH_DELIVERY_FEE".to_string(), e.to_string())
            })?,
            currency: parse_env("DINEDASH_CURRENCY", DEFAULT_CURRENCY)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let rate: Decimal = parse_value("DINEDASH_TAX_RATE", DEFAULT_TAX_RATE).unwrap();
        assert_eq!(rate, Decimal::new(7, 2));
        let fee: Decimal = parse_value("DINEDASH_DELIVERY_FEE", DEFAULT_DELIVERY_FEE).unwrap();
        assert_eq!(fee, Decimal::new(599, 2));
        let currency: CurrencyCode = parse_value("DINEDASH_CURRENCY", DEFAULT_CURRENCY).unwrap();
        assert_eq!(currency, CurrencyCode::USD);
    }

    #[test]
    fn test_invalid_decimal() {
        let result = parse_value::<Decimal>("DINEDASH_TAX_RATE", "seven percent");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "DINEDASH_TAX_RATE"));
    }

    #[test]
    fn test_log_format() {
        assert_eq!(parse_value::<LogFormat>("F", "JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_value::<LogFormat>("F", " text ").unwrap(), LogFormat::Text);
        assert!(parse_value::<LogFormat>("F", "xml").is_err());
    }
}
