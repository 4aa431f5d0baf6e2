//! Order pricing: line items to subtotal, tax, delivery fee, and total.
//!
//! All amounts use [`Decimal`] so sums are exact. Only tax is rounded
//! (two places, half-up); the total is the exact sum of its parts.
//!
//! Inputs are validated when they are constructed ([`LineItem::new`],
//! [`TaxRate::new`], [`DeliveryFee::new`]), which keeps
//! [`compute_breakdown`] infallible. Line totals and the delivery fee are
//! capped at [`MAX_AMOUNT`], so no realistic number of line items can
//! overflow the sums.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, ItemId, Price};

/// Largest accepted line total or delivery fee: 1,000,000,000,000.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Why a line item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineItemProblem {
    #[error("unit price must not be negative")]
    NegativePrice,

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("line total exceeds {}", MAX_AMOUNT)]
    AmountTooLarge,
}

/// Errors raised while constructing pricing inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Line item with a negative unit price, a zero quantity, or a line
    /// total above [`MAX_AMOUNT`].
    #[error("invalid line item {id}: {problem}")]
    InvalidLineItem {
        /// The offending item.
        id: ItemId,
        /// What was wrong with it.
        problem: LineItemProblem,
    },

    /// Tax rate outside `[0, 1]`.
    #[error("tax rate must be between 0 and 1 (got {0})")]
    InvalidTaxRate(Decimal),

    /// Delivery fee below zero.
    #[error("delivery fee must not be negative (got {0})")]
    NegativeDeliveryFee(Decimal),

    /// Delivery fee above [`MAX_AMOUNT`].
    #[error("delivery fee exceeds {} (got {})", MAX_AMOUNT, .0)]
    DeliveryFeeTooLarge(Decimal),
}

/// One priced, quantified entry in an order.
///
/// Immutable once created. Deserialization runs through [`LineItem::new`],
/// so a negative price or zero quantity is rejected at parse time too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLineItem")]
pub struct LineItem {
    id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    unit_price: Decimal,
    quantity: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLineItem {
    id: ItemId,
    #[serde(default)]
    name: Option<String>,
    unit_price: Decimal,
    quantity: u32,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = PricingError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        let item = Self::new(raw.id, raw.unit_price, raw.quantity)?;
        Ok(match raw.name {
            Some(name) => item.with_name(name),
            None => item,
        })
    }
}

impl LineItem {
    /// Create a line item.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidLineItem`] if `unit_price` is negative,
    /// `quantity` is zero, or `unit_price × quantity` exceeds [`MAX_AMOUNT`].
    pub fn new(
        id: impl Into<ItemId>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Result<Self, PricingError> {
        let id = id.into();
        if unit_price < Decimal::ZERO {
            return Err(PricingError::InvalidLineItem {
                id,
                problem: LineItemProblem::NegativePrice,
            });
        }
        if quantity == 0 {
            return Err(PricingError::InvalidLineItem {
                id,
                problem: LineItemProblem::ZeroQuantity,
            });
        }
        let within_cap = unit_price
            .checked_mul(Decimal::from(quantity))
            .is_some_and(|total| total <= MAX_AMOUNT);
        if !within_cap {
            return Err(PricingError::InvalidLineItem {
                id,
                problem: LineItemProblem::AmountTooLarge,
            });
        }
        Ok(Self {
            id,
            name: None,
            unit_price,
            quantity,
        })
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Tax rate as a fraction in `[0, 1]` (e.g. `0.07` for 7%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a tax rate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidTaxRate`] if `rate` is outside `[0, 1]`.
    pub fn new(rate: Decimal) -> Result<Self, PricingError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(PricingError::InvalidTaxRate(rate));
        }
        Ok(Self(rate))
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whole-number percentage label, e.g. `"7%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        let percent = (self.0 * Decimal::ONE_HUNDRED).round_dp(0).normalize();
        format!("{percent}%")
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = PricingError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

/// Flat delivery fee in `[0, MAX_AMOUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DeliveryFee(Decimal);

impl DeliveryFee {
    /// Create a delivery fee.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NegativeDeliveryFee`] if `fee` is below zero
    /// and [`PricingError::DeliveryFeeTooLarge`] if it exceeds [`MAX_AMOUNT`].
    pub fn new(fee: Decimal) -> Result<Self, PricingError> {
        if fee < Decimal::ZERO {
            return Err(PricingError::NegativeDeliveryFee(fee));
        }
        if fee > MAX_AMOUNT {
            return Err(PricingError::DeliveryFeeTooLarge(fee));
        }
        Ok(Self(fee))
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for DeliveryFee {
    type Error = PricingError;

    fn try_from(fee: Decimal) -> Result<Self, Self::Error> {
        Self::new(fee)
    }
}

impl From<DeliveryFee> for Decimal {
    fn from(fee: DeliveryFee) -> Self {
        fee.0
    }
}

/// Decomposition of an order total.
///
/// Invariants: `total == subtotal + tax + delivery_fee` and
/// `subtotal == Σ unit_price × quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

impl PricingBreakdown {
    /// The total as a displayable [`Price`].
    #[must_use]
    pub const fn total_price(&self, currency_code: CurrencyCode) -> Price {
        Price::new(self.total, currency_code)
    }

    /// Summary lines as shown on the order summary card.
    #[must_use]
    pub fn summary_lines(
        &self,
        tax_rate: TaxRate,
        currency_code: CurrencyCode,
    ) -> Vec<(String, String)> {
        let fmt = |amount| Price::new(amount, currency_code).display();
        vec![
            ("Subtotal".to_owned(), fmt(self.subtotal)),
            (format!("Tax ({})", tax_rate.percent_label()), fmt(self.tax)),
            ("Delivery Fee".to_owned(), fmt(self.delivery_fee)),
            ("Total".to_owned(), fmt(self.total)),
        ]
    }
}

/// Round to two decimal places, half-up.
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the pricing breakdown for a set of line items.
///
/// An empty slice yields a zero subtotal and zero tax, so the total equals
/// the delivery fee.
#[must_use]
pub fn compute_breakdown(
    items: &[LineItem],
    tax_rate: TaxRate,
    delivery_fee: DeliveryFee,
) -> PricingBreakdown {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
    let tax = round2(subtotal * tax_rate.as_decimal());
    let delivery_fee = delivery_fee.as_decimal();

    PricingBreakdown {
        subtotal,
        tax,
        delivery_fee,
        total: subtotal + tax + delivery_fee,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rate(percent: i64) -> TaxRate {
        TaxRate::new(Decimal::new(percent, 2)).unwrap()
    }

    fn fee(cents: i64) -> DeliveryFee {
        DeliveryFee::new(Decimal::new(cents, 2)).unwrap()
    }

    fn sample_order() -> Vec<LineItem> {
        vec![
            LineItem::new("1", Decimal::new(3250, 2), 1)
                .unwrap()
                .with_name("Exquisite Truffle Pasta"),
            LineItem::new("2", Decimal::new(900, 2), 2)
                .unwrap()
                .with_name("Artisan Elixir (Drink)"),
        ]
    }

    #[test]
    fn test_sample_order_breakdown() {
        let breakdown = compute_breakdown(&sample_order(), rate(7), fee(599));
        assert_eq!(breakdown.subtotal, Decimal::new(5050, 2));
        // 50.50 * 0.07 = 3.535 -> 3.54
        assert_eq!(breakdown.tax, Decimal::new(354, 2));
        assert_eq!(breakdown.delivery_fee, Decimal::new(599, 2));
        assert_eq!(breakdown.total, Decimal::new(6003, 2));
    }

    #[test]
    fn test_empty_items() {
        let breakdown = compute_breakdown(&[], rate(7), fee(599));
        assert_eq!(breakdown.subtotal, Decimal::ZERO);
        assert_eq!(breakdown.tax, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::new(599, 2));
    }

    #[test]
    fn test_zero_tax_rate() {
        let breakdown = compute_breakdown(&sample_order(), rate(0), fee(0));
        assert_eq!(breakdown.tax, Decimal::ZERO);
        assert_eq!(breakdown.total, breakdown.subtotal);
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round2(Decimal::new(1004, 3)), Decimal::new(100, 2));
        assert_eq!(round2(Decimal::new(2225, 3)), Decimal::new(223, 2));
    }

    #[test]
    fn test_line_item_rejects_negative_price() {
        let result = LineItem::new("x", Decimal::new(-1, 2), 1);
        assert!(matches!(
            result,
            Err(PricingError::InvalidLineItem {
                problem: LineItemProblem::NegativePrice,
                ..
            })
        ));
    }

    #[test]
    fn test_line_item_rejects_zero_quantity() {
        let result = LineItem::new("x", Decimal::ONE, 0);
        assert!(matches!(
            result,
            Err(PricingError::InvalidLineItem {
                problem: LineItemProblem::ZeroQuantity,
                ..
            })
        ));
    }

    #[test]
    fn test_max_amount_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_i64));
    }

    #[test]
    fn test_line_item_rejects_oversized_total() {
        for (price, quantity) in [(Decimal::MAX, 1), (Decimal::MAX, 2), (MAX_AMOUNT, 2)] {
            let result = LineItem::new("big", price, quantity);
            assert!(
                matches!(
                    result,
                    Err(PricingError::InvalidLineItem {
                        problem: LineItemProblem::AmountTooLarge,
                        ..
                    })
                ),
                "{price} x {quantity}"
            );
        }
        assert!(LineItem::new("big", MAX_AMOUNT, 1).is_ok());
    }

    #[test]
    fn test_breakdown_at_the_caps_does_not_overflow() {
        let items: Vec<LineItem> = (0..1000)
            .map(|i| LineItem::new(format!("big-{i}"), MAX_AMOUNT, 1).unwrap())
            .collect();
        let top_fee = DeliveryFee::new(MAX_AMOUNT).unwrap();
        let breakdown = compute_breakdown(&items, TaxRate::new(Decimal::ONE).unwrap(), top_fee);

        assert_eq!(breakdown.subtotal, MAX_AMOUNT * Decimal::from(1000));
        assert_eq!(breakdown.tax, breakdown.subtotal);
        assert_eq!(
            breakdown.total,
            breakdown.subtotal + breakdown.tax + MAX_AMOUNT
        );
    }

    #[test]
    fn test_delivery_fee_rejects_oversized() {
        assert!(matches!(
            DeliveryFee::new(Decimal::MAX),
            Err(PricingError::DeliveryFeeTooLarge(_))
        ));
    }

    #[test]
    fn test_line_item_accepts_free_item() {
        let item = LineItem::new("bread", Decimal::ZERO, 3).unwrap();
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(TaxRate::new(Decimal::ZERO).is_ok());
        assert!(TaxRate::new(Decimal::ONE).is_ok());
        assert!(TaxRate::new(Decimal::new(101, 2)).is_err());
        assert!(TaxRate::new(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_delivery_fee_rejects_negative() {
        assert!(matches!(
            DeliveryFee::new(Decimal::new(-599, 2)),
            Err(PricingError::NegativeDeliveryFee(_))
        ));
    }

    #[test]
    fn test_line_item_deserialize_validates() {
        let ok: LineItem =
            serde_json::from_str(r#"{"id":"1","unitPrice":"32.50","quantity":1}"#).unwrap();
        assert_eq!(ok.unit_price(), Decimal::new(3250, 2));
        assert_eq!(ok.name(), None);

        let bad = serde_json::from_str::<LineItem>(r#"{"id":"1","unitPrice":"1.00","quantity":0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_summary_lines() {
        let breakdown = compute_breakdown(&sample_order(), rate(7), fee(599));
        let lines = breakdown.summary_lines(rate(7), CurrencyCode::USD);
        assert_eq!(lines[1], ("Tax (7%)".to_owned(), "$3.54".to_owned()));
        assert_eq!(lines[3], ("Total".to_owned(), "$60.03".to_owned()));
    }
}
