//! Order placement.
//!
//! The storefront hands a validated [`CheckoutRecord`] and its
//! [`PricingBreakdown`] to an [`OrderPlacement`] implementation and gets back
//! a [`PlacedOrder`]. [`MockOrderDesk`] is the in-process implementation: it
//! only assigns identifiers and a timestamp.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::checkout::{CheckoutInput, CheckoutRecord, ValidationErrors, validate};
use crate::pricing::{DeliveryFee, LineItem, PricingBreakdown, TaxRate, compute_breakdown};
use crate::types::{OrderNumber, OrderNumberError};

/// Errors reported by an order placement backend.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Nothing to order.
    #[error("cannot place an order with no items")]
    EmptyOrder,

    /// Backend produced an unusable order number.
    #[error("invalid order number: {0}")]
    OrderNumber(#[from] OrderNumberError),

    /// Backend-specific failure.
    #[error("order placement failed: {0}")]
    Backend(String),
}

/// A confirmed order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub id: Uuid,
    pub number: OrderNumber,
    pub record: CheckoutRecord,
    pub breakdown: PricingBreakdown,
    pub placed_at: DateTime<Utc>,
}

/// Receives validated checkouts and turns them into orders.
pub trait OrderPlacement {
    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if the backend rejects the order.
    fn place(
        &self,
        record: CheckoutRecord,
        breakdown: PricingBreakdown,
    ) -> Result<PlacedOrder, PlacementError>;
}

/// Order desk that confirms every order locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockOrderDesk;

impl OrderPlacement for MockOrderDesk {
    fn place(
        &self,
        record: CheckoutRecord,
        breakdown: PricingBreakdown,
    ) -> Result<PlacedOrder, PlacementError> {
        let number =
            OrderNumber::new(rand::rng().random_range(OrderNumber::MIN..=OrderNumber::MAX))?;

        let order = PlacedOrder {
            id: Uuid::new_v4(),
            number,
            record,
            breakdown,
            placed_at: Utc::now(),
        };

        tracing::info!(
            order_id = %order.id,
            order_number = %order.number,
            payment_method = %order.record.payment_method(),
            total = %order.breakdown.total,
            "Order placed"
        );

        Ok(order)
    }
}

/// Why a checkout did not produce an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form needs correcting.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The order backend refused the order.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Run the whole checkout: validate the form, price the items, place the order.
///
/// # Errors
///
/// Returns [`CheckoutError::Invalid`] with every field error if the form is
/// invalid, or [`CheckoutError::Placement`] if there are no items or the
/// backend fails.
pub fn submit_checkout<P: OrderPlacement + ?Sized>(
    desk: &P,
    input: &CheckoutInput,
    items: &[LineItem],
    tax_rate: TaxRate,
    delivery_fee: DeliveryFee,
) -> Result<PlacedOrder, CheckoutError> {
    let record = validate(input)?;
    if items.is_empty() {
        return Err(PlacementError::EmptyOrder.into());
    }

    let breakdown = compute_breakdown(items, tax_rate, delivery_fee);
    Ok(desk.place(record, breakdown)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::checkout::fields;

    fn valid_input() -> CheckoutInput {
        CheckoutInput::new()
            .with_text(fields::FULL_NAME, "Jane Doe")
            .with_text(fields::ADDRESS_LINE1, "123 Luxe Lane")
            .with_text(fields::CITY, "Metro City")
            .with_text(fields::POSTAL_CODE, "12345")
            .with_text(fields::COUNTRY, "USA")
            .with_text(fields::PHONE, "+15551234567")
            .with_text(fields::PAYMENT_METHOD, "paypal")
            .with_flag(fields::AGREE_TO_TERMS, true)
    }

    fn pricing() -> (TaxRate, DeliveryFee) {
        (
            TaxRate::new(Decimal::new(7, 2)).unwrap(),
            DeliveryFee::new(Decimal::new(599, 2)).unwrap(),
        )
    }

    struct RejectingDesk;

    impl OrderPlacement for RejectingDesk {
        fn place(
            &self,
            _record: CheckoutRecord,
            _breakdown: PricingBreakdown,
        ) -> Result<PlacedOrder, PlacementError> {
            Err(PlacementError::Backend("kitchen closed".to_owned()))
        }
    }

    #[test]
    fn test_mock_desk_assigns_five_digit_number() {
        let (tax, fee) = pricing();
        let items = vec![LineItem::new("1", Decimal::new(3250, 2), 1).unwrap()];
        for _ in 0..50 {
            let order = submit_checkout(&MockOrderDesk, &valid_input(), &items, tax, fee).unwrap();
            let value = order.number.value();
            assert!((OrderNumber::MIN..=OrderNumber::MAX).contains(&value));
            assert!(order.number.to_string().starts_with("ORD"));
        }
    }

    #[test]
    fn test_submit_checkout_prices_order() {
        let (tax, fee) = pricing();
        let items = vec![LineItem::new("1", Decimal::new(1000, 2), 2).unwrap()];
        let order = submit_checkout(&MockOrderDesk, &valid_input(), &items, tax, fee).unwrap();
        assert_eq!(order.breakdown.subtotal, Decimal::new(2000, 2));
        assert_eq!(order.breakdown.tax, Decimal::new(140, 2));
        assert_eq!(order.breakdown.total, Decimal::new(2739, 2));
    }

    #[test]
    fn test_submit_checkout_invalid_form() {
        let (tax, fee) = pricing();
        let items = vec![LineItem::new("1", Decimal::ONE, 1).unwrap()];
        let input = valid_input().with_flag(fields::AGREE_TO_TERMS, false);
        let err = submit_checkout(&MockOrderDesk, &input, &items, tax, fee).unwrap_err();
        assert!(matches!(err, CheckoutError::Invalid(ref errors) if errors.len() == 1));
    }

    #[test]
    fn test_submit_checkout_empty_items() {
        let (tax, fee) = pricing();
        let err = submit_checkout(&MockOrderDesk, &valid_input(), &[], tax, fee).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Placement(PlacementError::EmptyOrder)
        ));
    }

    #[test]
    fn test_submit_checkout_backend_failure() {
        let (tax, fee) = pricing();
        let items = vec![LineItem::new("1", Decimal::ONE, 1).unwrap()];
        let err = submit_checkout(&RejectingDesk, &valid_input(), &items, tax, fee).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Placement(PlacementError::Backend(_))
        ));
    }
}
