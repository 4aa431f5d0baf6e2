//! Integration tests for DineDash.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dinedash-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_validation` - Checkout form rules end to end
//! - `pricing` - Breakdown invariants across many carts
//! - `order_flow` - Cart to placed order, and tracking
//!
//! This library holds the shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use dinedash_core::checkout::fields;
use dinedash_core::{CheckoutInput, DeliveryFee, LineItem, TaxRate};
use rust_decimal::Decimal;

/// Valid address and contact fields, terms accepted, no payment method.
#[must_use]
pub fn address_form() -> CheckoutInput {
    CheckoutInput::new()
        .with_text(fields::FULL_NAME, "Jane Doe")
        .with_text(fields::ADDRESS_LINE1, "123 Luxe Lane")
        .with_text(fields::CITY, "Metro City")
        .with_text(fields::POSTAL_CODE, "12345-6789")
        .with_text(fields::COUNTRY, "USA")
        .with_text(fields::PHONE, "+15559876543")
        .with_flag(fields::AGREE_TO_TERMS, true)
}

/// A form that passes validation with card payment.
#[must_use]
pub fn card_form() -> CheckoutInput {
    address_form()
        .with_text(fields::PAYMENT_METHOD, "card")
        .with_text(fields::CARD_HOLDER_NAME, "Jane Doe")
        .with_text(fields::CARD_NUMBER, "4111111111111111")
        .with_text(fields::CARD_EXPIRY, "12/27")
        .with_text(fields::CARD_CVV, "123")
}

/// A form that passes validation with `PayPal` and no card fields at all.
#[must_use]
pub fn paypal_form() -> CheckoutInput {
    address_form().with_text(fields::PAYMENT_METHOD, "paypal")
}

/// The storefront's fixed pricing: 7% tax, $5.99 delivery.
///
/// # Panics
///
/// Never; the constants are in range.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn storefront_pricing() -> (TaxRate, DeliveryFee) {
    (
        TaxRate::new(Decimal::new(7, 2)).unwrap(),
        DeliveryFee::new(Decimal::new(599, 2)).unwrap(),
    )
}

/// Truffle pasta ×1 and two elixirs.
///
/// # Panics
///
/// Never; prices and quantities are valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_items() -> Vec<LineItem> {
    vec![
        LineItem::new("1", Decimal::new(3250, 2), 1)
            .unwrap()
            .with_name("Exquisite Truffle Pasta"),
        LineItem::new("2", Decimal::new(900, 2), 2)
            .unwrap()
            .with_name("Artisan Elixir (Drink)"),
    ]
}
