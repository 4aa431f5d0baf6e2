//! DineDash Core - Checkout, pricing, and order tracking logic.
//!
//! This crate provides the logic behind the DineDash food-delivery storefront:
//! - `pricing` - Line items to subtotal, tax, delivery fee, and total
//! - `checkout` - Checkout form validation with payment-method-conditional rules
//! - `cart` - In-memory cart with per-item counters
//! - `order` - Order placement seam and an in-process order desk
//! - `tracking` - Order status progress and badge mapping
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no file access,
//! no HTTP clients, no persistence. Rendering layers and the `dd-cli` binary
//! call into it.
//!
//! # Example
//!
//! ```
//! use dinedash_core::{DeliveryFee, LineItem, TaxRate, compute_breakdown};
//! use rust_decimal::Decimal;
//!
//! let items = vec![
//!     LineItem::new("pasta", Decimal::new(3250, 2), 1).unwrap(),
//!     LineItem::new("elixir", Decimal::new(900, 2), 2).unwrap(),
//! ];
//! let tax_rate = TaxRate::new(Decimal::new(7, 2)).unwrap();
//! let fee = DeliveryFee::new(Decimal::new(599, 2)).unwrap();
//!
//! let breakdown = compute_breakdown(&items, tax_rate, fee);
//! assert_eq!(breakdown.total, Decimal::new(6003, 2));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod order;
pub mod pricing;
pub mod tracking;
pub mod types;

pub use cart::{Cart, CartError, CartLine};
pub use checkout::{CheckoutInput, CheckoutRecord, ValidationError, ValidationErrors, validate};
pub use order::{
    CheckoutError, MockOrderDesk, OrderPlacement, PlacedOrder, PlacementError, submit_checkout,
};
pub use pricing::{
    DeliveryFee, LineItem, PricingBreakdown, PricingError, TaxRate, compute_breakdown,
};
pub use tracking::TrackingSummary;
pub use types::*;
