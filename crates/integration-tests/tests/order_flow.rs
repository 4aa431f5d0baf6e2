//! Integration tests for the cart-to-order flow and order tracking.

use dinedash_core::checkout::fields;
use dinedash_core::tracking::shows_en_route_label;
use dinedash_core::{
    BadgeVariant, Cart, CheckoutError, ItemId, MockOrderDesk, OrderNumber, OrderStatus,
    PaymentMethod, TrackingSummary, submit_checkout,
};
use dinedash_integration_tests::{card_form, paypal_form, storefront_pricing};
use rust_decimal::Decimal;

fn storefront_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add("1", "Exquisite Truffle Pasta", Decimal::new(3250, 2));
    cart.add("2", "Artisan Elixir (Drink)", Decimal::new(900, 2));
    cart.add("2", "Artisan Elixir (Drink)", Decimal::new(900, 2));
    cart
}

// =============================================================================
// Checkout Flow
// =============================================================================

#[test]
fn test_cart_checkout_places_order() {
    let cart = storefront_cart();
    assert_eq!(cart.item_count(), 3);

    let (tax, fee) = storefront_pricing();
    let items = cart.line_items().unwrap();
    let order = submit_checkout(&MockOrderDesk, &card_form(), &items, tax, fee).unwrap();

    assert_eq!(order.breakdown.total, Decimal::new(6003, 2));
    assert_eq!(order.record.payment_method(), PaymentMethod::Card);
    assert!((OrderNumber::MIN..=OrderNumber::MAX).contains(&order.number.value()));
}

#[test]
fn test_cart_changes_reprice_order() {
    let mut cart = storefront_cart();
    cart.remove(&ItemId::new("2")).unwrap();

    let (tax, fee) = storefront_pricing();
    let items = cart.line_items().unwrap();
    let order = submit_checkout(&MockOrderDesk, &paypal_form(), &items, tax, fee).unwrap();

    // 32.50 + 2.28 (2.275 rounded up) + 5.99
    assert_eq!(order.breakdown.tax, Decimal::new(228, 2));
    assert_eq!(order.breakdown.total, Decimal::new(4077, 2));
}

#[test]
fn test_invalid_form_places_nothing() {
    let (tax, fee) = storefront_pricing();
    let items = storefront_cart().line_items().unwrap();
    let input = card_form().with_text(fields::CARD_CVV, "12");

    let err = submit_checkout(&MockOrderDesk, &input, &items, tax, fee).unwrap_err();
    match err {
        CheckoutError::Invalid(errors) => assert_eq!(errors.fields(), vec![fields::CARD_CVV]),
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn test_placed_order_json_shape() {
    let (tax, fee) = storefront_pricing();
    let items = storefront_cart().line_items().unwrap();
    let order = submit_checkout(&MockOrderDesk, &paypal_form(), &items, tax, fee).unwrap();

    let json = serde_json::to_value(&order).unwrap();
    assert!(json["number"].as_str().unwrap().starts_with("ORD"));
    assert_eq!(json["record"]["paymentMethod"], "paypal");
    assert_eq!(json["breakdown"]["total"], "60.03");
    assert!(json["placedAt"].is_string());
}

// =============================================================================
// Tracking
// =============================================================================

#[test]
fn test_tracking_progress_follows_lifecycle() {
    let progress: Vec<u8> = [
        OrderStatus::Placed,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ]
    .iter()
    .map(OrderStatus::overall_progress)
    .collect();
    assert_eq!(progress, vec![0, 25, 50, 75, 100]);
}

#[test]
fn test_tracking_summary_per_status() {
    let cases = [
        (OrderStatus::Placed, BadgeVariant::Outline, 0, false),
        (OrderStatus::Confirmed, BadgeVariant::Outline, 0, false),
        (OrderStatus::Preparing, BadgeVariant::Outline, 0, false),
        (OrderStatus::OutForDelivery, BadgeVariant::Secondary, 60, true),
        (OrderStatus::Delivered, BadgeVariant::Default, 100, false),
        (OrderStatus::Cancelled, BadgeVariant::Destructive, 0, false),
    ];
    for (status, badge, map_progress, en_route) in cases {
        let summary = TrackingSummary::new(status, 60);
        assert_eq!(summary.badge, badge, "{status}");
        assert_eq!(summary.map_progress, map_progress, "{status}");
        assert_eq!(summary.en_route, en_route, "{status}");
    }
}

#[test]
fn test_en_route_label_free_text() {
    assert!(shows_en_route_label("Courier en route", 30));
    assert!(!shows_en_route_label("Courier en route", 100));
}
