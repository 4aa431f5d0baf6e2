//! Field rules for the checkout form.
//!
//! Each rule pairs a field with a predicate over its raw text and the message
//! shown when the predicate fails. Fields carry a single rule, so the first
//! failing rule for a field is also its only reported error.

use std::sync::LazyLock;

use regex::Regex;

use super::input::fields;

/// A text predicate bound to a form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl FieldRule {
    const fn new(field: &'static str, message: &'static str, check: fn(&str) -> bool) -> Self {
        Self {
            field,
            message,
            check,
        }
    }

    /// Whether `value` satisfies this rule.
    #[must_use]
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

// ASCII classes throughout: `\d` in the regex crate matches any Unicode digit.
static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:[-\s][0-9]{4})?$").expect("Invalid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("Invalid regex"));

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("Invalid regex"));

static CARD_EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0[1-9]|1[0-2])/[0-9]{2}$").expect("Invalid regex"));

static CARD_CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Invalid regex"));

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn at_least_2_chars(value: &str) -> bool {
    min_chars(value, 2)
}

fn at_least_5_chars(value: &str) -> bool {
    min_chars(value, 5)
}

/// Card number with all whitespace removed.
#[must_use]
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[must_use]
pub fn is_valid_postal_code(value: &str) -> bool {
    POSTAL_CODE_RE.is_match(value)
}

#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[must_use]
pub fn is_valid_card_number(value: &str) -> bool {
    CARD_NUMBER_RE.is_match(&strip_whitespace(value))
}

#[must_use]
pub fn is_valid_card_expiry(value: &str) -> bool {
    CARD_EXPIRY_RE.is_match(value)
}

#[must_use]
pub fn is_valid_card_cvv(value: &str) -> bool {
    CARD_CVV_RE.is_match(value)
}

/// Always-on text rules, in form order.
pub const CONTACT_RULES: [FieldRule; 6] = [
    FieldRule::new(
        fields::FULL_NAME,
        "Full name must be at least 2 characters.",
        at_least_2_chars,
    ),
    FieldRule::new(
        fields::ADDRESS_LINE1,
        "Address line 1 is too short.",
        at_least_5_chars,
    ),
    FieldRule::new(fields::CITY, "City name is too short.", at_least_2_chars),
    FieldRule::new(
        fields::POSTAL_CODE,
        "Invalid postal code format.",
        is_valid_postal_code,
    ),
    FieldRule::new(fields::COUNTRY, "Please select a country.", at_least_2_chars),
    FieldRule::new(
        fields::PHONE,
        "Invalid phone number. Include country code.",
        is_valid_phone,
    ),
];

/// Rules that only apply when paying by card.
pub const CARD_RULES: [FieldRule; 4] = [
    FieldRule::new(
        fields::CARD_HOLDER_NAME,
        "Cardholder name is required for card payment.",
        at_least_2_chars,
    ),
    FieldRule::new(
        fields::CARD_NUMBER,
        "Invalid card number (13-19 digits).",
        is_valid_card_number,
    ),
    FieldRule::new(
        fields::CARD_EXPIRY,
        "Invalid expiry date (MM/YY).",
        is_valid_card_expiry,
    ),
    FieldRule::new(
        fields::CARD_CVV,
        "Invalid CVV (3-4 digits).",
        is_valid_card_cvv,
    ),
];

pub const PAYMENT_METHOD_MESSAGE: &str = "Please select a payment method.";
pub const BILL_SPLITTING_MESSAGE: &str = "Please select a bill option.";
pub const AGREE_TO_TERMS_MESSAGE: &str = "You must agree to the terms and conditions to proceed.";
