//! Validated checkout record.
//!
//! A [`CheckoutRecord`] can only be produced by
//! [`validate`](super::validate). Card details live inside
//! [`Payment::Card`], so a `PayPal` record has no way to carry them.

use core::fmt;

use serde::{Serialize, Serializer};

use super::rules::strip_whitespace;
use crate::types::{BillSplitting, PaymentMethod};

/// Card fields, stored exactly as entered.
///
/// Implements `Debug` manually to mask the card number and CVV.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub(super) card_holder_name: String,
    pub(super) card_number: String,
    pub(super) card_expiry: String,
    pub(super) card_cvv: String,
}

impl CardDetails {
    #[must_use]
    pub fn holder_name(&self) -> &str {
        &self.card_holder_name
    }

    /// Card number as entered, including any spacing.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.card_number
    }

    #[must_use]
    pub fn expiry(&self) -> &str {
        &self.card_expiry
    }

    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.card_cvv
    }

    /// Last four digits of the card number.
    #[must_use]
    pub fn last_four(&self) -> String {
        let digits = strip_whitespace(&self.card_number);
        let start = digits.len().saturating_sub(4);
        digits.get(start..).unwrap_or_default().to_owned()
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("card_holder_name", &self.card_holder_name)
            .field("card_number", &format!("**** {}", self.last_four()))
            .field("card_expiry", &self.card_expiry)
            .field("card_cvv", &"[REDACTED]")
            .finish()
    }
}

/// How the order is paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "paymentMethod")]
pub enum Payment {
    #[serde(rename = "card")]
    Card(CardDetails),
    #[serde(rename = "paypal")]
    PayPal,
}

impl Payment {
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Card(_) => PaymentMethod::Card,
            Self::PayPal => PaymentMethod::PayPal,
        }
    }
}

/// Proof that the terms were accepted. Serializes as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermsAccepted;

impl Serialize for TermsAccepted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

/// A fully validated checkout submission, ready for order placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRecord {
    pub(super) full_name: String,
    pub(super) address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) address_line2: Option<String>,
    pub(super) city: String,
    pub(super) postal_code: String,
    pub(super) country: String,
    pub(super) phone: String,
    #[serde(flatten)]
    pub(super) payment: Payment,
    pub(super) bill_splitting: BillSplitting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) discount_code: Option<String>,
    pub(super) agree_to_terms: TermsAccepted,
}

impl CheckoutRecord {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    #[must_use]
    pub fn address_line2(&self) -> Option<&str> {
        self.address_line2.as_deref()
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub const fn payment(&self) -> &Payment {
        &self.payment
    }

    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment.method()
    }

    /// Card details; `None` for non-card payments.
    #[must_use]
    pub const fn card(&self) -> Option<&CardDetails> {
        match &self.payment {
            Payment::Card(card) => Some(card),
            Payment::PayPal => None,
        }
    }

    #[must_use]
    pub const fn bill_splitting(&self) -> BillSplitting {
        self.bill_splitting
    }

    #[must_use]
    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref()
    }

    /// Always `true`: a record cannot exist without terms acceptance.
    #[must_use]
    pub const fn agreed_to_terms(&self) -> bool {
        matches!(self.agree_to_terms, TermsAccepted)
    }

    /// Single-line delivery address for confirmations.
    #[must_use]
    pub fn delivery_address(&self) -> String {
        let mut parts = vec![self.address_line1.as_str()];
        if let Some(line2) = self.address_line2.as_deref() {
            parts.push(line2);
        }
        parts.extend([self.city.as_str(), self.postal_code.as_str(), self.country.as_str()]);
        parts.join(", ")
    }
}
