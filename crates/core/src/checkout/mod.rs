//! Checkout form validation.
//!
//! [`validate`] turns a raw [`CheckoutInput`] into either a typed
//! [`CheckoutRecord`] or the list of field errors to show next to the form.
//!
//! Rules run in two passes:
//!
//! 1. Always-on rules: address and contact fields, payment method, bill
//!    splitting, and terms acceptance. Every violation is collected.
//! 2. The card block, only when the payment method resolves to `card`.
//!
//! A missing field is checked as if it were empty. Each field reports at most
//! one error.
//!
//! ```
//! use dinedash_core::checkout::{CheckoutInput, validate};
//!
//! let input = CheckoutInput::new()
//!     .with_text("fullName", "Jane Doe")
//!     .with_text("addressLine1", "123 Luxe Lane")
//!     .with_text("city", "Metro City")
//!     .with_text("postalCode", "12345")
//!     .with_text("country", "USA")
//!     .with_text("phone", "+15551234567")
//!     .with_text("paymentMethod", "paypal")
//!     .with_flag("agreeToTerms", true);
//!
//! let record = validate(&input).unwrap();
//! assert!(record.card().is_none());
//! ```

pub mod error;
pub mod input;
pub mod record;
pub mod rules;

pub use error::{ValidationError, ValidationErrors};
pub use input::{CheckoutInput, FieldValue, fields};
pub use record::{CardDetails, CheckoutRecord, Payment, TermsAccepted};

use crate::types::{BillSplitting, PaymentMethod};

/// Validate a checkout submission.
///
/// Pure and deterministic: the same input always yields the same result.
///
/// # Errors
///
/// Returns every field-level problem found, in form order, at most one per
/// field.
pub fn validate(input: &CheckoutInput) -> Result<CheckoutRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for rule in &rules::CONTACT_RULES {
        if !rule.passes(input.text(rule.field)) {
            errors.push(rule.field, rule.message);
        }
    }

    let payment_method = input
        .text(fields::PAYMENT_METHOD)
        .parse::<PaymentMethod>()
        .ok();
    if payment_method.is_none() {
        errors.push(fields::PAYMENT_METHOD, rules::PAYMENT_METHOD_MESSAGE);
    }

    let bill_splitting = if input.is_present(fields::BILL_SPLITTING) {
        input
            .text(fields::BILL_SPLITTING)
            .parse::<BillSplitting>()
            .ok()
    } else {
        Some(BillSplitting::default())
    };
    if bill_splitting.is_none() {
        errors.push(fields::BILL_SPLITTING, rules::BILL_SPLITTING_MESSAGE);
    }

    if input.flag(fields::AGREE_TO_TERMS) != Some(true) {
        errors.push(fields::AGREE_TO_TERMS, rules::AGREE_TO_TERMS_MESSAGE);
    }

    if payment_method == Some(PaymentMethod::Card) {
        for rule in &rules::CARD_RULES {
            if !rule.passes(input.text(rule.field)) {
                errors.push(rule.field, rule.message);
            }
        }
    }

    let (Some(payment_method), Some(bill_splitting), true) =
        (payment_method, bill_splitting, errors.is_empty())
    else {
        tracing::debug!(
            error_count = errors.len(),
            fields = ?errors.fields(),
            "Checkout validation failed"
        );
        return Err(errors);
    };

    let payment = match payment_method {
        PaymentMethod::Card => Payment::Card(CardDetails {
            card_holder_name: input.text(fields::CARD_HOLDER_NAME).to_owned(),
            card_number: input.text(fields::CARD_NUMBER).to_owned(),
            card_expiry: input.text(fields::CARD_EXPIRY).to_owned(),
            card_cvv: input.text(fields::CARD_CVV).to_owned(),
        }),
        PaymentMethod::PayPal => Payment::PayPal,
    };

    Ok(CheckoutRecord {
        full_name: input.text(fields::FULL_NAME).to_owned(),
        address_line1: input.text(fields::ADDRESS_LINE1).to_owned(),
        address_line2: input.optional_text(fields::ADDRESS_LINE2),
        city: input.text(fields::CITY).to_owned(),
        postal_code: input.text(fields::POSTAL_CODE).to_owned(),
        country: input.text(fields::COUNTRY).to_owned(),
        phone: input.text(fields::PHONE).to_owned(),
        payment,
        bill_splitting,
        discount_code: input.optional_text(fields::DISCOUNT_CODE),
        agree_to_terms: TermsAccepted,
    })
}
