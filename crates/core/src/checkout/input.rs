//! Raw checkout form values, as submitted.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Form field names, matching the checkout form's input names.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const ADDRESS_LINE1: &str = "addressLine1";
    pub const ADDRESS_LINE2: &str = "addressLine2";
    pub const CITY: &str = "city";
    pub const POSTAL_CODE: &str = "postalCode";
    pub const COUNTRY: &str = "country";
    pub const PHONE: &str = "phone";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    pub const CARD_HOLDER_NAME: &str = "cardHolderName";
    pub const CARD_NUMBER: &str = "cardNumber";
    pub const CARD_EXPIRY: &str = "cardExpiry";
    pub const CARD_CVV: &str = "cardCvv";
    pub const BILL_SPLITTING: &str = "billSplitting";
    pub const DISCOUNT_CODE: &str = "discountCode";
    pub const AGREE_TO_TERMS: &str = "agreeToTerms";
}

/// A single raw form value.
///
/// Deserialization accepts any shape. Numbers are kept as their text form
/// (an unquoted YAML `postalCode: 12345` reads as `"12345"`), and lists or
/// maps read as [`FieldValue::Empty`] so they fail only their own field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    /// An explicit `null`, or a value with no scalar form; treated like a
    /// missing field.
    Empty,
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a form value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FieldValue::Flag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<Self::Value, E> {
        Ok(FieldValue::Empty)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Empty)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        FieldValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(FieldValue::Empty)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(FieldValue::Empty)
    }
}

/// Raw checkout form submission: field name to value.
///
/// Nothing here is validated. Pass it to [`validate`](super::validate).
///
/// ```
/// use dinedash_core::CheckoutInput;
///
/// let input = CheckoutInput::new()
///     .with_text("fullName", "Jane Doe")
///     .with_flag("agreeToTerms", true);
/// assert_eq!(input.text("fullName"), "Jane Doe");
/// assert_eq!(input.text("city"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutInput(BTreeMap<String, FieldValue>);

impl CheckoutInput {
    /// Create an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style text setter.
    #[must_use]
    pub fn with_text(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    /// Builder-style checkbox setter.
    #[must_use]
    pub fn with_flag(mut self, field: &str, value: bool) -> Self {
        self.set_flag(field, value);
        self
    }

    /// Builder-style removal.
    #[must_use]
    pub fn without(mut self, field: &str) -> Self {
        self.remove(field);
        self
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.0
            .insert(field.to_owned(), FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.0.insert(field.to_owned(), FieldValue::Flag(value));
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.0.remove(field)
    }

    /// Raw value, if the field was submitted at all.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Whether the field carries a value (an explicit `null` does not count).
    #[must_use]
    pub fn is_present(&self, field: &str) -> bool {
        matches!(
            self.0.get(field),
            Some(FieldValue::Text(_) | FieldValue::Flag(_))
        )
    }

    /// Text value of a field; missing and non-text fields read as `""`.
    #[must_use]
    pub fn text(&self, field: &str) -> &str {
        match self.0.get(field) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Text value of an optional field; missing or blank reads as `None`.
    #[must_use]
    pub fn optional_text(&self, field: &str) -> Option<String> {
        Some(self.text(field))
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    /// Checkbox value of a field; anything but a boolean reads as `None`.
    #[must_use]
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.0.get(field) {
            Some(FieldValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for CheckoutInput {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_values() {
        let input: CheckoutInput = serde_json::from_str(
            r#"{"fullName":"Jane Doe","agreeToTerms":true,"addressLine2":null}"#,
        )
        .unwrap();
        assert_eq!(input.text(fields::FULL_NAME), "Jane Doe");
        assert_eq!(input.flag(fields::AGREE_TO_TERMS), Some(true));
        assert_eq!(input.get(fields::ADDRESS_LINE2), Some(&FieldValue::Empty));
        assert!(!input.is_present(fields::ADDRESS_LINE2));
    }

    #[test]
    fn test_deserialize_numbers_as_text() {
        let input: CheckoutInput =
            serde_json::from_str(r#"{"postalCode":12345,"cardCvv":123,"phone":15559876543}"#)
                .unwrap();
        assert_eq!(input.text(fields::POSTAL_CODE), "12345");
        assert_eq!(input.text(fields::CARD_CVV), "123");
        assert_eq!(input.text(fields::PHONE), "15559876543");
    }

    #[test]
    fn test_deserialize_nested_values_as_empty() {
        let input: CheckoutInput =
            serde_json::from_str(r#"{"city":["Metro","City"],"country":{"code":"US"},"fullName":"Jane Doe"}"#)
                .unwrap();
        assert_eq!(input.get(fields::CITY), Some(&FieldValue::Empty));
        assert_eq!(input.get(fields::COUNTRY), Some(&FieldValue::Empty));
        assert_eq!(input.text(fields::FULL_NAME), "Jane Doe");
    }

    #[test]
    fn test_text_of_flag_is_empty() {
        let input = CheckoutInput::new().with_flag(fields::CITY, true);
        assert_eq!(input.text(fields::CITY), "");
    }

    #[test]
    fn test_flag_of_text_is_none() {
        let input = CheckoutInput::new().with_text(fields::AGREE_TO_TERMS, "true");
        assert_eq!(input.flag(fields::AGREE_TO_TERMS), None);
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        let input = CheckoutInput::new()
            .with_text(fields::DISCOUNT_CODE, "")
            .with_text(fields::ADDRESS_LINE2, "Apt 4");
        assert_eq!(input.optional_text(fields::DISCOUNT_CODE), None);
        assert_eq!(
            input.optional_text(fields::ADDRESS_LINE2).as_deref(),
            Some("Apt 4")
        );
    }
}
