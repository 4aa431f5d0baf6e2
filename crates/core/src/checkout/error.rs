//! Field-level validation errors.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single user-correctable problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All problems found in one checkout submission.
///
/// Never empty when returned from [`validate`](super::validate), and holds at
/// most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("checkout form has {} invalid field(s)", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Record an error unless `field` already has one.
    pub fn push(&mut self, field: &str, message: &str) {
        if self.for_field(field).is_none() {
            self.0.push(ValidationError {
                field: field.to_owned(),
                message: message.to_owned(),
            });
        }
    }

    /// The error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Names of the failing fields, in report order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
