//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use dinedash_core::define_id;
/// define_id!(DishId);
/// define_id!(RestaurantId);
///
/// let dish = DishId::new("truffle-pasta");
/// let restaurant = RestaurantId::new("elysian-bites");
///
/// // These are different types, so this won't compile:
/// // let _: DishId = restaurant;
/// assert_eq!(dish.as_str(), "truffle-pasta");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Menu item / line item identifier (unique within an order)
define_id!(ItemId);

/// Errors that can occur when parsing an [`OrderNumber`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderNumberError {
    /// The input does not start with `ORD`.
    #[error("order number must start with {prefix}")]
    MissingPrefix {
        /// Expected prefix.
        prefix: &'static str,
    },
    /// The numeric part is not a five-digit number in range.
    #[error("order number must end with a number between {min} and {max}")]
    OutOfRange {
        /// Smallest allowed number.
        min: u32,
        /// Largest allowed number.
        max: u32,
    },
}

/// Customer-facing order number, e.g. `ORD48213`.
///
/// The numeric part is always five digits (10000-99999).
///
/// ```
/// use dinedash_core::OrderNumber;
///
/// let number: OrderNumber = "ORD48213".parse().unwrap();
/// assert_eq!(number.value(), 48213);
/// assert_eq!(number.to_string(), "ORD48213");
/// assert!("ORD123".parse::<OrderNumber>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(u32);

impl OrderNumber {
    /// Display prefix.
    pub const PREFIX: &'static str = "ORD";
    /// Smallest numeric part.
    pub const MIN: u32 = 10_000;
    /// Largest numeric part.
    pub const MAX: u32 = 99_999;

    /// Create an order number from its numeric part.
    ///
    /// # Errors
    ///
    /// Returns [`OrderNumberError::OutOfRange`] if `value` is not five digits.
    pub const fn new(value: u32) -> Result<Self, OrderNumberError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(OrderNumberError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Get the numeric part.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or(OrderNumberError::MissingPrefix {
                prefix: Self::PREFIX,
            })?;

        let out_of_range = OrderNumberError::OutOfRange {
            min: Self::MIN,
            max: Self::MAX,
        };
        if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(out_of_range);
        }
        let value = digits.parse::<u32>().map_err(|_| out_of_range)?;
        Self::new(value)
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = OrderNumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.to_string()
    }
}
