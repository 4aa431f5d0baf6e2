//! Enums for checkout choices and order lifecycle.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentMethod {
    /// Form value for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::PayPal => "paypal",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "paypal" => Ok(Self::PayPal),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// How the bill is shared. Carried through checkout without affecting price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillSplitting {
    #[default]
    Individual,
    SplitEvenly,
}

impl BillSplitting {
    /// Form value for this option.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::SplitEvenly => "split_evenly",
        }
    }
}

impl fmt::Display for BillSplitting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillSplitting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "split_evenly" => Ok(Self::SplitEvenly),
            _ => Err(format!("invalid bill splitting option: {s}")),
        }
    }
}

/// Delivery order status as shown on the tracking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Placed,
        Self::Confirmed,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Placed => "Order Placed",
            Self::Confirmed => "Order Confirmed",
            Self::Preparing => "Preparing",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    /// Parses a label (case-insensitive) or the snake_case serde name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(wanted)
                    || serde_name(*status).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("invalid order status: {s}"))
    }
}

const fn serde_name(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Placed => "placed",
        OrderStatus::Confirmed => "confirmed",
        OrderStatus::Preparing => "preparing",
        OrderStatus::OutForDelivery => "out_for_delivery",
        OrderStatus::Delivered => "delivered",
        OrderStatus::Cancelled => "cancelled",
    }
}

/// Visual variant of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
}
