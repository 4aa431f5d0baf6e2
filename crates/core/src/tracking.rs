//! Order tracking derivations: progress bars and status badge.

use serde::Serialize;

use crate::types::{BadgeVariant, OrderStatus};

impl OrderStatus {
    /// Overall progress percentage shown under the tracking map.
    #[must_use]
    pub const fn overall_progress(&self) -> u8 {
        match self {
            Self::Delivered => 100,
            Self::OutForDelivery => 75,
            Self::Preparing => 50,
            Self::Confirmed => 25,
            Self::Placed | Self::Cancelled => 0,
        }
    }

    /// Courier position along the route, given the courier's route progress.
    ///
    /// Only meaningful while out for delivery; delivered orders sit at 100.
    #[must_use]
    pub fn map_progress(&self, route_progress: u8) -> u8 {
        match self {
            Self::OutForDelivery => route_progress.min(100),
            Self::Delivered => 100,
            _ => 0,
        }
    }
}

impl BadgeVariant {
    /// Pick a badge variant for a free-text status label.
    ///
    /// Matching is case-insensitive on substrings; the first matching group
    /// wins.
    ///
    /// ```
    /// use dinedash_core::BadgeVariant;
    ///
    /// assert_eq!(BadgeVariant::for_status_label("Out for Delivery"), BadgeVariant::Secondary);
    /// assert_eq!(BadgeVariant::for_status_label("Payment failed"), BadgeVariant::Destructive);
    /// ```
    #[must_use]
    pub fn for_status_label(label: &str) -> Self {
        let label = label.to_lowercase();
        let any = |needles: &[&str]| needles.iter().any(|needle| label.contains(needle));

        if any(&["delivered"]) {
            Self::Default
        } else if any(&["out for delivery", "en route"]) {
            Self::Secondary
        } else if any(&["preparing", "confirmed", "placed"]) {
            Self::Outline
        } else if any(&["cancelled", "failed"]) {
            Self::Destructive
        } else {
            Self::Default
        }
    }
}

/// Whether to show the "en route" marker on the tracking map.
#[must_use]
pub fn shows_en_route_label(status_label: &str, progress: u8) -> bool {
    let label = status_label.to_lowercase();
    progress > 0
        && progress < 100
        && (label.contains("out for delivery") || label.contains("en route"))
}

/// Everything the tracking card needs for one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSummary {
    pub status: OrderStatus,
    pub label: &'static str,
    pub badge: BadgeVariant,
    pub overall_progress: u8,
    pub map_progress: u8,
    pub en_route: bool,
}

impl TrackingSummary {
    #[must_use]
    pub fn new(status: OrderStatus, route_progress: u8) -> Self {
        let label = status.label();
        let map_progress = status.map_progress(route_progress);
        Self {
            status,
            label,
            badge: BadgeVariant::for_status_label(label),
            overall_progress: status.overall_progress(),
            map_progress,
            en_route: shows_en_route_label(label, map_progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_progress() {
        assert_eq!(OrderStatus::Delivered.overall_progress(), 100);
        assert_eq!(OrderStatus::OutForDelivery.overall_progress(), 75);
        assert_eq!(OrderStatus::Preparing.overall_progress(), 50);
        assert_eq!(OrderStatus::Confirmed.overall_progress(), 25);
        assert_eq!(OrderStatus::Placed.overall_progress(), 0);
        assert_eq!(OrderStatus::Cancelled.overall_progress(), 0);
    }

    #[test]
    fn test_map_progress() {
        assert_eq!(OrderStatus::OutForDelivery.map_progress(60), 60);
        assert_eq!(OrderStatus::OutForDelivery.map_progress(140), 100);
        assert_eq!(OrderStatus::Delivered.map_progress(10), 100);
        assert_eq!(OrderStatus::Preparing.map_progress(60), 0);
    }

    #[test]
    fn test_badge_variant_for_labels() {
        assert_eq!(BadgeVariant::for_status_label("Delivered"), BadgeVariant::Default);
        assert_eq!(BadgeVariant::for_status_label("EN ROUTE"), BadgeVariant::Secondary);
        assert_eq!(BadgeVariant::for_status_label("Order Placed"), BadgeVariant::Outline);
        assert_eq!(BadgeVariant::for_status_label("Preparing"), BadgeVariant::Outline);
        assert_eq!(BadgeVariant::for_status_label("Cancelled"), BadgeVariant::Destructive);
        assert_eq!(BadgeVariant::for_status_label("Unknown"), BadgeVariant::Default);
    }

    #[test]
    fn test_badge_variant_first_match_wins() {
        // "delivered" is checked before "cancelled"
        assert_eq!(
            BadgeVariant::for_status_label("Delivered then cancelled"),
            BadgeVariant::Default
        );
    }

    #[test]
    fn test_en_route_label() {
        assert!(shows_en_route_label("Out for Delivery", 60));
        assert!(!shows_en_route_label("Out for Delivery", 0));
        assert!(!shows_en_route_label("Out for Delivery", 100));
        assert!(!shows_en_route_label("Preparing", 50));
    }

    #[test]
    fn test_summary_out_for_delivery() {
        let summary = TrackingSummary::new(OrderStatus::OutForDelivery, 60);
        assert_eq!(summary.overall_progress, 75);
        assert_eq!(summary.map_progress, 60);
        assert_eq!(summary.badge, BadgeVariant::Secondary);
        assert!(summary.en_route);
    }
}
