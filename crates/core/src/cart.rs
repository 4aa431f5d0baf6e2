//! In-memory shopping cart.
//!
//! Owned state for the cart page and header badge. Adding a dish that is
//! already in the cart bumps its counter instead of adding a second line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::{LineItem, PricingError};
use crate::types::ItemId;

/// Errors from cart mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// No line with this item id.
    #[error("item not in cart: {0}")]
    UnknownItem(ItemId),

    /// A line could not be turned into a priced line item.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// One dish in the cart and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Cart contents, in the order dishes were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of a dish. Returns the dish's new quantity.
    pub fn add(&mut self, id: impl Into<ItemId>, name: impl Into<String>, unit_price: Decimal) -> u32 {
        self.add_quantity(id, name, unit_price, 1)
    }

    /// Add `quantity` of a dish. Returns the dish's new quantity.
    ///
    /// A zero quantity leaves the cart unchanged.
    pub fn add_quantity(
        &mut self,
        id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> u32 {
        let id = id.into();
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(item_id = %id, quantity = line.quantity, "Incremented cart line");
            return line.quantity;
        }
        if quantity == 0 {
            return 0;
        }

        tracing::debug!(item_id = %id, quantity, "Added cart line");
        self.lines.push(CartLine {
            id,
            name: name.into(),
            unit_price,
            quantity,
        });
        quantity
    }

    /// Set a dish's quantity; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if the dish is not in the cart.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(id).map(|_| ());
        }
        let line = self
            .lines
            .iter_mut()
            .find(|line| &line.id == id)
            .ok_or_else(|| CartError::UnknownItem(id.clone()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove a dish entirely.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if the dish is not in the cart.
    pub fn remove(&mut self, id: &ItemId) -> Result<CartLine, CartError> {
        let index = self
            .lines
            .iter()
            .position(|line| &line.id == id)
            .ok_or_else(|| CartError::UnknownItem(id.clone()))?;
        Ok(self.lines.remove(index))
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of dishes, for the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Priced line items for [`compute_breakdown`](crate::compute_breakdown).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] if a line has a negative price or its
    /// merged total exceeds [`MAX_AMOUNT`](crate::pricing::MAX_AMOUNT).
    pub fn line_items(&self) -> Result<Vec<LineItem>, CartError> {
        self.lines
            .iter()
            .map(|line| {
                LineItem::new(line.id.clone(), line.unit_price, line.quantity)
                    .map(|item| item.with_name(line.name.clone()))
                    .map_err(CartError::from)
            })
            .collect()
    }
}

impl FromIterator<LineItem> for Cart {
    /// Build a cart from validated line items, merging repeated ids.
    fn from_iter<I: IntoIterator<Item = LineItem>>(items: I) -> Self {
        let mut cart = Self::new();
        for item in items {
            let name = item.name().unwrap_or_default().to_owned();
            cart.add_quantity(item.id().clone(), name, item.unit_price(), item.quantity());
        }
        cart
    }
}
