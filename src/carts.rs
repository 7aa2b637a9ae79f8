//! Carts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    foods::{Food, FoodId},
    ids::Id,
    pricing::{PricingError, Totals, checked_sum, line_total},
};

/// Cart Id
pub type CartId = Id<Cart>;

/// Cart Item Id
pub type CartItemId = Id<CartItem>;

/// Cart snapshot as returned by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Server id
    #[serde(default)]
    pub id: Option<CartId>,

    /// Items in the order they were added
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Server-computed total, informational only
    #[serde(default)]
    pub total: Option<Decimal>,
}

impl Cart {
    /// Returns true if the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id.
    #[must_use]
    pub fn item(&self, id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Sum of item quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of unit price × quantity over the items present.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the sum exceeds the decimal range.
    pub fn subtotal(&self) -> Result<Decimal, PricingError> {
        let lines = self
            .items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;

        checked_sum(lines)
    }

    /// Checkout totals for the cart.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the arithmetic exceeds the decimal range.
    pub fn totals(&self) -> Result<Totals, PricingError> {
        Totals::from_subtotal(self.subtotal()?)
    }
}

/// Cart item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Server id
    pub id: CartItemId,

    /// Food this line refers to
    pub food: Food,

    /// Quantity, at least one
    pub quantity: u32,

    /// Extra ingredients chosen for this line
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Server-computed line total, informational only
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

impl CartItem {
    /// Unit price, resolved from the food.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.food.price
    }

    /// Unit price × quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the product exceeds the decimal range.
    pub fn line_total(&self) -> Result<Decimal, PricingError> {
        line_total(self.unit_price(), self.quantity)
    }
}

/// What a requested quantity means for a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Set the line to this (positive) quantity.
    Set(u32),

    /// Remove the line.
    Remove,
}

impl QuantityChange {
    /// Interpret a requested quantity. Anything ≤ 0 removes the line.
    #[must_use]
    pub fn requested(quantity: i64) -> Self {
        if quantity <= 0 {
            return Self::Remove;
        }

        Self::Set(u32::try_from(quantity).unwrap_or(u32::MAX))
    }

    /// Interpret `current + delta`.
    #[must_use]
    pub fn adjusted(current: u32, delta: i64) -> Self {
        Self::requested(i64::from(current).saturating_add(delta))
    }
}

/// Request body for adding a food to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    /// Food to add
    pub food_id: FoodId,

    /// Quantity to add
    pub quantity: u32,

    /// Extra ingredients
    pub ingredients: Vec<String>,
}

impl AddCartItem {
    /// Add a single unit of `food_id` with no extra ingredients.
    #[must_use]
    pub fn single(food_id: FoodId) -> Self {
        Self {
            food_id,
            quantity: 1,
            ingredients: Vec::new(),
        }
    }
}

/// Request body for changing a cart line's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItem {
    /// Line to update
    pub cart_item_id: CartItemId,

    /// New quantity, at least one
    pub quantity: u32,
}
