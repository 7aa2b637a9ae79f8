//! Orders
//!
//! Orders are created once at checkout. Only the server changes an order's
//! status afterwards, so every type here is a read-only projection except the
//! [`PlaceOrder`] request body.

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    addresses::Address,
    foods::Food,
    ids::Id,
    pricing::{PricingError, checked_sum, line_total},
};

/// How many orders count as "recent".
pub const RECENT_ORDERS: usize = 3;

/// Order Id
pub type OrderId = Id<Order>;

/// Order Item Id
pub type OrderItemId = Id<OrderItem>;

/// Order status as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, not yet dispatched.
    #[default]
    Pending,

    /// On its way.
    OutForDelivery,

    /// Delivered.
    Completed,

    /// Cancelled.
    Cancelled,

    /// A status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::OutForDelivery => "Out for delivery",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

/// Payment method chosen at checkout.
///
/// Decoding is case-insensitive and maps names this client does not know to
/// [`PaymentMethod::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,

    /// Digital wallet.
    Wallet,

    /// Cash on delivery.
    Cod,

    /// A method recorded by the server that this client does not know about.
    Unknown,
}

impl PaymentMethod {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Wallet => "Digital Wallet",
            Self::Cod => "Cash on Delivery",
            Self::Unknown => "Other",
        }
    }
}

/// Error returned when a payment method name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment method `{0}` (expected card, wallet or cod)")]
pub struct ParsePaymentMethodError(String);

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "wallet" => Ok(Self::Wallet),
            "cod" | "cash" => Ok(Self::Cod),
            _ => Err(ParsePaymentMethodError(value.to_string())),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Creation time as the server sends it: either epoch milliseconds or a
/// date-time string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Milliseconds since the Unix epoch.
    Millis(i64),

    /// RFC 3339 timestamp or zone-less date-time (taken as UTC).
    Text(String),
}

impl CreatedAt {
    /// Parse into a timestamp, if the value is well formed.
    #[must_use]
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Millis(millis) => Timestamp::from_millisecond(*millis).ok(),
            Self::Text(text) => text.parse::<Timestamp>().ok().or_else(|| {
                text.parse::<DateTime>()
                    .ok()
                    .and_then(|datetime| datetime.to_zoned(TimeZone::UTC).ok())
                    .map(|zoned| zoned.timestamp())
            }),
        }
    }
}

/// Line of a placed order, snapshotted from the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Server id
    pub id: OrderItemId,

    /// Food ordered
    pub food: Food,

    /// Quantity ordered
    pub quantity: u32,

    /// Extra ingredients
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Line total charged
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

impl OrderItem {
    /// Line total: the charged amount when known, otherwise unit price × quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the product exceeds the decimal range.
    pub fn line_total(&self) -> Result<Decimal, PricingError> {
        match self.total_price {
            Some(total) => Ok(total),
            None => line_total(self.food.price, self.quantity),
        }
    }
}

/// Order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server id
    pub id: OrderId,

    /// Items snapshotted at placement
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Where the order goes
    #[serde(default)]
    pub delivery_address: Option<Address>,

    /// How it is paid for
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,

    /// Delivery status
    #[serde(rename = "orderStatus", alias = "status", default)]
    pub status: OrderStatus,

    /// Amount charged
    #[serde(default)]
    pub total_amount: Decimal,

    /// When the order was placed
    #[serde(default)]
    pub created_at: Option<CreatedAt>,
}

impl Order {
    /// When the order was placed, if the server sent a parseable time.
    #[must_use]
    pub fn placed_at(&self) -> Option<Timestamp> {
        self.created_at.as_ref().and_then(CreatedAt::timestamp)
    }

    /// Sum of item quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Request body for placing an order from the current cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    /// Delivery address
    pub delivery_address: Address,

    /// Payment method
    pub payment_method: PaymentMethod,
}

/// Order history statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistory<'a> {
    /// Number of orders
    pub total_orders: usize,

    /// Sum of order totals
    pub total_spent: Decimal,

    /// Most recent orders, newest first
    pub recent: SmallVec<[&'a Order; RECENT_ORDERS]>,
}

impl<'a> OrderHistory<'a> {
    /// Summarise `orders`, which the server returns newest first.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total spent exceeds the decimal range.
    pub fn from_orders(orders: &'a [Order]) -> Result<Self, PricingError> {
        Ok(Self {
            total_orders: orders.len(),
            total_spent: checked_sum(orders.iter().map(|order| order.total_amount))?,
            recent: orders.iter().take(RECENT_ORDERS).collect(),
        })
    }
}
