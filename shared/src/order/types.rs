//! Order entity and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Normal flow is Confirmed → Sent → Delivered, with Returned reachable
/// from Delivered and Cancelled reachable while the cancellation window is
/// open. Cancelled and Returned are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Confirmed,
    Sent,
    Delivered,
    Returned,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Confirmed => "CONFIRMED",
            Self::Sent => "SENT",
            Self::Delivered => "DELIVERED",
            Self::Returned => "RETURNED",
            Self::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// Order line item
///
/// `unit_price` and `product_name` are snapshots taken at order creation;
/// later catalog changes never rewrite them. `product_id` is a weak
/// reference kept for stock release and display lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    /// Quantity ordered, at least 1
    pub quantity: i64,
    /// Price at the time of sale
    pub unit_price: Decimal,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Human-readable unique number, e.g. "CMD-20260823-7KQ2ZD"
    pub order_number: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Optimistic concurrency stamp, owned by the order store
    #[serde(default)]
    pub version: u64,
}

impl Order {
    /// Total amount, always recomputed from items so it cannot drift
    pub fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| Decimal::from(item.quantity) * item.unit_price)
            .sum()
    }
}

/// Create-order request line: product and quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub product_id: String,
    pub quantity: i64,
}
