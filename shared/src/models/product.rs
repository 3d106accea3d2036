//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// `stock` is owned by the stock ledger: no component outside it may write
/// the field, and committed state always satisfies `stock >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Current catalog price, non-negative
    pub price: Decimal,
    /// Available quantity, non-negative
    pub stock: i64,
    /// Perishable products are never returnable
    #[serde(default)]
    pub perishable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub perishable: Option<bool>,
}
