//! Error taxonomy for the shop backend
//!
//! Every expected failure is a typed `ShopError` variant carrying its
//! context; callers branch on variants or on `code()`/`category()`, never
//! on message strings. Conflict and storage failures are the only
//! retryable kinds.

pub mod category;
pub mod codes;

pub use category::ErrorCategory;
pub use codes::ErrorCode;

use crate::order::OrderStatus;
use thiserror::Error;

/// Domain error for catalog, stock and order lifecycle operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Order must contain at least one product")]
    EmptyOrder,

    #[error("Quantity must be at least 1 for product {product_id}, got {quantity}")]
    InvalidQuantity { product_id: String, quantity: i64 },

    #[error("Invalid date range: from {from} is after to {to}")]
    InvalidDateRange { from: String, to: String },

    #[error(
        "Not enough stock for product {product_id}. Available: {available}, Requested: {requested}"
    )]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    #[error("Transition from {from} to {to} is not allowed")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Return period of {window_days} days has expired")]
    ReturnWindowExpired { window_days: i64 },

    #[error("Cannot return order containing perishable items")]
    PerishableNotReturnable,

    #[error("Order cannot be cancelled after {window_hours} hours")]
    CancellationWindowExpired { window_hours: i64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ShopError {
    /// Stable error code for transport serialization
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProductNotFound(_) => ErrorCode::ProductNotFound,
            Self::OrderNotFound(_) => ErrorCode::OrderNotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::EmptyOrder => ErrorCode::EmptyOrder,
            Self::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            Self::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            Self::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            Self::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            Self::ReturnWindowExpired { .. } => ErrorCode::ReturnWindowExpired,
            Self::PerishableNotReturnable => ErrorCode::PerishableNotReturnable,
            Self::CancellationWindowExpired { .. } => ErrorCode::CancellationWindowExpired,
            Self::Conflict(_) => ErrorCode::ConcurrencyConflict,
            Self::Storage(_) => ErrorCode::StorageFailure,
        }
    }

    /// Classification used by transport layers for response mapping
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Whether the caller may retry the operation as-is
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Conflict | ErrorCategory::Transient
        )
    }
}

/// Result type for domain operations
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_u16() {
        for code in [
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderNotFound,
            ErrorCode::EmptyOrder,
            ErrorCode::InvalidQuantity,
            ErrorCode::InvalidTransition,
            ErrorCode::ReturnWindowExpired,
            ErrorCode::PerishableNotReturnable,
            ErrorCode::CancellationWindowExpired,
            ErrorCode::InvalidDateRange,
            ErrorCode::ProductNotFound,
            ErrorCode::InsufficientStock,
            ErrorCode::ConcurrencyConflict,
            ErrorCode::StorageFailure,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
    }

    #[test]
    fn only_conflict_and_storage_are_retryable() {
        assert!(ShopError::Conflict("lost update".into()).is_retryable());
        assert!(ShopError::Storage("io".into()).is_retryable());
        assert!(!ShopError::EmptyOrder.is_retryable());
        assert!(!ShopError::PerishableNotReturnable.is_retryable());
        assert!(
            !ShopError::InsufficientStock {
                product_id: "p-1".into(),
                available: 2,
                requested: 3,
            }
            .is_retryable()
        );
    }

    #[test]
    fn categories_distinguish_not_found_from_business_rule() {
        assert_eq!(
            ShopError::OrderNotFound("o-1".into()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            ShopError::ReturnWindowExpired { window_days: 14 }.category(),
            ErrorCategory::BusinessRule
        );
        assert_eq!(
            ShopError::InvalidDateRange {
                from: "2026-02-01".into(),
                to: "2026-01-01".into(),
            }
            .category(),
            ErrorCategory::Validation
        );
    }
}
