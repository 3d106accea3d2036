//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification
///
/// Transport layers map categories to response semantics (404 vs 422 vs
/// 409 vs 503) without inspecting individual codes or messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Referenced entity does not exist
    NotFound,
    /// Request rejected before any mutation
    Validation,
    /// Request understood but forbidden by a business rule
    BusinessRule,
    /// Lost update detected, safe to retry
    Conflict,
    /// Storage or I/O failure, possibly transient
    Transient,
}

impl ErrorCategory {
    /// Classify an error code
    pub fn from_code(code: ErrorCode) -> Self {
        match code {
            ErrorCode::OrderNotFound | ErrorCode::ProductNotFound => Self::NotFound,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyOrder
            | ErrorCode::InvalidQuantity
            | ErrorCode::InvalidDateRange => Self::Validation,
            ErrorCode::InsufficientStock
            | ErrorCode::InvalidTransition
            | ErrorCode::ReturnWindowExpired
            | ErrorCode::PerishableNotReturnable
            | ErrorCode::CancellationWindowExpired => Self::BusinessRule,
            ErrorCode::ConcurrencyConflict => Self::Conflict,
            ErrorCode::StorageFailure | ErrorCode::Unknown => Self::Transient,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::BusinessRule => "business_rule",
            Self::Conflict => "conflict",
            Self::Transient => "transient",
        }
    }
}
