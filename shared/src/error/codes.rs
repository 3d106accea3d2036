//! Unified error codes for the shop backend
//!
//! Error codes are stable u16 values shared with transport-layer consumers.
//! They are organized by range:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a plain u16 for cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order contains no items
    EmptyOrder = 4002,
    /// Line quantity below 1
    InvalidQuantity = 4003,
    /// Status transition not permitted by the state machine
    InvalidTransition = 4010,
    /// Return attempted after the return window closed
    ReturnWindowExpired = 4011,
    /// Order contains a perishable product and cannot be returned
    PerishableNotReturnable = 4012,
    /// Cancellation attempted after the cancellation window closed
    CancellationWindowExpired = 4013,
    /// Reporting period has from > to
    InvalidDateRange = 4020,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Requested quantity exceeds available stock
    InsufficientStock = 6002,

    // ==================== 9xxx: System ====================
    /// Optimistic concurrency check failed, caller should retry
    ConcurrencyConflict = 9001,
    /// Storage layer failure, possibly transient
    StorageFailure = 9002,
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::EmptyOrder),
            4003 => Ok(Self::InvalidQuantity),
            4010 => Ok(Self::InvalidTransition),
            4011 => Ok(Self::ReturnWindowExpired),
            4012 => Ok(Self::PerishableNotReturnable),
            4013 => Ok(Self::CancellationWindowExpired),
            4020 => Ok(Self::InvalidDateRange),
            6001 => Ok(Self::ProductNotFound),
            6002 => Ok(Self::InsufficientStock),
            9001 => Ok(Self::ConcurrencyConflict),
            9002 => Ok(Self::StorageFailure),
            other => Err(format!("unknown error code: {}", other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u16)
    }
}
