//! Order status state machine
//!
//! The transition table is closed: anything not listed here is rejected.
//! Cancellation is not part of the table because it is a separate
//! operation with its own window check; asking `update_status` to cancel
//! is an invalid transition like any other unlisted pair.

use shared::{OrderStatus, ShopError, ShopResult};

/// What a requested status change amounts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransitionKind {
    /// Target equals current status: accepted, but nothing changes
    NoOp,
    /// Forward step with no side effects (Confirmed→Sent, Sent→Delivered)
    Plain,
    /// Delivered→Returned: guarded by window and perishable checks,
    /// releases stock
    Return,
}

/// Classify a requested transition, rejecting anything outside the table
pub(crate) fn classify(from: OrderStatus, to: OrderStatus) -> ShopResult<TransitionKind> {
    use OrderStatus::*;
    match (from, to) {
        (a, b) if a == b => Ok(TransitionKind::NoOp),
        (Confirmed, Sent) | (Sent, Delivered) => Ok(TransitionKind::Plain),
        (Delivered, Returned) => Ok(TransitionKind::Return),
        _ => Err(ShopError::InvalidTransition { from, to }),
    }
}
