//! Order lifecycle
//!
//! The state machine (Confirmed → Sent → Delivered, with Returned and
//! Cancelled as guarded exits), the business windows around it, and the
//! manager that drives both against storage.

pub mod clock;
pub mod manager;
mod order_number;
mod transition;

pub use clock::{Clock, SystemClock};
pub use manager::OrderLifecycle;
