//! Order domain types
//!
//! The order entity, its line items and the status enum. Status transition
//! rules live in the server's lifecycle module; these types only carry
//! state.

pub mod types;

pub use types::{Order, OrderItem, OrderLineInput, OrderStatus};
