//! Shared types for the shop backend
//!
//! Domain entities, order types and the error taxonomy used by the
//! server core and by transport-layer consumers.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{ErrorCategory, ErrorCode, ShopError, ShopResult};
pub use models::{Product, ProductCreate};
pub use order::{Order, OrderItem, OrderLineInput, OrderStatus};
pub use serde::{Deserialize, Serialize};
