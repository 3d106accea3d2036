//! Shop Server - order lifecycle and stock consistency core
//!
//! Library crate behind the (external) HTTP transport. Provides:
//!
//! - **storage** (`store`): embedded redb store; one write transaction is
//!   the unit of work spanning order and stock mutations
//! - **stock ledger** (`store::catalog`): the only component allowed to
//!   mutate product stock, with a non-negativity guarantee
//! - **order store** (`store::orders`): order persistence with optimistic
//!   concurrency on updates
//! - **lifecycle** (`lifecycle`): order creation, status transitions and
//!   cancellation against the state machine and business windows
//! - **reporting** (`reporting`): read-only stock and delivered-order
//!   aggregations
//!
//! # Module structure
//!
//! ```text
//! shop-server/src/
//! ├── core/        # configuration
//! ├── common/      # logging infrastructure
//! ├── store/       # redb storage, stock ledger, order store
//! ├── lifecycle/   # order lifecycle manager, state machine, clock
//! └── reporting/   # read-only aggregation facade
//! ```

pub mod common;
pub mod core;
pub mod lifecycle;
pub mod reporting;
pub mod store;

// Re-export public types
pub use crate::core::Config;
pub use lifecycle::{Clock, OrderLifecycle, SystemClock};
pub use reporting::{ReportingService, StockReport};
pub use store::{ShopStorage, StorageError, StoreResult};

// Re-export the domain surface from shared
pub use shared::{
    ErrorCategory, ErrorCode, Order, OrderItem, OrderLineInput, OrderStatus, Product,
    ProductCreate, ShopError, ShopResult,
};

// Re-export logger functions
pub use common::logger::{cleanup_old_logs, init_logger, init_logger_with_file};
