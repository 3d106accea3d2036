//! Order lifecycle manager
//!
//! Owns every mutation of orders and, through the stock ledger, of product
//! stock. Each operation runs inside a single redb write transaction:
//! either the order change and all of its stock movements commit together,
//! or the transaction is dropped and nothing happened.

use crate::core::Config;
use crate::store::{OrderStore, ProductCatalog, ShopStorage};
use std::sync::Arc;
use uuid::Uuid;

use shared::{
    Order, OrderItem, OrderLineInput, OrderStatus, Product, ProductCreate, ShopError, ShopResult,
};

use super::clock::{Clock, SystemClock};
use super::order_number;
use super::transition::{self, TransitionKind};

#[derive(Clone)]
pub struct OrderLifecycle {
    storage: ShopStorage,
    catalog: ProductCatalog,
    orders: OrderStore,
    clock: Arc<dyn Clock>,
    cancellation_window_hours: i64,
    return_window_days: i64,
}

impl OrderLifecycle {
    pub fn new(storage: ShopStorage, config: &Config) -> Self {
        Self {
            catalog: ProductCatalog::new(storage.clone()),
            orders: OrderStore::new(storage.clone()),
            storage,
            clock: Arc::new(SystemClock),
            cancellation_window_hours: config.cancellation_window_hours,
            return_window_days: config.return_window_days,
        }
    }

    /// Build a manager with an injected clock (window boundary tests)
    #[cfg(test)]
    pub(crate) fn with_clock(
        storage: ShopStorage,
        clock: Arc<dyn Clock>,
        cancellation_window_hours: i64,
        return_window_days: i64,
    ) -> Self {
        Self {
            catalog: ProductCatalog::new(storage.clone()),
            orders: OrderStore::new(storage.clone()),
            storage,
            clock,
            cancellation_window_hours,
            return_window_days,
        }
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn create_product(&self, data: ProductCreate) -> ShopResult<Product> {
        self.catalog.insert(data)
    }

    pub fn get_product(&self, id: &str) -> ShopResult<Product> {
        self.catalog
            .get(id)?
            .ok_or_else(|| ShopError::ProductNotFound(id.to_string()))
    }

    pub fn list_products(&self) -> ShopResult<Vec<Product>> {
        Ok(self.catalog.get_all()?)
    }

    // ========================================================================
    // Order creation
    // ========================================================================

    /// Create an order from product/quantity lines
    ///
    /// Validates the request, reserves stock for every line, snapshots each
    /// product's current name and price into the order, and persists the
    /// order as Confirmed. Any failed line aborts the whole transaction,
    /// leaving stock untouched.
    pub fn create_order(&self, lines: Vec<OrderLineInput>) -> ShopResult<Order> {
        if lines.is_empty() {
            return Err(ShopError::EmptyOrder);
        }
        for line in &lines {
            if line.quantity < 1 {
                return Err(ShopError::InvalidQuantity {
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                });
            }
        }

        let now = self.clock.now();
        let txn = self.storage.begin_write().map_err(ShopError::from)?;

        let mut items = Vec::with_capacity(lines.len());
        for line in &lines {
            let product = self
                .catalog
                .try_reserve(&txn, &line.product_id, line.quantity)?;
            items.push(OrderItem {
                product_id: product.id,
                product_name: product.name,
                quantity: line.quantity,
                unit_price: product.price,
            });
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            order_number: order_number::generate(now),
            status: OrderStatus::Confirmed,
            items,
            created_at: now,
            updated_at: None,
            version: 0,
        };
        self.orders.insert(&txn, &order)?;
        txn.commit().map_err(crate::store::storage_err)?;

        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            lines = order.items.len(),
            total = %order.total_amount(),
            "Order created"
        );
        Ok(order)
    }

    // ========================================================================
    // Order reads
    // ========================================================================

    pub fn get_order(&self, id: &str) -> ShopResult<Order> {
        self.orders
            .get(id)?
            .ok_or_else(|| ShopError::OrderNotFound(id.to_string()))
    }

    pub fn list_orders(&self) -> ShopResult<Vec<Order>> {
        Ok(self.orders.get_all()?)
    }

    pub fn list_orders_by_status(&self, status: OrderStatus) -> ShopResult<Vec<Order>> {
        Ok(self.orders.get_by_status(status)?)
    }

    /// Delivered orders created within `[from, to]`, bounds inclusive
    pub fn delivered_in_period(
        &self,
        from: chrono::DateTime<chrono::Utc>,
        to: chrono::DateTime<chrono::Utc>,
    ) -> ShopResult<Vec<Order>> {
        if from > to {
            return Err(ShopError::InvalidDateRange {
                from: from.to_rfc3339(),
                to: to.to_rfc3339(),
            });
        }
        Ok(self.orders.get_delivered_in_period(from, to)?)
    }

    // ========================================================================
    // Status transitions
    // ========================================================================

    /// Move an order to a new status
    ///
    /// Requests outside the state machine are rejected without touching
    /// state. A request for the order's current status succeeds and changes
    /// nothing, `updated_at` included. Delivered→Returned is additionally
    /// guarded by the return window and the perishable rule, and puts every
    /// line's stock back in the same transaction.
    pub fn update_status(&self, order_id: &str, new_status: OrderStatus) -> ShopResult<Order> {
        let txn = self.storage.begin_write().map_err(ShopError::from)?;
        let order = self
            .orders
            .get_txn(&txn, order_id)?
            .ok_or_else(|| ShopError::OrderNotFound(order_id.to_string()))?;

        let kind = transition::classify(order.status, new_status)?;
        if kind == TransitionKind::NoOp {
            // Nothing to write, dropping the transaction rolls it back
            return Ok(order);
        }

        let now = self.clock.now();
        if kind == TransitionKind::Return {
            self.check_return_allowed(&txn, &order, now)?;
            for item in &order.items {
                self.catalog.release(&txn, &item.product_id, item.quantity)?;
            }
        }

        let mut changed = order;
        let from = changed.status;
        changed.status = new_status;
        changed.updated_at = Some(now);
        let updated = self.orders.update(&txn, &changed)?;
        txn.commit().map_err(crate::store::storage_err)?;

        tracing::info!(
            order_id = %updated.id,
            from = %from,
            to = %updated.status,
            "Order status updated"
        );
        Ok(updated)
    }

    /// Cancel an order
    ///
    /// Allowed for any non-terminal order while the cancellation window
    /// (measured from `created_at`) is open. The order is kept with status
    /// Cancelled, never deleted, and every line's stock goes back to the
    /// catalog in the same transaction.
    pub fn cancel_order(&self, order_id: &str) -> ShopResult<Order> {
        let txn = self.storage.begin_write().map_err(ShopError::from)?;
        let order = self
            .orders
            .get_txn(&txn, order_id)?
            .ok_or_else(|| ShopError::OrderNotFound(order_id.to_string()))?;

        // Terminal orders cannot be cancelled; a second cancel would
        // release stock twice
        if matches!(order.status, OrderStatus::Cancelled | OrderStatus::Returned) {
            return Err(ShopError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Cancelled,
            });
        }

        let now = self.clock.now();
        let age = now.signed_duration_since(order.created_at);
        if age > chrono::Duration::hours(self.cancellation_window_hours) {
            return Err(ShopError::CancellationWindowExpired {
                window_hours: self.cancellation_window_hours,
            });
        }

        for item in &order.items {
            self.catalog.release(&txn, &item.product_id, item.quantity)?;
        }

        let mut changed = order;
        changed.status = OrderStatus::Cancelled;
        changed.updated_at = Some(now);
        let updated = self.orders.update(&txn, &changed)?;
        txn.commit().map_err(crate::store::storage_err)?;

        tracing::info!(
            order_id = %updated.id,
            order_number = %updated.order_number,
            "Order cancelled"
        );
        Ok(updated)
    }

    /// Return guards: window open and no perishable line
    ///
    /// The window is measured from `created_at`. The perishable flag is
    /// read from the current catalog entry; a product no longer in the
    /// catalog cannot block the return.
    fn check_return_allowed(
        &self,
        txn: &redb::WriteTransaction,
        order: &Order,
        now: chrono::DateTime<chrono::Utc>,
    ) -> ShopResult<()> {
        let age = now.signed_duration_since(order.created_at);
        if age > chrono::Duration::days(self.return_window_days) {
            return Err(ShopError::ReturnWindowExpired {
                window_days: self.return_window_days,
            });
        }

        for item in &order.items {
            let perishable = self
                .catalog
                .get_txn(txn, &item.product_id)?
                .map(|p| p.perishable)
                .unwrap_or(false);
            if perishable {
                return Err(ShopError::PerishableNotReturnable);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for OrderLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderLifecycle")
            .field("cancellation_window_hours", &self.cancellation_window_hours)
            .field("return_window_days", &self.return_window_days)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
