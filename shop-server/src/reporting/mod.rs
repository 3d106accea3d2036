//! Reporting
//!
//! Read-only aggregations over committed state. The façade carries no
//! business rules of its own; it reads through the lifecycle manager and
//! sums.

use crate::lifecycle::OrderLifecycle;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Order, ShopResult};

/// Aggregate stock position across the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReport {
    /// Sum of `stock` over all products
    pub total_stock_quantity: i64,
    /// Sum of `price * stock` over all products
    pub total_stock_value: Decimal,
}

#[derive(Debug, Clone)]
pub struct ReportingService {
    lifecycle: OrderLifecycle,
}

impl ReportingService {
    pub fn new(lifecycle: OrderLifecycle) -> Self {
        Self { lifecycle }
    }

    /// Current stock position: total quantity and total value
    pub fn stock_report(&self) -> ShopResult<StockReport> {
        let products = self.lifecycle.list_products()?;
        let mut report = StockReport {
            total_stock_quantity: 0,
            total_stock_value: Decimal::ZERO,
        };
        for product in &products {
            report.total_stock_quantity += product.stock;
            report.total_stock_value += product.price * Decimal::from(product.stock);
        }
        Ok(report)
    }

    /// Delivered orders created within `[from, to]`, bounds inclusive
    ///
    /// The period is matched against `created_at`, not the delivery time.
    pub fn delivered_orders(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ShopResult<Vec<Order>> {
        self.lifecycle.delivered_in_period(from, to)
    }
}
