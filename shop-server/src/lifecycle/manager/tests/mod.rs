use super::*;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::Mutex;


/// Controllable clock: tests move time instead of sleeping
struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    fn starting_at(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(start),
        })
    }

    fn advance(&self, delta: Duration) {
        *self.now.lock().unwrap() += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
}

/// Manager over an in-memory store with the default 24h/14d windows
fn create_test_manager() -> (OrderLifecycle, Arc<ManualClock>) {
    let storage = ShopStorage::open_in_memory().unwrap();
    let clock = ManualClock::starting_at(test_epoch());
    let manager = OrderLifecycle::with_clock(storage, clock.clone(), 24, 14);
    (manager, clock)
}

fn seed_product(manager: &OrderLifecycle, name: &str, price: &str, stock: i64) -> Product {
    manager
        .create_product(ProductCreate {
            name: name.to_string(),
            description: None,
            price: price.parse().unwrap(),
            stock,
            perishable: None,
        })
        .unwrap()
}

fn seed_perishable(manager: &OrderLifecycle, name: &str, price: &str, stock: i64) -> Product {
    manager
        .create_product(ProductCreate {
            name: name.to_string(),
            description: None,
            price: price.parse().unwrap(),
            stock,
            perishable: Some(true),
        })
        .unwrap()
}

fn line(product: &Product, quantity: i64) -> OrderLineInput {
    OrderLineInput {
        product_id: product.id.clone(),
        quantity,
    }
}

fn stock_of(manager: &OrderLifecycle, product_id: &str) -> i64 {
    manager.get_product(product_id).unwrap().stock
}

/// Drive a fresh order to Delivered through the legal path
fn delivered_order(manager: &OrderLifecycle, lines: Vec<OrderLineInput>) -> Order {
    let order = manager.create_order(lines).unwrap();
    manager.update_status(&order.id, OrderStatus::Sent).unwrap();
    manager
        .update_status(&order.id, OrderStatus::Delivered)
        .unwrap()
}
