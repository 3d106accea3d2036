//! On-disk integration tests: full order flows against a real database
//! file, including persistence across reopen.

use shop_server::{
    Config, OrderLifecycle, OrderLineInput, OrderStatus, ProductCreate, ReportingService,
    ShopError, ShopStorage,
};
use tempfile::TempDir;

fn open_manager(dir: &TempDir) -> OrderLifecycle {
    let config = Config::with_work_dir(dir.path().to_string_lossy());
    let storage = ShopStorage::open(config.db_path()).unwrap();
    OrderLifecycle::new(storage, &config)
}

fn seed_product(manager: &OrderLifecycle, name: &str, price: &str, stock: i64) -> shop_server::Product {
    manager
        .create_product(ProductCreate {
            name: name.to_string(),
            description: Some(format!("{name} (integration)")),
            price: price.parse().unwrap(),
            stock,
            perishable: None,
        })
        .unwrap()
}

#[test]
fn full_order_flow_on_disk() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&dir);

    let keyboard = seed_product(&manager, "Keyboard", "49.90", 10);
    let mouse = seed_product(&manager, "Mouse", "19.90", 5);

    let order = manager
        .create_order(vec![
            OrderLineInput {
                product_id: keyboard.id.clone(),
                quantity: 2,
            },
            OrderLineInput {
                product_id: mouse.id.clone(),
                quantity: 1,
            },
        ])
        .unwrap();

    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(manager.get_product(&keyboard.id).unwrap().stock, 8);

    manager.update_status(&order.id, OrderStatus::Sent).unwrap();
    let delivered = manager
        .update_status(&order.id, OrderStatus::Delivered)
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);

    let report = ReportingService::new(manager.clone())
        .stock_report()
        .unwrap();
    assert_eq!(report.total_stock_quantity, 12);
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let order_id;
    let product_id;

    {
        let manager = open_manager(&dir);
        let product = seed_product(&manager, "Keyboard", "49.90", 10);
        let order = manager
            .create_order(vec![OrderLineInput {
                product_id: product.id.clone(),
                quantity: 3,
            }])
            .unwrap();
        manager.update_status(&order.id, OrderStatus::Sent).unwrap();
        order_id = order.id;
        product_id = product.id;
    }

    // Fresh handle on the same file
    let manager = open_manager(&dir);

    let order = manager.get_order(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Sent);
    assert_eq!(order.items.len(), 1);
    assert_eq!(manager.get_product(&product_id).unwrap().stock, 7);

    // The lifecycle keeps working across the reopen
    let delivered = manager
        .update_status(&order_id, OrderStatus::Delivered)
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
}

#[test]
fn cancellation_releases_stock_on_disk() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&dir);
    let product = seed_product(&manager, "Keyboard", "49.90", 6);

    let order = manager
        .create_order(vec![OrderLineInput {
            product_id: product.id.clone(),
            quantity: 4,
        }])
        .unwrap();
    assert_eq!(manager.get_product(&product.id).unwrap().stock, 2);

    let cancelled = manager.cancel_order(&order.id).unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(manager.get_product(&product.id).unwrap().stock, 6);

    // Cancelled orders stay queryable
    let stored = manager.get_order(&order.id).unwrap();
    assert_eq!(stored.status, OrderStatus::Cancelled);
}

#[test]
fn failed_create_leaves_no_trace_on_disk() {
    let dir = TempDir::new().unwrap();
    let manager = open_manager(&dir);
    let product = seed_product(&manager, "Keyboard", "49.90", 2);

    let result = manager.create_order(vec![OrderLineInput {
        product_id: product.id.clone(),
        quantity: 5,
    }]);

    assert!(matches!(result, Err(ShopError::InsufficientStock { .. })));
    assert_eq!(manager.get_product(&product.id).unwrap().stock, 2);
    assert!(manager.list_orders().unwrap().is_empty());
}
