//! Order Store
//!
//! Durable persistence for orders. Inserts dedup on both order id and the
//! human-readable order number; updates carry an optimistic concurrency
//! check on the `version` stamp so a lost update surfaces as a retryable
//! conflict instead of being silently merged.

use super::storage::{ORDER_NUMBERS_TABLE, ORDERS_TABLE, ShopStorage};
use super::{StoreResult, storage_err};
use chrono::{DateTime, Utc};
use redb::{ReadableTable, WriteTransaction};
use shared::{Order, OrderStatus, ShopError, ShopResult};

#[derive(Debug, Clone)]
pub struct OrderStore {
    storage: ShopStorage,
}

impl OrderStore {
    pub fn new(storage: ShopStorage) -> Self {
        Self { storage }
    }

    /// Persist a new order
    ///
    /// Fails with a conflict when the id or the order number already
    /// exists. Order-number collisions are negligible by construction;
    /// this is the store-level backstop.
    pub fn insert(&self, txn: &WriteTransaction, order: &Order) -> ShopResult<()> {
        {
            let mut numbers = txn.open_table(ORDER_NUMBERS_TABLE).map_err(storage_err)?;
            if numbers
                .get(order.order_number.as_str())
                .map_err(storage_err)?
                .is_some()
            {
                return Err(ShopError::Conflict(format!(
                    "Order number {} already exists",
                    order.order_number
                )));
            }
            numbers
                .insert(order.order_number.as_str(), order.id.as_str())
                .map_err(storage_err)?;
        }

        let mut table = txn.open_table(ORDERS_TABLE).map_err(storage_err)?;
        if table.get(order.id.as_str()).map_err(storage_err)?.is_some() {
            return Err(ShopError::Conflict(format!(
                "Order {} already exists",
                order.id
            )));
        }

        let bytes = serde_json::to_vec(order).map_err(storage_err)?;
        table
            .insert(order.id.as_str(), bytes.as_slice())
            .map_err(storage_err)?;
        Ok(())
    }

    /// Update an order's mutable fields (status, updated_at)
    ///
    /// The caller's `version` must match the stored one; on success the
    /// stored version is bumped and the updated order returned.
    pub fn update(&self, txn: &WriteTransaction, order: &Order) -> ShopResult<Order> {
        let mut table = txn.open_table(ORDERS_TABLE).map_err(storage_err)?;

        let stored: Order = {
            let guard = table
                .get(order.id.as_str())
                .map_err(storage_err)?
                .ok_or_else(|| ShopError::OrderNotFound(order.id.clone()))?;
            serde_json::from_slice(guard.value()).map_err(storage_err)?
        };

        if stored.version != order.version {
            return Err(ShopError::Conflict(format!(
                "Order {} was modified by another writer (stored version {}, caller version {})",
                order.id, stored.version, order.version
            )));
        }

        let mut updated = order.clone();
        updated.version += 1;
        let bytes = serde_json::to_vec(&updated).map_err(storage_err)?;
        table
            .insert(updated.id.as_str(), bytes.as_slice())
            .map_err(storage_err)?;
        Ok(updated)
    }

    /// Find order by id
    pub fn get(&self, id: &str) -> StoreResult<Option<Order>> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        let Some(guard) = table.get(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(guard.value())?))
    }

    /// Find order by id inside an open write transaction
    pub fn get_txn(&self, txn: &WriteTransaction, id: &str) -> StoreResult<Option<Order>> {
        let table = txn.open_table(ORDERS_TABLE)?;
        let Some(guard) = table.get(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(guard.value())?))
    }

    /// All orders, in unspecified order
    pub fn get_all(&self) -> StoreResult<Vec<Order>> {
        self.collect(|_| true)
    }

    /// Orders currently in the given status
    pub fn get_by_status(&self, status: OrderStatus) -> StoreResult<Vec<Order>> {
        self.collect(|order| order.status == status)
    }

    /// Delivered orders created within [from, to], bounds inclusive
    pub fn get_delivered_in_period(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Vec<Order>> {
        self.collect(|order| {
            order.status == OrderStatus::Delivered
                && order.created_at >= from
                && order.created_at <= to
        })
    }

    fn collect(&self, keep: impl Fn(&Order) -> bool) -> StoreResult<Vec<Order>> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        let mut orders = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let order: Order = serde_json::from_slice(value.value())?;
            if keep(&order) {
                orders.push(order);
            }
        }
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::OrderItem;

    fn test_store() -> (ShopStorage, OrderStore) {
        let storage = ShopStorage::open_in_memory().unwrap();
        let store = OrderStore::new(storage.clone());
        (storage, store)
    }

    fn sample_order(id: &str, number: &str) -> Order {
        Order {
            id: id.to_string(),
            order_number: number.to_string(),
            status: OrderStatus::Confirmed,
            items: vec![OrderItem {
                product_id: "p-1".to_string(),
                product_name: "Keyboard".to_string(),
                quantity: 2,
                unit_price: "49.90".parse().unwrap(),
            }],
            created_at: Utc::now(),
            updated_at: None,
            version: 0,
        }
    }

    #[test]
    fn insert_and_get_round_trip() {
        let (storage, store) = test_store();
        let order = sample_order("o-1", "CMD-20260801-AAAAAA");

        let txn = storage.begin_write().unwrap();
        store.insert(&txn, &order).unwrap();
        txn.commit().unwrap();

        assert_eq!(store.get("o-1").unwrap(), Some(order));
        assert_eq!(store.get("o-2").unwrap(), None);
    }

    #[test]
    fn duplicate_order_number_is_a_conflict() {
        let (storage, store) = test_store();

        let txn = storage.begin_write().unwrap();
        store
            .insert(&txn, &sample_order("o-1", "CMD-20260801-AAAAAA"))
            .unwrap();
        txn.commit().unwrap();

        let txn = storage.begin_write().unwrap();
        let result = store.insert(&txn, &sample_order("o-2", "CMD-20260801-AAAAAA"));
        assert!(matches!(result, Err(ShopError::Conflict(_))));
    }

    #[test]
    fn stale_version_update_is_a_conflict() {
        let (storage, store) = test_store();
        let order = sample_order("o-1", "CMD-20260801-AAAAAA");

        let txn = storage.begin_write().unwrap();
        store.insert(&txn, &order).unwrap();
        txn.commit().unwrap();

        // First writer wins, version moves to 1
        let mut first = order.clone();
        first.status = OrderStatus::Sent;
        let txn = storage.begin_write().unwrap();
        let stored = store.update(&txn, &first).unwrap();
        txn.commit().unwrap();
        assert_eq!(stored.version, 1);

        // Second writer still holds the version-0 snapshot
        let mut second = order;
        second.status = OrderStatus::Cancelled;
        let txn = storage.begin_write().unwrap();
        let result = store.update(&txn, &second);
        assert!(matches!(result, Err(ShopError::Conflict(_))));
    }

    #[test]
    fn update_of_missing_order_is_not_found() {
        let (storage, store) = test_store();
        let txn = storage.begin_write().unwrap();
        let result = store.update(&txn, &sample_order("ghost", "CMD-20260801-AAAAAA"));
        assert_eq!(
            result,
            Err(ShopError::OrderNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn dropped_transaction_rolls_back() {
        let (storage, store) = test_store();
        let order = sample_order("o-1", "CMD-20260801-AAAAAA");

        {
            let txn = storage.begin_write().unwrap();
            store.insert(&txn, &order).unwrap();
            // No commit
        }

        assert_eq!(store.get("o-1").unwrap(), None);
    }
}
