//! redb-based storage for products and orders
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `products` | `product_id` | `Product` (JSON) | Catalog + stock ledger state |
//! | `orders` | `order_id` | `Order` (JSON) | Order persistence |
//! | `order_numbers` | `order_number` | `order_id` | Unique-number backstop |
//!
//! # Durability and isolation
//!
//! redb commits are durable as soon as `commit()` returns and the database
//! file is always in a consistent state (copy-on-write with atomic pointer
//! swap). Only one write transaction exists at a time, so stock reservation
//! and order persistence performed inside the same transaction are
//! serializable with respect to every other mutation. A transaction dropped
//! without commit is rolled back wholesale.

use super::StoreResult;
use redb::{Database, ReadableDatabase, TableDefinition, WriteTransaction};
use std::path::Path;
use std::sync::Arc;

/// Catalog + stock ledger state: key = product_id, value = JSON Product
pub(crate) const PRODUCTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("products");

/// Order persistence: key = order_id, value = JSON Order
pub(crate) const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Order number dedup index: key = order_number, value = order_id
pub(crate) const ORDER_NUMBERS_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("order_numbers");

/// Shop storage backed by redb
#[derive(Clone)]
pub struct ShopStorage {
    db: Arc<Database>,
}

impl ShopStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Create all tables so later read transactions never miss them
    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(PRODUCTS_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(ORDER_NUMBERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction (the unit of work)
    pub fn begin_write(&self) -> StoreResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Begin a read transaction
    pub(crate) fn begin_read(&self) -> StoreResult<redb::ReadTransaction> {
        Ok(self.db.begin_read()?)
    }
}

impl std::fmt::Debug for ShopStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopStorage").finish_non_exhaustive()
    }
}
