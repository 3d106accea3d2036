//! Product catalog and stock ledger
//!
//! All stock mutation in the system happens through `try_reserve` and
//! `release`. Both take the caller's write transaction so that stock and
//! order changes are committed (or rolled back) as one unit, and both
//! maintain the `stock >= 0` invariant. Nothing else writes the `stock`
//! field.

use super::storage::{PRODUCTS_TABLE, ShopStorage};
use super::{StoreResult, storage_err};
use chrono::Utc;
use redb::{ReadableTable, WriteTransaction};
use shared::{Product, ProductCreate, ShopError, ShopResult};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProductCatalog {
    storage: ShopStorage,
}

impl ProductCatalog {
    pub fn new(storage: ShopStorage) -> Self {
        Self { storage }
    }

    /// Create a new product
    pub fn insert(&self, data: ProductCreate) -> ShopResult<Product> {
        if data.price.is_sign_negative() {
            return Err(ShopError::Validation("price cannot be negative".into()));
        }
        if data.stock < 0 {
            return Err(ShopError::Validation("stock cannot be negative".into()));
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            description: data.description,
            price: data.price,
            stock: data.stock,
            perishable: data.perishable.unwrap_or(false),
            created_at: Utc::now(),
            updated_at: None,
        };

        let txn = self.storage.begin_write().map_err(ShopError::from)?;
        self.write_product(&txn, &product).map_err(ShopError::from)?;
        txn.commit().map_err(storage_err)?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Find product by id
    pub fn get(&self, id: &str) -> StoreResult<Option<Product>> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;
        let Some(guard) = table.get(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(guard.value())?))
    }

    /// Find product by id inside an open write transaction
    pub fn get_txn(&self, txn: &WriteTransaction, id: &str) -> StoreResult<Option<Product>> {
        let table = txn.open_table(PRODUCTS_TABLE)?;
        let Some(guard) = table.get(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(guard.value())?))
    }

    /// All products, in unspecified order
    pub fn get_all(&self) -> StoreResult<Vec<Product>> {
        let read_txn = self.storage.begin_read()?;
        let table = read_txn.open_table(PRODUCTS_TABLE)?;
        let mut products = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            products.push(serde_json::from_slice(value.value())?);
        }
        Ok(products)
    }

    /// Reserve stock for an order line
    ///
    /// Decrements `stock` by `quantity` iff the product exists and has at
    /// least `quantity` available; fails without touching state otherwise.
    /// Returns the product as it was read, so callers can snapshot the
    /// current price and name into the order line.
    pub fn try_reserve(
        &self,
        txn: &WriteTransaction,
        product_id: &str,
        quantity: i64,
    ) -> ShopResult<Product> {
        let product = self
            .get_txn(txn, product_id)
            .map_err(ShopError::from)?
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;

        if product.stock < quantity {
            return Err(ShopError::InsufficientStock {
                product_id: product_id.to_string(),
                available: product.stock,
                requested: quantity,
            });
        }

        let mut updated = product.clone();
        updated.stock -= quantity;
        updated.updated_at = Some(Utc::now());
        self.write_product(txn, &updated).map_err(ShopError::from)?;

        tracing::debug!(
            product_id = %product_id,
            reserved = quantity,
            remaining = updated.stock,
            "Stock reserved"
        );
        Ok(product)
    }

    /// Release previously reserved stock (cancellation or return)
    pub fn release(
        &self,
        txn: &WriteTransaction,
        product_id: &str,
        quantity: i64,
    ) -> ShopResult<()> {
        let mut product = self
            .get_txn(txn, product_id)
            .map_err(ShopError::from)?
            .ok_or_else(|| ShopError::ProductNotFound(product_id.to_string()))?;

        product.stock += quantity;
        product.updated_at = Some(Utc::now());
        self.write_product(txn, &product).map_err(ShopError::from)?;

        tracing::debug!(
            product_id = %product_id,
            released = quantity,
            available = product.stock,
            "Stock released"
        );
        Ok(())
    }

    fn write_product(&self, txn: &WriteTransaction, product: &Product) -> StoreResult<()> {
        let mut table = txn.open_table(PRODUCTS_TABLE)?;
        let bytes = serde_json::to_vec(product)?;
        table.insert(product.id.as_str(), bytes.as_slice())?;
        Ok(())
    }
}
