//! Storage Module
//!
//! Embedded redb store and the two repositories built on it: the product
//! catalog (which contains the stock ledger) and the order store. One
//! `WriteTransaction` is the unit of work; repository mutation methods take
//! the transaction as a parameter so order and stock changes commit or roll
//! back together.

pub mod catalog;
pub mod orders;
pub mod storage;

pub use catalog::ProductCatalog;
pub use orders::OrderStore;
pub use storage::ShopStorage;

use shared::ShopError;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StorageError>;

impl From<StorageError> for ShopError {
    fn from(err: StorageError) -> Self {
        ShopError::Storage(err.to_string())
    }
}

/// Map any storage-layer error into the domain's transient storage error
pub(crate) fn storage_err(err: impl Into<StorageError>) -> ShopError {
    ShopError::from(err.into())
}
