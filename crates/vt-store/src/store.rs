//! # Document Store Boundary
//!
//! The `DocumentStore` trait fronts the hosted document database. User
//! documents are read and written whole; the store performs no
//! concurrency control, so last write wins.
//!
//! `MemoryStore` is the in-process implementation used by tests, the
//! CLI, and local API runs.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use vt_core::{ProductId, UserId};

use crate::record::{Product, UserRecord};

/// Error from the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested document does not exist.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Abstract interface to the marketplace document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a user document, if it exists.
    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError>;

    /// Write a user document whole, creating or replacing it.
    async fn put_user(&self, id: &UserId, record: UserRecord) -> Result<(), StoreError>;

    /// All products in catalog order.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Fetch one product, if it exists.
    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Write a product, creating or replacing it.
    async fn put_product(&self, product: Product) -> Result<(), StoreError>;
}

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a product catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(id.as_str()).cloned())
    }

    async fn put_user(&self, id: &UserId, record: UserRecord) -> Result<(), StoreError> {
        self.users
            .write()
            .await
            .insert(id.as_str().to_string(), record);
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn put_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products.write().await;
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        } else {
            products.push(product);
        }
        Ok(())
    }
}
