//! # Cart Operations
//!
//! Cart mutations over the document store. Every operation reads the
//! full user document, mutates it in memory, and writes it back whole;
//! a user document that does not exist yet is created minimally on
//! first touch.

use std::sync::Arc;

use vt_core::{ProductId, UserId};

use crate::record::{CartItem, Product, UserRecord};
use crate::store::{DocumentStore, StoreError};

/// Result of an add-to-cart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAdd {
    /// The item was added.
    Added,
    /// The product was already in the cart; nothing changed.
    AlreadyInCart,
}

/// Cart service over a document store.
#[derive(Clone)]
pub struct CartService {
    store: Arc<dyn DocumentStore>,
}

impl CartService {
    /// Create a cart service over a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Add a product to a user's cart, deduplicating by product id.
    ///
    /// Creates a minimal user document if none exists.
    pub async fn add(&self, user: &UserId, product: &Product) -> Result<CartAdd, StoreError> {
        let mut record = match self.store.get_user(user).await? {
            Some(record) => record,
            None => {
                let record = UserRecord::minimal();
                self.store.put_user(user, record.clone()).await?;
                record
            }
        };

        if record.cart.iter().any(|item| item.product_id == product.id) {
            return Ok(CartAdd::AlreadyInCart);
        }

        record.cart.push(CartItem::from_product(product));
        self.store.put_user(user, record).await?;
        tracing::debug!(user = %user, product = %product.id, "added to cart");
        Ok(CartAdd::Added)
    }

    /// Remove a product from a user's cart. Removing an item that is
    /// not present is a no-op.
    pub async fn remove(&self, user: &UserId, product_id: &ProductId) -> Result<(), StoreError> {
        let Some(mut record) = self.store.get_user(user).await? else {
            return Ok(());
        };
        record.cart.retain(|item| &item.product_id != product_id);
        self.store.put_user(user, record).await
    }

    /// The user's cart contents.
    pub async fn contents(&self, user: &UserId) -> Result<Vec<CartItem>, StoreError> {
        Ok(self
            .store
            .get_user(user)
            .await?
            .map(|record| record.cart)
            .unwrap_or_default())
    }

    /// Sum of prices in the user's cart.
    pub async fn total(&self, user: &UserId) -> Result<f64, StoreError> {
        Ok(self
            .contents(user)
            .await?
            .iter()
            .map(|item| item.price)
            .sum())
    }
}
