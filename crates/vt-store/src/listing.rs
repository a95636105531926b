//! # Listing Publication
//!
//! Turns a verified ownership match into a persisted marketplace
//! listing. Nothing is written for a failed or absent verification:
//! the listing gate consumes the match outcome itself, so there is no
//! code path that lists an unverified item.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vt_core::{ListingId, Timestamp, UserId};
use vt_verify::{MatchFailure, MatchOutcome};

use crate::record::{Product, UserRecord};
use crate::store::{DocumentStore, StoreError};

/// A published listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// The listed product.
    pub product: Product,
    /// The retailer order id the ownership proof matched.
    pub matched_order_id: Option<String>,
    /// When the listing was published.
    pub listed_at: Timestamp,
}

/// Why a listing could not be published.
#[derive(Error, Debug)]
pub enum ListingError {
    /// The ownership match did not verify.
    #[error("listing requires a verified ownership match: {0}")]
    NotVerified(MatchFailure),

    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Publishes verified listings into the catalog and the seller's
/// document.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn DocumentStore>,
}

impl ListingService {
    /// Create a listing service over a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Publish a listing for a verified product.
    ///
    /// The verification source label becomes the product's displayed
    /// badge. Returns the persisted listing.
    pub async fn publish(
        &self,
        seller: &UserId,
        mut product: Product,
        outcome: &MatchOutcome,
        source_label: &str,
    ) -> Result<Listing, ListingError> {
        let matched = match outcome {
            MatchOutcome::Verified(order) => order,
            MatchOutcome::Failed(failure) => return Err(ListingError::NotVerified(*failure)),
        };

        product.verification_badges = vec![source_label.to_string()];
        let listing = Listing {
            id: ListingId::new(),
            product: product.clone(),
            matched_order_id: matched.order_id.clone(),
            listed_at: Timestamp::now(),
        };

        self.store.put_product(product).await?;

        let mut record = self
            .store
            .get_user(seller)
            .await?
            .unwrap_or_else(UserRecord::minimal);
        record.selling_products.push(listing.clone());
        self.store.put_user(seller, record).await?;

        tracing::info!(seller = %seller, listing = %listing.id, "listing published");
        Ok(listing)
    }
}
