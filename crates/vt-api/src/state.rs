//! # Application State
//!
//! Shared state for the Axum application: the document store, the
//! services built over it, the provider registry, and the verification
//! session configuration.

use std::sync::Arc;

use vt_core::ProviderRegistry;
use vt_store::{CartService, DocumentStore, ListingService};
use vt_verify::SessionConfig;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The document store backing catalog and user documents.
    pub store: Arc<dyn DocumentStore>,
    /// Cart operations over the store.
    pub cart: CartService,
    /// Listing publication over the store.
    pub listings: ListingService,
    /// Retailer provider profiles.
    pub registry: Arc<ProviderRegistry>,
    /// Verification session configuration.
    pub session_config: SessionConfig,
}

impl AppState {
    /// Assemble state over a store.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: ProviderRegistry,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            cart: CartService::new(store.clone()),
            listings: ListingService::new(store.clone()),
            store,
            registry: Arc::new(registry),
            session_config,
        }
    }
}
