//! # vt-store — Marketplace Document Store
//!
//! The remote document-store collaborator: user documents (cart,
//! profile, selling products) and the product catalog.
//!
//! ## Architecture
//!
//! - **Record** (`record.rs`): the document shapes (user, cart item,
//!   product, listing).
//!
//! - **Store** (`store.rs`): the `DocumentStore` trait and the
//!   in-memory implementation used by tests and local runs.
//!
//! - **Cart** (`cart.rs`): cart operations over the store:
//!   read-full-document, mutate in memory, write back.
//!
//! - **Listing** (`listing.rs`): publishing a listing. A listing is
//!   persisted only when handed a verified ownership match; nothing is
//!   written for a failed or absent verification.
//!
//! ## Consistency
//!
//! Writes are whole-document with no optimistic-concurrency check:
//! last write wins, and two devices editing the same cart can overwrite
//! each other. This matches the hosted document database the store
//! fronts.

pub mod cart;
pub mod listing;
pub mod record;
pub mod store;

pub use cart::{CartAdd, CartService};
pub use listing::{Listing, ListingError, ListingService};
pub use record::{CartItem, Product, UserRecord};
pub use store::{DocumentStore, MemoryStore, StoreError};
