//! # vt-core — Foundational Types for Veritrade
//!
//! This crate is the bedrock of the Veritrade stack. It defines the
//! type-system primitives shared by every other crate in the workspace;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ProviderId`,
//!    `AccountAddress`, `ProductId`, `UserId`, `ListingId` are all
//!    newtypes. No bare strings for identifiers.
//!
//! 2. **Validated construction for externally supplied data.** A
//!    `ListingClaim` cannot exist with an empty required field; a
//!    `ProviderId` cannot be blank.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vt-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a wire or a file.

pub mod error;
pub mod identity;
pub mod listing;
pub mod provider;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::VtError;
pub use identity::{AccountAddress, ListingId, ProductId, ProviderId, UserId};
pub use listing::ListingClaim;
pub use provider::{ProviderProfile, ProviderRegistry};
pub use temporal::Timestamp;
