//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the Veritrade stack.
//! These prevent accidental identifier confusion: you cannot pass a
//! `ProductId` where a `ProviderId` is expected.
//!
//! Externally supplied identifiers (`ProviderId`, `AccountAddress`,
//! `ProductId`, `UserId`) wrap validated strings; internally generated
//! identifiers (`ListingId`) wrap UUIDs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::VtError;

/// Identifier of a retailer verification provider profile.
///
/// Selects which retailer/website the external verification SDK targets.
/// Must be non-empty; a blank provider id is a configuration error, not
/// a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderId(String);

impl ProviderId {
    /// Construct from a string, rejecting empty/whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, VtError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VtError::Validation("provider id must be non-empty".into()));
        }
        Ok(Self(id))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A connected wallet/account address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(pub String);

impl AccountAddress {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a marketplace product document.
///
/// Product ids come from the document store and are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a marketplace user document.
///
/// Keyed by the user's account address in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a marketplace listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub Uuid);

impl ListingId {
    /// Generate a new random listing identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product:{}", self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listing:{}", self.0)
    }
}
