//! # Listing Claim
//!
//! The seller-entered claim about an item being listed for sale. The
//! claim is what the ownership matcher compares against the purchase
//! orders extracted from a web proof.
//!
//! A `ListingClaim` cannot be constructed with an empty required field;
//! the form collaborator validates before the claim exists, so every
//! downstream consumer can rely on non-empty values.

use serde::{Deserialize, Serialize};

use crate::error::VtError;
use crate::identity::ProviderId;

/// Seller-entered data for the item being listed.
///
/// Consumed once by the ownership matcher; not persisted until
/// verification succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingClaim {
    /// Product name as entered by the seller.
    pub product_name: String,
    /// Purchase date as entered by the seller (free-form).
    pub date_purchased: String,
    /// Retailer order id as entered by the seller.
    pub order_id: String,
    /// Free-form description of why the item is a collectible.
    pub order_details: String,
    /// The retailer provider profile to verify against.
    pub provider_id: ProviderId,
}

impl ListingClaim {
    /// Construct a claim, rejecting empty/whitespace-only required fields.
    pub fn new(
        product_name: impl Into<String>,
        date_purchased: impl Into<String>,
        order_id: impl Into<String>,
        order_details: impl Into<String>,
        provider_id: ProviderId,
    ) -> Result<Self, VtError> {
        let claim = Self {
            product_name: product_name.into(),
            date_purchased: date_purchased.into(),
            order_id: order_id.into(),
            order_details: order_details.into(),
            provider_id,
        };
        claim.validate()?;
        Ok(claim)
    }

    /// Check that all required fields are non-empty.
    pub fn validate(&self) -> Result<(), VtError> {
        for (field, value) in [
            ("product_name", &self.product_name),
            ("date_purchased", &self.date_purchased),
            ("order_id", &self.order_id),
            ("order_details", &self.order_details),
        ] {
            if value.trim().is_empty() {
                return Err(VtError::Validation(format!(
                    "listing claim field '{field}' must be non-empty"
                )));
            }
        }
        Ok(())
    }
}
