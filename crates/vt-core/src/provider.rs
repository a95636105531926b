//! # Retailer Provider Profiles
//!
//! A provider profile identifies which retailer/website the external
//! verification SDK should target. The marketplace exposes a fixed menu
//! of retailers; some are listed before they are enabled.

use serde::{Deserialize, Serialize};

use crate::error::VtError;
use crate::identity::ProviderId;

/// One retailer profile in the verification menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// Stable lookup key (e.g., `rare-t`).
    pub key: String,
    /// Human-readable label shown to sellers.
    pub label: String,
    /// The provider id the SDK is invoked with.
    pub provider_id: ProviderId,
    /// Disabled profiles are listed but not selectable.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// The menu of retailer profiles available for verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderRegistry {
    providers: Vec<ProviderProfile>,
}

impl ProviderRegistry {
    /// Build a registry from a list of profiles.
    pub fn new(providers: Vec<ProviderProfile>) -> Self {
        Self { providers }
    }

    /// All profiles, in menu order.
    pub fn profiles(&self) -> &[ProviderProfile] {
        &self.providers
    }

    /// Look up a profile by key.
    pub fn get(&self, key: &str) -> Option<&ProviderProfile> {
        self.providers.iter().find(|p| p.key == key)
    }

    /// Resolve the provider id for an enabled profile.
    ///
    /// # Errors
    ///
    /// Unknown keys and disabled profiles are both rejected; a disabled
    /// profile names the retailer in the message so the caller can say
    /// "coming soon" rather than "not found".
    pub fn resolve(&self, key: &str) -> Result<&ProviderId, VtError> {
        let profile = self
            .get(key)
            .ok_or_else(|| VtError::Validation(format!("unknown provider key: {key}")))?;
        if !profile.enabled {
            return Err(VtError::Validation(format!(
                "provider '{}' is not yet available",
                profile.label
            )));
        }
        Ok(&profile.provider_id)
    }
}
