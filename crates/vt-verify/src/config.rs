//! # Session Configuration
//!
//! Credentials and fallbacks for the verification session controller.
//! Constructed explicitly in code, or from the environment in binaries.

use vt_core::ProviderId;

/// Configuration for a verification session controller.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Application id issued by the verification provider.
    pub app_id: String,
    /// Application secret issued by the verification provider.
    pub app_secret: String,
    /// Provider used when a start request carries no override.
    pub fallback_provider: Option<ProviderId>,
    /// Address of the optional read-only value contract.
    pub value_contract: Option<String>,
}

impl SessionConfig {
    /// Build a configuration with credentials only.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            fallback_provider: None,
            value_contract: None,
        }
    }

    /// Set the fallback provider.
    pub fn with_fallback_provider(mut self, provider: ProviderId) -> Self {
        self.fallback_provider = Some(provider);
        self
    }

    /// Set the value contract address.
    pub fn with_value_contract(mut self, address: impl Into<String>) -> Self {
        self.value_contract = Some(address.into());
        self
    }

    /// Build a configuration from environment variables.
    ///
    /// Reads `VERITRADE_APP_ID`, `VERITRADE_APP_SECRET`,
    /// `VERITRADE_PROVIDER_ID`, and `VERITRADE_VALUE_CONTRACT`. Missing
    /// credentials default to empty strings (the SDK rejects them); a
    /// missing or blank provider id leaves no fallback, which is a
    /// configuration error at session start unless a request supplies
    /// an override.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let provider = ProviderId::new(var("VERITRADE_PROVIDER_ID")).ok();
        let contract = Some(var("VERITRADE_VALUE_CONTRACT")).filter(|s| !s.is_empty());
        Self {
            app_id: var("VERITRADE_APP_ID"),
            app_secret: var("VERITRADE_APP_SECRET"),
            fallback_provider: provider,
            value_contract: contract,
        }
    }
}
