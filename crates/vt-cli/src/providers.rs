//! # `vt providers` — Inspect a Provider Registry
//!
//! Reads a provider registry file and prints the retailer menu.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use vt_core::ProviderRegistry;

/// Arguments for `vt providers`.
#[derive(Args, Debug)]
pub struct ProvidersArgs {
    /// Path to the provider registry file (YAML).
    #[arg(long, default_value = "config/providers.yaml")]
    pub config: PathBuf,
}

/// Run the providers subcommand.
pub fn run(args: ProvidersArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("reading {}", args.config.display()))?;
    let registry: ProviderRegistry =
        serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", args.config.display()))?;

    for profile in registry.profiles() {
        let status = if profile.enabled { "enabled" } else { "coming soon" };
        println!(
            "{:<16} {:<24} {:<32} {status}",
            profile.key,
            profile.label,
            profile.provider_id.as_str(),
        );
    }
    Ok(())
}
