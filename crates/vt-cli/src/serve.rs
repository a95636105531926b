//! # `vt serve` — Run the HTTP API
//!
//! Serves the Veritrade API over an in-memory document store,
//! optionally seeded with a product catalog file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use vt_api::AppState;
use vt_core::ProviderRegistry;
use vt_store::{MemoryStore, Product};
use vt_verify::SessionConfig;

/// Arguments for `vt serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Path to the provider registry file (YAML).
    #[arg(long, default_value = "config/providers.yaml")]
    pub providers: PathBuf,

    /// Optional product catalog seed file (JSON array).
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

/// Run the serve subcommand.
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.providers)
        .with_context(|| format!("reading {}", args.providers.display()))?;
    let registry: ProviderRegistry = serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing {}", args.providers.display()))?;

    let products: Vec<Product> = match &args.seed {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Vec::new(),
    };

    let store = Arc::new(MemoryStore::with_products(products));
    let state = AppState::new(store, registry, SessionConfig::from_env());
    vt_api::serve(args.addr, state).await?;
    Ok(())
}
