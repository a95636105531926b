//! # `vt verify` — Offline Verification Replay
//!
//! Replays a recorded verification payload through the full session
//! controller and ownership matcher against a claim file. The SDK
//! boundary is satisfied by the replay implementation; no interactive
//! verification happens.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use serde::Deserialize;

use vt_core::{AccountAddress, ListingClaim, ProviderId};
use vt_proof::VerificationResult;
use vt_verify::{
    evaluate, MatchOutcome, ReplaySdk, SessionConfig, SessionController, StartRequest,
};

/// Arguments for `vt verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to a recorded raw verification result (JSON).
    #[arg(long)]
    pub payload: PathBuf,

    /// Path to the seller claim file (YAML).
    #[arg(long)]
    pub claim: PathBuf,

    /// Account address to run the session under.
    #[arg(long, default_value = "vt1offline")]
    pub account: String,
}

/// The seller claim file.
#[derive(Debug, Deserialize)]
struct ClaimFile {
    product_name: String,
    date_purchased: String,
    order_id: String,
    order_details: String,
    provider_id: String,
}

/// Run the verify subcommand.
pub async fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let claim_raw = std::fs::read_to_string(&args.claim)
        .with_context(|| format!("reading {}", args.claim.display()))?;
    let claim_file: ClaimFile = serde_yaml::from_str(&claim_raw)
        .with_context(|| format!("parsing {}", args.claim.display()))?;

    let provider_id = ProviderId::new(claim_file.provider_id)?;
    let claim = ListingClaim::new(
        claim_file.product_name,
        claim_file.date_purchased,
        claim_file.order_id,
        claim_file.order_details,
        provider_id.clone(),
    )?;

    let payload_raw = std::fs::read_to_string(&args.payload)
        .with_context(|| format!("reading {}", args.payload.display()))?;
    let payload: VerificationResult =
        serde_json::from_str(&payload_raw).context("parsing verification result")?;

    let sdk = Arc::new(ReplaySdk::success(payload));
    let mut controller = SessionController::new(sdk, SessionConfig::from_env());
    let report = controller
        .start(StartRequest {
            account: Some(AccountAddress(args.account)),
            provider_override: Some(provider_id),
            required_fields: None,
        })
        .await?;

    match evaluate(&claim, report.extracted_count, &report.extracted_orders) {
        MatchOutcome::Verified(order) => {
            println!(
                "verified: order {} matches the claim",
                order.order_id.as_deref().unwrap_or("(no id)")
            );
        }
        MatchOutcome::Failed(failure) => {
            println!("not verified: {failure}");
        }
    }
    println!("session state: {}", controller.state());
    Ok(())
}
