//! # `vt decode` — Decode a Recorded Payload
//!
//! Reads a recorded raw verification result (or a bare context blob),
//! runs the decode/extract chain, and prints the structured outcome.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use vt_proof::{decode, extract, OrdersOutcome, VerificationResult};

/// Arguments for `vt decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to a JSON file: a raw verification result, or a bare
    /// context blob.
    #[arg(long)]
    pub payload: PathBuf,
}

/// Run the decode subcommand.
pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.payload)
        .with_context(|| format!("reading {}", args.payload.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.payload.display()))?;

    // A full verification result carries `proofs`; anything else is
    // treated as a bare context blob.
    let context = if value.get("proofs").is_some() {
        let result: VerificationResult =
            serde_json::from_value(value).context("parsing verification result")?;
        result
            .proofs
            .into_iter()
            .next()
            .map(|p| decode(p.claim_data.context))
            .unwrap_or(Value::Null)
    } else {
        decode(value)
    };

    let extracted = extract(&context);
    println!("count: {}", match extracted.count {
        Some(n) => n.to_string(),
        None => "absent".into(),
    });

    match extracted.orders.map(|o| o.into_outcome()) {
        Some(OrdersOutcome::Orders(orders)) => {
            println!("orders: {}", orders.len());
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
        Some(OrdersOutcome::Raw(s)) => {
            println!("orders: undecodable, raw string follows");
            println!("{s}");
        }
        Some(OrdersOutcome::Absent) | None => println!("orders: absent"),
    }
    Ok(())
}
