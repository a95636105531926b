//! # vt-proof — Web-Proof Payload Handling
//!
//! Everything between the external verification SDK's opaque response
//! and the structured purchase orders the ownership matcher consumes.
//!
//! ## Architecture
//!
//! - **Claim** (`claim.rs`): the raw verification result data model
//!   (proof records, claim data, signatures) plus the on-chain claim
//!   submission envelope.
//!
//! - **Payload** (`payload.rs`): the defensive decoder. Provider context
//!   blobs arrive as objects, JSON-encoded strings, or double-encoded
//!   strings; `decode` is total and idempotent, and a payload that
//!   cannot be structured survives as its original string.
//!
//! - **Extract** (`extract.rs`): pulls a normalized order count and
//!   order list out of a decoded context, tolerating the alternate
//!   field-naming schemes used by different providers.
//!
//! ## Design
//!
//! The provider payload shape-shifts across integrations, so this crate
//! is a chain of total functions with an explicit fallback at every
//! step. No branch raises; every output type has an "unrecognized/raw"
//! variant. Diagnostics go to `tracing` at debug level, never into the
//! values themselves.

pub mod claim;
pub mod extract;
pub mod payload;

pub use claim::{ClaimData, ClaimInfo, ExecuteMsg, ProofRecord, SignedClaim, VerificationResult};
pub use extract::{extract, ExtractedClaim, ExtractedOrders, OrderRecord, OrdersOutcome};
pub use payload::{decode, to_json_string};
