//! # vt-verify — Ownership Verification
//!
//! The decision half of the verification pipeline: given a seller's
//! listing claim and the purchase orders extracted from a web proof,
//! decide whether the listing may proceed.
//!
//! ## Architecture
//!
//! - **Date** (`date.rs`): purchase-date normalization. Retailers and
//!   sellers write dates in different formats; both sides normalize to
//!   `YYYY-MM-DD` where the format is recognized and compare literally
//!   where it is not.
//!
//! - **Ownership** (`ownership.rs`): the matcher. Normalized equality
//!   over order id, product name, and purchase date; first matching
//!   order wins.
//!
//! - **Sdk** (`sdk.rs`): the external verification SDK boundary as a
//!   trait, with a replay implementation for tests and offline runs.
//!   The SDK's cryptography and network protocol are opaque; only the
//!   input/output contract is modeled.
//!
//! - **Query** (`query.rs`): the optional read-only contract query for
//!   a per-account value. Failures are logged and ignored.
//!
//! - **Config** (`config.rs`): session configuration (app credentials,
//!   fallback provider, optional value contract address).
//!
//! - **Session** (`session.rs`): the session controller. An explicit
//!   runtime state machine drives one verification attempt end to end
//!   and reports a normalized result exactly once.

pub mod config;
pub mod date;
pub mod ownership;
pub mod query;
pub mod sdk;
pub mod session;

pub use config::SessionConfig;
pub use date::normalize_date;
pub use ownership::{evaluate, match_claim, MatchFailure, MatchOutcome};
pub use query::{parse_chain_value, MockValueQuery, QueryError, ValueQuery};
pub use sdk::{ReplaySdk, SdkError, VerificationRequest, VerificationSdk};
pub use session::{
    RequiredFields, SessionController, SessionError, SessionState, StartRequest,
    TransitionRecord, VerificationReport,
};
