//! # Verification Session Controller
//!
//! Orchestrates a single verification attempt: checks preconditions,
//! invokes the external SDK, drives the status state machine, feeds the
//! raw result through the decode/extract chain, and reports a
//! normalized result to the caller exactly once.
//!
//! ## States
//!
//! ```text
//! Idle ──▶ Verifying ──▶ VerificationComplete ──▶ Executing ──▶ Complete
//!   │          │                  │                   │
//!   └──────────┴──────────────────┴───────────────────┴──▶ Error
//! ```
//!
//! The state is an explicit tagged value with enumerated legal
//! transitions; there are no loose boolean flags, so impossible
//! combinations (loading while complete) cannot be represented.
//!
//! ## Result Reporting
//!
//! A session that ends in `Error` reports an absent result: no
//! verification occurred. A session that ends in `Complete` reports a
//! [`VerificationReport`], and a failed ownership match inside that
//! report is still a completed session. Callers must keep the two
//! apart.
//!
//! One session runs at a time per controller; the pipeline stages
//! themselves are pure and safe to share.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use vt_core::{AccountAddress, ProviderId, Timestamp};
use vt_proof::{decode, extract, ExecuteMsg, OrdersOutcome, ProofRecord};

use crate::config::SessionConfig;
use crate::query::{parse_chain_value, ValueQuery};
use crate::sdk::{SdkError, VerificationRequest, VerificationSdk};

// ─── States ──────────────────────────────────────────────────────────

/// The status of a verification session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// No attempt in flight.
    Idle,
    /// Waiting on the external SDK (user-driven, possibly minutes).
    Verifying,
    /// The SDK returned successfully.
    VerificationComplete,
    /// Processing the result (reserved for an on-chain recording step).
    Executing,
    /// The attempt finished and a report was produced.
    Complete,
    /// The attempt was aborted; no result exists.
    Error,
}

impl SessionState {
    /// Returns the canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Verifying => "VERIFYING",
            Self::VerificationComplete => "VERIFICATION_COMPLETE",
            Self::Executing => "EXECUTING",
            Self::Complete => "COMPLETE",
            Self::Error => "ERROR",
        }
    }

    /// Whether this state ends the attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a single state transition within one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State before the transition.
    pub from_state: String,
    /// State after the transition.
    pub to_state: String,
    /// When the transition occurred (UTC).
    pub timestamp: Timestamp,
    /// Human-readable reason for the transition.
    pub reason: Option<String>,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Session-terminating errors. Decode and extraction problems are not
/// here: those degrade to absent values inside the report.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No provider id was resolvable from the request or configuration.
    #[error("configuration error: no verification provider id configured for this run")]
    Configuration,

    /// A precondition failed before any external call was made.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The external SDK raised a typed failure.
    #[error(transparent)]
    Provider(#[from] SdkError),

    /// Attempted transition is not allowed by the state machine.
    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: &'static str,
        /// Attempted target state.
        to: &'static str,
    },
}

// ─── Requests and reports ────────────────────────────────────────────

/// Listing fields that must be filled before a verification attempt.
///
/// Checked before the SDK is invoked, so an incomplete form never costs
/// the user an interactive verification round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequiredFields {
    /// Product name as entered.
    pub product_name: String,
    /// Purchase date as entered.
    pub date_purchased: String,
    /// Retailer order id as entered.
    pub order_id: String,
    /// Free-form order details as entered.
    pub order_details: String,
}

impl RequiredFields {
    fn validate(&self) -> Result<(), SessionError> {
        let all_filled = [
            &self.product_name,
            &self.date_purchased,
            &self.order_id,
            &self.order_details,
        ]
        .iter()
        .all(|f| !f.trim().is_empty());
        if all_filled {
            Ok(())
        } else {
            Err(SessionError::Precondition(
                "fill all product details before starting verification".into(),
            ))
        }
    }
}

/// The input to one verification attempt.
#[derive(Debug, Clone, Default)]
pub struct StartRequest {
    /// The connected account, if any. Absent means no wallet connection.
    pub account: Option<AccountAddress>,
    /// Provider override; falls back to the configured provider.
    pub provider_override: Option<ProviderId>,
    /// Listing fields to pre-validate, if the caller has a form.
    pub required_fields: Option<RequiredFields>,
}

/// The normalized result of a completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// The first proof record, if the SDK returned any.
    pub proof: Option<ProofRecord>,
    /// The provider-reported order count, if resolvable.
    pub extracted_count: Option<u64>,
    /// The extracted order sequence (or raw fallback).
    pub extracted_orders: OrdersOutcome,
    /// The decoded claim context, for operator display.
    pub raw_context: Value,
}

// ─── The controller ──────────────────────────────────────────────────

/// Drives one verification attempt at a time.
///
/// The SDK and the optional value query are constructor-injected so
/// test doubles substitute cleanly for the real collaborators.
pub struct SessionController {
    sdk: Arc<dyn VerificationSdk>,
    query: Option<Arc<dyn ValueQuery>>,
    config: SessionConfig,
    state: SessionState,
    transition_log: Vec<TransitionRecord>,
    chain_value: Option<i64>,
}

impl SessionController {
    /// Create a controller over an SDK implementation.
    pub fn new(sdk: Arc<dyn VerificationSdk>, config: SessionConfig) -> Self {
        Self {
            sdk,
            query: None,
            config,
            state: SessionState::Idle,
            transition_log: Vec::new(),
            chain_value: None,
        }
    }

    /// Attach the optional read-only value query.
    pub fn with_value_query(mut self, query: Arc<dyn ValueQuery>) -> Self {
        self.query = Some(query);
        self
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Transition log of the current attempt.
    pub fn transition_log(&self) -> &[TransitionRecord] {
        &self.transition_log
    }

    /// The last value fetched by the optional query, if any.
    pub fn chain_value(&self) -> Option<i64> {
        self.chain_value
    }

    /// Reset to `Idle`, clearing per-attempt state.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.transition_log.clear();
        self.chain_value = None;
    }

    /// Attempt a state transition with runtime validation.
    ///
    /// `Error` is reachable from every non-terminal state; all other
    /// edges follow the linear attempt sequence.
    pub fn try_transition(
        &mut self,
        to: SessionState,
        reason: Option<String>,
    ) -> Result<(), SessionError> {
        use SessionState::*;
        let valid = matches!(
            (self.state, to),
            (Idle, Verifying)
                | (Verifying, VerificationComplete)
                | (VerificationComplete, Executing)
                | (Executing, Complete)
        ) || (to == Error && !self.state.is_terminal());

        if !valid {
            return Err(SessionError::InvalidTransition {
                from: self.state.name(),
                to: to.name(),
            });
        }

        self.transition_log.push(TransitionRecord {
            from_state: self.state.name().to_string(),
            to_state: to.name().to_string(),
            timestamp: Timestamp::now(),
            reason,
        });
        tracing::debug!(from = %self.state, to = %to, "session transition");
        self.state = to;
        Ok(())
    }

    /// Run one verification attempt.
    ///
    /// On success the session ends in `Complete` and the report carries
    /// whatever the decode/extract chain could recover. On failure the
    /// session ends in `Error` and no report exists.
    pub async fn start(&mut self, request: StartRequest) -> Result<VerificationReport, SessionError> {
        self.reset();

        // Preconditions, checked before any external call.
        let account = request.account.ok_or_else(|| {
            SessionError::Precondition("connect your wallet before verifying".into())
        })?;
        let provider_id = request
            .provider_override
            .or_else(|| self.config.fallback_provider.clone())
            .ok_or(SessionError::Configuration)?;
        if let Some(fields) = &request.required_fields {
            fields.validate()?;
        }

        self.try_transition(SessionState::Verifying, None)?;
        tracing::info!(provider = %provider_id, "starting verification");

        let result = match self
            .sdk
            .start_verification(VerificationRequest {
                app_id: self.config.app_id.clone(),
                secret: self.config.app_secret.clone(),
                provider_id,
            })
            .await
        {
            Ok(result) => result,
            Err(err) => {
                let _ = self.try_transition(SessionState::Error, Some(err.to_string()));
                tracing::error!(error = %err, "verification sdk call failed");
                return Err(SessionError::Provider(err));
            }
        };

        self.try_transition(SessionState::VerificationComplete, None)?;
        // No external effect at this edge; reserved for on-chain recording.
        self.try_transition(SessionState::Executing, None)?;

        let proof = result.proofs.into_iter().next();
        if let Some(p) = &proof {
            // Full payload dump is operator-only diagnostics.
            let execute_msg = ExecuteMsg::from_proof(p);
            tracing::debug!(
                msg = %serde_json::to_string(&execute_msg).unwrap_or_default(),
                "assembled claim submission message"
            );
        } else {
            tracing::warn!("verification result carried no proof records");
        }

        let raw_context = proof
            .as_ref()
            .map(|p| decode(p.claim_data.context.clone()))
            .unwrap_or(Value::Null);
        let extracted = extract(&raw_context);

        // Best-effort value query; failure never blocks completion.
        if let Some(query) = &self.query {
            match query.value_for_account(&account).await {
                Ok(raw) => self.chain_value = parse_chain_value(&raw),
                Err(err) => tracing::warn!(error = %err, "value query failed, continuing"),
            }
        }

        self.try_transition(SessionState::Complete, None)?;

        let extracted_orders = extracted
            .orders
            .map(|orders| orders.into_outcome())
            .unwrap_or(OrdersOutcome::Absent);
        Ok(VerificationReport {
            proof,
            extracted_count: extracted.count,
            extracted_orders,
            raw_context,
        })
    }

    /// Run one attempt and deliver the result to a callback.
    ///
    /// The callback fires exactly once per session: with the report on
    /// a completed session, with `None` when no verification occurred.
    pub async fn start_with_callback<F>(
        &mut self,
        request: StartRequest,
        on_result: F,
    ) -> Result<VerificationReport, SessionError>
    where
        F: FnOnce(Option<&VerificationReport>),
    {
        match self.start(request).await {
            Ok(report) => {
                on_result(Some(&report));
                Ok(report)
            }
            Err(err) => {
                on_result(None);
                Err(err)
            }
        }
    }
}
