//! # Verification Route
//!
//! Routes:
//! - POST /v1/verify — run the decode/extract/match pipeline over a
//!   recorded proof payload and a seller claim
//!
//! The endpoint replays a captured SDK result through the same session
//! controller the interactive flow uses; there is no live SDK call
//! behind it.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vt_core::{AccountAddress, ListingClaim};
use vt_proof::{OrderRecord, VerificationResult};
use vt_verify::{
    evaluate, MatchOutcome, ReplaySdk, SessionController, SessionState, StartRequest,
};

use crate::{AppError, AppState};

/// Body of a verification request.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// The seller's account address.
    pub account: String,
    /// Provider registry key (e.g., `rare-t`).
    pub provider_key: String,
    /// The seller's listing claim fields.
    pub claim: ClaimFields,
    /// A recorded raw verification result.
    pub payload: Value,
}

/// Seller-entered claim fields.
#[derive(Debug, Deserialize)]
pub struct ClaimFields {
    /// Product name.
    pub product_name: String,
    /// Purchase date, free-form.
    pub date_purchased: String,
    /// Retailer order id.
    pub order_id: String,
    /// Free-form order details.
    pub order_details: String,
}

/// Verification verdict.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// Whether the claim matched a provider-reported order.
    pub verified: bool,
    /// User-facing verdict message.
    pub message: String,
    /// The matched order, when verified.
    pub matched_order: Option<OrderRecord>,
    /// The provider-reported order count.
    pub extracted_count: Option<u64>,
    /// The session's final state.
    pub session_state: SessionState,
}

/// Verification router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/verify", post(verify))
}

async fn verify(
    State(state): State<AppState>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let provider_id = state
        .registry
        .resolve(&body.provider_key)
        .map_err(|e| AppError::Validation(e.to_string()))?
        .clone();

    let claim = ListingClaim::new(
        body.claim.product_name,
        body.claim.date_purchased,
        body.claim.order_id,
        body.claim.order_details,
        provider_id.clone(),
    )
    .map_err(|e| AppError::Validation(e.to_string()))?;

    let payload: VerificationResult = serde_json::from_value(body.payload)
        .map_err(|e| AppError::Validation(format!("unreadable proof payload: {e}")))?;

    let sdk = Arc::new(ReplaySdk::success(payload));
    let mut controller = SessionController::new(sdk, state.session_config.clone());
    let report = controller
        .start(StartRequest {
            account: Some(AccountAddress(body.account)),
            provider_override: Some(provider_id),
            required_fields: None,
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let outcome = evaluate(&claim, report.extracted_count, &report.extracted_orders);
    let response = match outcome {
        MatchOutcome::Verified(order) => VerifyResponse {
            verified: true,
            message: "product is verified and ready to be listed".into(),
            matched_order: Some(order),
            extracted_count: report.extracted_count,
            session_state: controller.state(),
        },
        MatchOutcome::Failed(failure) => VerifyResponse {
            verified: false,
            message: failure.to_string(),
            matched_order: None,
            extracted_count: report.extracted_count,
            session_state: controller.state(),
        },
    };
    Ok(Json(response))
}
