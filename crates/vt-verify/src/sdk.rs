//! # Verification SDK Boundary
//!
//! The external zkTLS verification SDK as a trait. The SDK's internal
//! cryptography and network protocol are opaque; only the input/output
//! contract is modeled here. Implementations must be interchangeable at
//! the session controller's constructor.
//!
//! The call awaits a user-driven, potentially long-lived out-of-app
//! interaction (seconds to minutes). No timeout is imposed here; a hung
//! call blocks the session until the SDK resolves or rejects.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use thiserror::Error;

use vt_core::ProviderId;
use vt_proof::VerificationResult;

/// Typed failure signals raised by the external SDK.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// The user cancelled the verification flow.
    #[error("verification was cancelled")]
    Cancelled,

    /// The user dismissed the verification flow before completing it.
    #[error("verification was dismissed before completion")]
    Dismissed,

    /// The verification session expired before completion.
    #[error("verification session expired, start again to retry")]
    SessionExpired,

    /// The SDK reported a generic failure.
    #[error("verification failed: {0}")]
    Failed(String),
}

/// The input contract of one verification call.
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// Application id issued by the verification provider.
    pub app_id: String,
    /// Application secret issued by the verification provider.
    pub secret: String,
    /// The retailer provider profile to verify against.
    pub provider_id: ProviderId,
}

/// Abstract interface to the external verification SDK.
///
/// `Send + Sync` so a controller can be driven from any task. The call
/// is pure request/response from the caller's point of view; all
/// interactive steps happen inside the SDK.
#[async_trait]
pub trait VerificationSdk: Send + Sync {
    /// Run one verification attempt and return the raw result.
    async fn start_verification(
        &self,
        request: VerificationRequest,
    ) -> Result<VerificationResult, SdkError>;
}

/// An SDK implementation that replays a canned outcome.
///
/// Used as a test double and by the CLI to re-run the pipeline over a
/// recorded payload without the interactive SDK.
#[derive(Debug)]
pub struct ReplaySdk {
    outcome: Result<VerificationResult, SdkError>,
    calls: AtomicUsize,
}

impl ReplaySdk {
    /// Replay a successful verification result.
    pub fn success(result: VerificationResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replay an SDK failure.
    pub fn failure(error: SdkError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times the SDK was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerificationSdk for ReplaySdk {
    async fn start_verification(
        &self,
        _request: VerificationRequest,
    ) -> Result<VerificationResult, SdkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replay_success() {
        let sdk = ReplaySdk::success(VerificationResult::default());
        let request = VerificationRequest {
            app_id: "app".into(),
            secret: "secret".into(),
            provider_id: ProviderId::new("p").unwrap(),
        };
        assert!(sdk.start_verification(request).await.is_ok());
        assert_eq!(sdk.calls(), 1);
    }

    #[tokio::test]
    async fn test_replay_failure() {
        let sdk = ReplaySdk::failure(SdkError::Cancelled);
        let request = VerificationRequest {
            app_id: "app".into(),
            secret: "secret".into(),
            provider_id: ProviderId::new("p").unwrap(),
        };
        assert_eq!(
            sdk.start_verification(request).await.unwrap_err(),
            SdkError::Cancelled
        );
    }

    #[test]
    fn test_error_messages_distinct() {
        let messages = [
            SdkError::Cancelled.to_string(),
            SdkError::Dismissed.to_string(),
            SdkError::SessionExpired.to_string(),
            SdkError::Failed("x".into()).to_string(),
        ];
        for i in 0..messages.len() {
            for j in (i + 1)..messages.len() {
                assert_ne!(messages[i], messages[j]);
            }
        }
    }
}
