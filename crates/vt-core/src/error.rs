//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the Veritrade stack. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors name the violating field.
//! - State machine errors include the current state and the attempted
//!   transition.
//! - Collaborator-specific taxonomies (session, store, query) live next
//!   to the code they describe; this is only the shared core.

use thiserror::Error;

/// Top-level error type for the Veritrade stack.
#[derive(Error, Debug)]
pub enum VtError {
    /// A required field was missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// State machine transition rejected.
    #[error("invalid state transition: {0}")]
    InvalidTransition(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for VtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
