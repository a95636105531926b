//! # Optional Value Query
//!
//! A read-only, smart-contract-style query keyed by account address,
//! returning a numeric string. The query is strictly best-effort: a
//! failure is logged for operators and otherwise ignored, never
//! surfaced to the user and never allowed to fail a session.

use async_trait::async_trait;
use thiserror::Error;

use vt_core::AccountAddress;

/// Error from the value query collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query could not be executed or returned garbage.
    #[error("value query failed: {0}")]
    Failed(String),
}

/// Abstract interface to the read-only value contract.
#[async_trait]
pub trait ValueQuery: Send + Sync {
    /// Fetch the raw value string recorded for an account.
    async fn value_for_account(&self, address: &AccountAddress) -> Result<String, QueryError>;
}

/// Parse a raw contract response into a numeric value.
///
/// The contract returns a JSON-ish quoted numeric string; quote
/// characters are stripped and the leading integer parsed. Anything
/// unparseable resolves to absent.
pub fn parse_chain_value(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| *c != '"').collect();
    let trimmed = cleaned.trim();

    // Leading-integer parse: sign plus digit prefix, ignoring trailing
    // garbage the way a lenient integer parser would.
    let mut end = 0;
    let bytes = trimmed.as_bytes();
    if !bytes.is_empty() && (bytes[0] == b'-' || bytes[0] == b'+') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    trimmed[..end].parse::<i64>().ok()
}

/// A canned value query for tests and offline runs.
#[derive(Debug)]
pub struct MockValueQuery {
    outcome: Result<String, QueryError>,
}

impl MockValueQuery {
    /// Always return the given raw value.
    pub fn returning(raw: impl Into<String>) -> Self {
        Self {
            outcome: Ok(raw.into()),
        }
    }

    /// Always fail.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(QueryError::Failed(message.into())),
        }
    }
}

#[async_trait]
impl ValueQuery for MockValueQuery {
    async fn value_for_account(&self, _address: &AccountAddress) -> Result<String, QueryError> {
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_number_parses() {
        assert_eq!(parse_chain_value("\"42\""), Some(42));
    }

    #[test]
    fn test_bare_number_parses() {
        assert_eq!(parse_chain_value("7"), Some(7));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_chain_value("\"12abc\""), Some(12));
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(parse_chain_value("-3"), Some(-3));
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(parse_chain_value("not a number"), None);
        assert_eq!(parse_chain_value(""), None);
        assert_eq!(parse_chain_value("\"\""), None);
    }

    #[tokio::test]
    async fn test_mock_query() {
        let q = MockValueQuery::returning("\"5\"");
        let raw = q
            .value_for_account(&AccountAddress("xion1qtest".into()))
            .await
            .unwrap();
        assert_eq!(parse_chain_value(&raw), Some(5));
    }
}
