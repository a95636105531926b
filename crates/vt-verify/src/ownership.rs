//! # Ownership Matching
//!
//! Compares a seller's listing claim against the purchase orders
//! extracted from a web proof and decides whether the listing may
//! proceed.
//!
//! The match is intentionally simple: normalized equality on order id,
//! product name, and purchase date, with the first satisfying order in
//! sequence winning. There is no scoring and no best-match ranking.

use thiserror::Error;

use vt_core::ListingClaim;
use vt_proof::{OrderRecord, OrdersOutcome};

use crate::date::normalize_date;

/// The outcome of matching a listing claim against extracted orders.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The claim matched a provider-reported order.
    Verified(OrderRecord),
    /// The claim could not be verified.
    Failed(MatchFailure),
}

impl MatchOutcome {
    /// Whether the claim was verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }
}

/// Why a claim failed to verify. Each variant carries a distinct
/// user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFailure {
    /// The provider reported a zero order count.
    #[error("order count is zero: there are no purchase orders to verify")]
    ZeroOrdersReported,

    /// The provider reported orders but none were usable.
    #[error("no order data found in the verification result")]
    NoOrderData,

    /// Orders were present but none satisfied the claim.
    #[error("order details do not match the verified ownership")]
    NoMatchFound,
}

/// Gate on the provider-reported count, then match.
///
/// An absent count is treated as zero: a provider that reports nothing
/// has verified nothing. The matcher itself never runs when the count
/// gate fails.
pub fn evaluate(claim: &ListingClaim, count: Option<u64>, orders: &OrdersOutcome) -> MatchOutcome {
    if count.unwrap_or(0) == 0 {
        return MatchOutcome::Failed(MatchFailure::ZeroOrdersReported);
    }
    match orders {
        OrdersOutcome::Orders(records) if !records.is_empty() => match_claim(claim, records),
        _ => MatchOutcome::Failed(MatchFailure::NoOrderData),
    }
}

/// Match a listing claim against an order sequence.
///
/// For each candidate: the order id must compare exactly; the product
/// name and purchase date must compare after normalization, with an
/// empty claim field wildcarding to true. The first satisfying
/// candidate in sequence order wins.
pub fn match_claim(claim: &ListingClaim, orders: &[OrderRecord]) -> MatchOutcome {
    if orders.is_empty() {
        return MatchOutcome::Failed(MatchFailure::NoOrderData);
    }

    let want_id = claim.order_id.trim();
    let want_name = claim.product_name.trim().to_lowercase();
    let want_date = normalize_date(&claim.date_purchased);

    for order in orders {
        let id = order.order_id.as_deref().unwrap_or("");
        let name = order
            .name
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();
        let date = normalize_date(order.date_purchased.as_deref().unwrap_or(""));

        let id_match = id == want_id;
        let name_match = want_name.is_empty() || name == want_name;
        let date_match = want_date.is_empty() || date == want_date;

        if id_match && name_match && date_match {
            return MatchOutcome::Verified(order.clone());
        }
    }

    MatchOutcome::Failed(MatchFailure::NoMatchFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vt_core::ProviderId;

    fn claim() -> ListingClaim {
        ListingClaim::new(
            "Widget",
            "2024-01-01",
            "ORD1",
            "x",
            ProviderId::new("rare-t-orders-v1").unwrap(),
        )
        .unwrap()
    }

    fn order(value: serde_json::Value) -> OrderRecord {
        OrderRecord::from_value(&value)
    }

    // ── Matching rules ───────────────────────────────────────────────

    #[test]
    fn test_cross_format_date_match() {
        // Claim date ISO, order date day-first: equal after normalization.
        let orders = vec![order(json!({
            "orderId": "ORD1", "name": "Widget", "date_purchased": "01/01/2024"
        }))];
        let MatchOutcome::Verified(matched) = match_claim(&claim(), &orders) else {
            panic!("expected verified");
        };
        assert_eq!(matched.order_id.as_deref(), Some("ORD1"));
    }

    #[test]
    fn test_id_mismatch_defeats_matching_name_and_date() {
        let orders = vec![order(json!({
            "orderId": "ORD2", "name": "Widget", "date_purchased": "2024-01-01"
        }))];
        assert_eq!(
            match_claim(&claim(), &orders),
            MatchOutcome::Failed(MatchFailure::NoMatchFound)
        );
    }

    #[test]
    fn test_name_comparison_is_case_and_whitespace_insensitive() {
        let orders = vec![order(json!({
            "orderId": "ORD1", "name": "  WIDGET  ", "date_purchased": "2024-01-01"
        }))];
        assert!(match_claim(&claim(), &orders).is_verified());
    }

    #[test]
    fn test_first_of_two_satisfying_orders_wins() {
        let orders = vec![
            order(json!({
                "orderId": "ORD1", "name": "Widget",
                "date_purchased": "2024-01-01", "details": "first"
            })),
            order(json!({
                "orderId": "ORD1", "name": "Widget",
                "date_purchased": "2024-01-01", "details": "second"
            })),
        ];
        let MatchOutcome::Verified(matched) = match_claim(&claim(), &orders) else {
            panic!("expected verified");
        };
        assert_eq!(matched.details.as_deref(), Some("first"));
    }

    #[test]
    fn test_alternate_id_field_matches() {
        let orders = vec![order(json!({
            "id": "ORD1", "product": "widget", "date": "2024-01-01"
        }))];
        assert!(match_claim(&claim(), &orders).is_verified());
    }

    #[test]
    fn test_order_with_no_fields_never_matches() {
        let orders = vec![order(json!({}))];
        assert_eq!(
            match_claim(&claim(), &orders),
            MatchOutcome::Failed(MatchFailure::NoMatchFound)
        );
    }

    #[test]
    fn test_empty_sequence_is_no_order_data() {
        assert_eq!(
            match_claim(&claim(), &[]),
            MatchOutcome::Failed(MatchFailure::NoOrderData)
        );
    }

    // ── Count gate ───────────────────────────────────────────────────

    #[test]
    fn test_zero_count_never_reaches_matcher() {
        // Orders that would match are irrelevant once the count is zero.
        let orders = OrdersOutcome::Orders(vec![order(json!({
            "orderId": "ORD1", "name": "Widget", "date_purchased": "2024-01-01"
        }))]);
        assert_eq!(
            evaluate(&claim(), Some(0), &orders),
            MatchOutcome::Failed(MatchFailure::ZeroOrdersReported)
        );
    }

    #[test]
    fn test_absent_count_treated_as_zero() {
        let orders = OrdersOutcome::Orders(vec![order(json!({"orderId": "ORD1"}))]);
        assert_eq!(
            evaluate(&claim(), None, &orders),
            MatchOutcome::Failed(MatchFailure::ZeroOrdersReported)
        );
    }

    #[test]
    fn test_raw_orders_are_no_order_data() {
        assert_eq!(
            evaluate(&claim(), Some(1), &OrdersOutcome::Raw("garbage".into())),
            MatchOutcome::Failed(MatchFailure::NoOrderData)
        );
    }

    #[test]
    fn test_count_with_empty_sequence_is_no_order_data() {
        assert_eq!(
            evaluate(&claim(), Some(2), &OrdersOutcome::Orders(vec![])),
            MatchOutcome::Failed(MatchFailure::NoOrderData)
        );
    }

    #[test]
    fn test_positive_count_with_match_verifies() {
        let orders = OrdersOutcome::Orders(vec![order(json!({
            "orderId": "ORD1", "name": "Widget", "date_purchased": "01/01/2024"
        }))]);
        assert!(evaluate(&claim(), Some(1), &orders).is_verified());
    }

    // ── Failure messages are distinct ────────────────────────────────

    #[test]
    fn test_failure_messages_distinct() {
        let messages = [
            MatchFailure::ZeroOrdersReported.to_string(),
            MatchFailure::NoOrderData.to_string(),
            MatchFailure::NoMatchFound.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }
}
