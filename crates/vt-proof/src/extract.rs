//! # Purchase-Order Extraction
//!
//! Pulls a normalized order count and order list out of a decoded claim
//! context. Providers disagree about where the extracted parameters
//! live (top level vs nested one deeper under `context`), what the
//! count field is called, what the orders field is called, and whether
//! the orders arrive as an array, a single object, an encoded string,
//! or a fragment that will not parse at all.
//!
//! Every branch has a defined fallback; no input shape is rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded, provider-agnostic form of a claim context.
///
/// `count` and `orders` are independently optional: a provider may
/// report a count with no order array, or vice versa. Neither implies
/// the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    /// Total matching purchase orders reported by the provider.
    pub count: Option<u64>,
    /// The order payload, if any.
    pub orders: Option<ExtractedOrders>,
}

/// The orders value as reported, before caller-side flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedOrders {
    /// Structured order data: an array, or a single bare object (the
    /// caller treats a bare object as a one-element sequence).
    Structured(Value),
    /// The provider's string could not be decoded; preserved verbatim.
    Raw(String),
}

/// One purchase order as reported by the retailer through the proof.
///
/// All fields are optional; each resolves through the alternate field
/// names different providers use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Retailer order id (`orderId`, `id`, `order_id`).
    pub order_id: Option<String>,
    /// Product name or title (`name`, `product`, `title`).
    pub name: Option<String>,
    /// Purchase date, free-form (`date_purchased`, `date`, `purchase_date`).
    pub date_purchased: Option<String>,
    /// Free-form order details (`details`, `orderDetails`).
    pub details: Option<String>,
}

impl OrderRecord {
    /// Build an order record from a raw order value, resolving
    /// alternate field names and coercing scalar values to strings
    /// (a numeric order id must compare equal to its string form).
    pub fn from_value(value: &Value) -> Self {
        Self {
            order_id: first_field(value, &["orderId", "id", "order_id"]),
            name: first_field(value, &["name", "product", "title"]),
            date_purchased: first_field(value, &["date_purchased", "date", "purchase_date"]),
            details: first_field(value, &["details", "orderDetails"]),
        }
    }
}

/// The order sequence after caller-side flattening, ready for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrdersOutcome {
    /// A usable order sequence (possibly empty).
    Orders(Vec<OrderRecord>),
    /// An undecodable string, preserved for display.
    Raw(String),
    /// No usable order data of any shape.
    Absent,
}

impl ExtractedOrders {
    /// Flatten into a matchable order sequence.
    ///
    /// An array maps element-wise; a single bare object becomes a
    /// one-element sequence; a string is given one more decode attempt
    /// (some providers stringify the array a second time) and kept raw
    /// if that fails; anything else is unusable.
    pub fn into_outcome(self) -> OrdersOutcome {
        match self {
            Self::Structured(Value::Array(items)) => {
                OrdersOutcome::Orders(items.iter().map(OrderRecord::from_value).collect())
            }
            Self::Structured(value @ Value::Object(_)) => {
                OrdersOutcome::Orders(vec![OrderRecord::from_value(&value)])
            }
            Self::Structured(Value::String(s)) | Self::Raw(s) => {
                match serde_json::from_str::<Value>(&s) {
                    Ok(Value::Array(items)) => {
                        OrdersOutcome::Orders(items.iter().map(OrderRecord::from_value).collect())
                    }
                    _ => OrdersOutcome::Raw(s),
                }
            }
            Self::Structured(_) => OrdersOutcome::Absent,
        }
    }
}

/// Extract the order count and order list from a decoded context.
///
/// The `extractedParameters` substructure is looked up first at the top
/// level, then one level deeper under a nested `context` key (providers
/// that double-wrap). Absent at both locations, or not an object, the
/// result is empty.
pub fn extract(context: &Value) -> ExtractedClaim {
    let Some(params) = locate_parameters(context) else {
        return ExtractedClaim::default();
    };

    let count = ["count", "order_count", "followers_count"]
        .iter()
        .find_map(|key| params.get(*key).filter(|v| !v.is_null()))
        .and_then(coerce_count);

    let orders = ["orders", "order_list"]
        .iter()
        .find_map(|key| params.get(*key).filter(|v| !v.is_null()))
        .map(|raw| match raw {
            Value::String(s) if s.as_str() == "[]" => {
                ExtractedOrders::Structured(Value::Array(vec![]))
            }
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(parsed) => ExtractedOrders::Structured(parsed),
                Err(_) => ExtractedOrders::Raw(s.clone()),
            },
            other => ExtractedOrders::Structured(other.clone()),
        });

    tracing::debug!(?count, has_orders = orders.is_some(), "extracted claim parameters");
    ExtractedClaim { count, orders }
}

/// Find `extractedParameters` at the top level or one level deeper.
fn locate_parameters(context: &Value) -> Option<&Value> {
    context
        .get("extractedParameters")
        .or_else(|| context.get("context")?.get("extractedParameters"))
        .filter(|v| v.is_object())
}

/// Coerce a count value to a non-negative integer.
///
/// Accepts JSON numbers and numeric strings. Garbage coerces to absent;
/// fractional counts truncate toward zero; negative counts floor to
/// zero (a reported cardinality cannot be negative).
fn coerce_count(value: &Value) -> Option<u64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() {
        return None;
    }
    Some(n.max(0.0) as u64)
}

/// Resolve the first present field among `keys`, coercing scalars to
/// strings. Nulls and compound values resolve to absent.
fn first_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
