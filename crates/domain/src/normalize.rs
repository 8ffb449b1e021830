//! Deal listing normalization
//!
//! Every workflow stage reads the same by-status listing and needs the same
//! UI-facing shape, so the defaulting and renaming live here once.
//!
//! Falsy values follow the listing's historical contract: an empty string
//! counts as absent, and a commitment amount of `0`, `false` or `null`
//! renders as `"N/A"`.

use serde_json::Value;

use crate::constants::{DEFAULT_DEAL_PHASE, NOT_AVAILABLE};
use crate::types::{Deal, RawDeal};

/// Convert a raw listing entry into a [`Deal`].
pub fn normalize_deal(raw: RawDeal) -> Deal {
    Deal {
        id: raw.id,
        deal_id: raw.deal_id,
        customer_id: non_empty_or(raw.customer_id, NOT_AVAILABLE),
        customer_name: raw.customer_name,
        initiator: non_empty_or(raw.initiator, NOT_AVAILABLE),
        total_commitment_amount: commitment_text(raw.commitment_amount),
        deal_phase: non_empty_or(raw.stage, DEFAULT_DEAL_PHASE),
        status: raw.status,
    }
}

/// Normalize a whole listing, preserving order.
pub fn normalize_deals(raw: Vec<RawDeal>) -> Vec<Deal> {
    raw.into_iter().map(normalize_deal).collect()
}

impl From<RawDeal> for Deal {
    fn from(raw: RawDeal) -> Self {
        normalize_deal(raw)
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn commitment_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
