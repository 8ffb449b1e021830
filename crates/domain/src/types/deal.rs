//! Deal records
//!
//! `RawDeal` is what the by-status listing returns; the field names and
//! types vary between backend versions. `Deal` is the shape every workflow
//! stage hands to the UI, produced by [`crate::normalize::normalize_deal`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::status::DealStatus;
use crate::utils::serde::opt_string_or_number;

/// Deal as returned by `/api/dashboard/deal/by-status/{status}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeal {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub deal_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub initiator: Option<String>,
    /// String or number depending on the endpoint.
    #[serde(default)]
    pub commitment_amount: Option<Value>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Normalized deal listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub initiator: String,
    pub total_commitment_amount: String,
    pub deal_phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Full deal entity served by `/api/deal/{dealId}`
///
/// Fields this client does not model are kept in `extra` so a
/// read-modify-write cycle sends them back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    #[serde(deserialize_with = "crate::utils::serde::string_or_number")]
    pub deal_id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub deal_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_phase: Option<String>,
    #[serde(default)]
    pub initiator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "ts-gen", ts(skip))]
    pub extra: Map<String, Value>,
}

/// Payload for `POST /api/deals/draft`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDraftDeal {
    pub customer_id: String,
    pub customer_name: String,
    pub initiator: String,
}

/// Status change recorded by a reviewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub deal_status: DealStatus,
    pub last_updated_by: String,
}
