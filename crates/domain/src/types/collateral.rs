//! Write-side deal records: collateral, commitments, financial statuses and
//! special conditions

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Collateral pledged against a deal, keyed by `{dealID, collateralID}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Collateral {
    #[serde(rename = "dealID")]
    pub deal_id: String,
    #[serde(rename = "collateralID")]
    pub collateral_id: i64,
    pub collateral_type: String,
    pub collateral_value: f64,
    pub currency: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<String>,
}

/// Composite identity of a collateral record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollateralKey {
    pub deal_id: String,
    pub collateral_id: i64,
}

impl Collateral {
    pub fn key(&self) -> CollateralKey {
        CollateralKey { deal_id: self.deal_id.clone(), collateral_id: self.collateral_id }
    }
}

/// Commitment line on a deal. `commitmentNumber` is assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    #[serde(rename = "dealID")]
    pub deal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment_number: Option<i64>,
    pub currency: String,
    pub commitment_amount: f64,
    pub tenure: i32,
    #[serde(rename = "productID", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "subProductID", default, skip_serializing_if = "Option::is_none")]
    pub sub_product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

/// Financial statement reference filed against a deal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatus {
    #[serde(rename = "dealID")]
    pub deal_id: String,
    pub year: String,
    pub description: String,
    pub storage_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<String>,
}

/// Numbered special condition attached to a deal's terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct SpecialCondition {
    #[serde(rename = "dealID")]
    pub deal_id: String,
    pub condition_number: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<String>,
}
