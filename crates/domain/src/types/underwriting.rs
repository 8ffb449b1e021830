//! Underwriter analysis records
//!
//! Underwriters file their own supporting documents and one financial
//! analysis per deal, both scoped to an underwriting assignment.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::serde::string_or_number;

/// Document filed by an underwriter during analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDocument {
    #[serde(deserialize_with = "string_or_number")]
    pub uw_document_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub assignment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deal_id: String,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub storage_file_path: Option<String>,
    #[serde(default)]
    pub is_mandatory: Option<bool>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    #[serde(default)]
    pub last_updated_date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnalysisDocument {
    pub assignment_id: String,
    pub deal_id: String,
    pub document_type: String,
    pub storage_file_path: String,
    pub is_mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_by: String,
    pub last_updated_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

/// Balance-sheet ratios an underwriter records for a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysis {
    #[serde(deserialize_with = "string_or_number")]
    pub financial_analysis_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub assignment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deal_id: String,
    #[serde(default)]
    pub asset_value: Option<f64>,
    #[serde(default)]
    pub liability_value: Option<f64>,
    #[serde(default)]
    pub current_portion_long_term_debt: Option<f64>,
    #[serde(default)]
    pub debt_coverage_ratio: Option<f64>,
    #[serde(default)]
    pub liability_ratio: Option<f64>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    #[serde(default)]
    pub last_updated_date_time: Option<String>,
}

/// Create payload for a financial analysis. Unset ratios are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialAnalysis {
    pub assignment_id: String,
    pub deal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_portion_long_term_debt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_coverage_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_ratio: Option<f64>,
    pub created_by: String,
    pub last_updated_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysisPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_portion_long_term_debt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_coverage_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liability_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}
