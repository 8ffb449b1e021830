//! Credit-deal documents and comments
//!
//! Both are CRUD records scoped to a deal/assignment pair. Each comes in
//! three shapes: the stored record, the create payload (no id, no audit
//! timestamps), and a partial patch for updates.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::serde::string_or_number;

/// Stored credit-deal document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(deserialize_with = "string_or_number")]
    pub credit_document_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub assignment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deal_id: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub storage_file_path: String,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    #[serde(default)]
    pub last_updated_date_time: Option<String>,
}

/// Create payload for a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub assignment_id: String,
    pub deal_id: String,
    pub document_type: String,
    pub file_name: String,
    pub storage_file_path: String,
    pub is_mandatory: bool,
    pub created_by: String,
    pub last_updated_by: String,
}

/// Partial update for a document; only populated fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

/// Stored credit-deal comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "string_or_number")]
    pub comment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub assignment_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deal_id: String,
    #[serde(default)]
    pub comment_text: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    #[serde(default)]
    pub last_updated_date_time: Option<String>,
}

/// Create payload for a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub assignment_id: String,
    pub deal_id: String,
    pub comment_text: String,
    pub created_by: String,
    pub last_updated_by: String,
}

/// Partial update for a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}
