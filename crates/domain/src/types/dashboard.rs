//! Dashboard read models

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::serde::{opt_string_or_number, string_or_number};

/// Number of deals currently in one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DealStatusCount {
    pub status: String,
    pub count: u64,
}

/// Headline figure; the API sends either text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DashboardMetric {
    pub value: MetricValue,
    pub label: String,
}

/// Row of the dashboard deal table
///
/// Apart from the identifiers every column may be missing, `null`, or a
/// number where text is expected (`commitmentAmount` in particular).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct DealTableRow {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deal_id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub commitment_amount: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_accepts_text_or_number() {
        let metrics: Vec<DashboardMetric> = serde_json::from_str(
            r#"[{"value": "8", "label": "Awaiting Approval"}, {"value": 25, "label": "Closed"}]"#,
        )
        .unwrap();
        assert_eq!(metrics[0].value, MetricValue::Text("8".into()));
        assert_eq!(metrics[1].value, MetricValue::Number(25.0));
    }

    #[test]
    fn table_row_tolerates_numbers_and_nulls() {
        let rows: Vec<DealTableRow> = serde_json::from_str(
            r#"[{"id": 11, "dealId": "DEAL-11", "commitmentAmount": 500000, "stage": null,
                 "customerName": "Initech", "status": "Submitted"}]"#,
        )
        .unwrap();

        let row = &rows[0];
        assert_eq!(row.id, "11");
        assert_eq!(row.commitment_amount.as_deref(), Some("500000"));
        assert_eq!(row.stage, None);
        assert_eq!(row.priority, None);
        assert_eq!(row.status.as_deref(), Some("Submitted"));
    }
}
