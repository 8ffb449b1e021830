//! Customer directory and product catalogue records

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::serde::{opt_string_or_number, string_or_number};

/// Directory entry for a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "customerID", deserialize_with = "string_or_number")]
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_code: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_region: Option<String>,
    #[serde(default)]
    pub customer_status: Option<String>,
    #[serde(default)]
    pub risk_rating: Option<String>,
    #[serde(default)]
    pub customer_type: Option<String>,
}

/// Subsidiary listed under a parent customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ChildCustomer {
    #[serde(rename = "customerID", deserialize_with = "string_or_number")]
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub cif: Option<String>,
    #[serde(default)]
    pub onboarded_date: Option<String>,
    #[serde(default)]
    pub segment_code: Option<String>,
    #[serde(default)]
    pub risk_rating: Option<String>,
    #[serde(default)]
    pub tax_code: Option<String>,
}

/// Customer with every related record the details endpoint returns.
///
/// Accounts, collateral, contacts and facilities are passed through as
/// raw JSON; the client only reads the customer and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub customer: Customer,
    #[serde(default)]
    pub customer_accounts: Vec<Value>,
    #[serde(default)]
    pub customer_collaterals: Vec<Value>,
    #[serde(default)]
    pub customer_contacts: Vec<Value>,
    #[serde(default)]
    pub customer_contact_addresses: Vec<Value>,
    #[serde(default)]
    pub customer_contact_emails: Vec<Value>,
    #[serde(default)]
    pub customer_contact_phones: Vec<Value>,
    #[serde(default)]
    pub customer_facilities: Vec<Value>,
    #[serde(default)]
    pub child_customers: Vec<ChildCustomer>,
}

/// One node of the product catalogue: business domain, category,
/// subcategory, product or sub-product.
///
/// Exactly one of the id fields is set, depending on the level queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "opt_string_or_number")]
    pub business_domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "opt_string_or_number")]
    pub product_category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "opt_string_or_number")]
    pub product_sub_category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "opt_string_or_number")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "opt_string_or_number")]
    pub sub_product_id: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl ProductEntity {
    /// Identifier at whichever catalogue level this entry belongs to
    pub fn id(&self) -> Option<&str> {
        self.sub_product_id
            .as_deref()
            .or(self.product_id.as_deref())
            .or(self.product_sub_category_id.as_deref())
            .or(self.product_category_id.as_deref())
            .or(self.business_domain_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_tolerate_missing_collections() {
        let details: CustomerDetails = serde_json::from_str(
            r#"{"customer": {"customerID": 77, "customerName": "Hooli", "riskRating": "B"},
                "customerAccounts": [{"accountNo": "001"}],
                "childCustomers": [{"customerID": "78", "customerName": "Hooli Labs", "cif": 9912}]}"#,
        )
        .unwrap();

        assert_eq!(details.customer.customer_id, "77");
        assert_eq!(details.customer_accounts.len(), 1);
        assert!(details.customer_facilities.is_empty());
        assert_eq!(details.child_customers[0].cif.as_deref(), Some("9912"));
    }

    #[test]
    fn catalogue_entry_reports_its_level_id() {
        let category: ProductEntity = serde_json::from_str(
            r#"{"businessDomainId": 1, "productCategoryId": 14, "description": "Term Loans"}"#,
        )
        .unwrap();
        assert_eq!(category.id(), Some("14"));

        let domain: ProductEntity =
            serde_json::from_str(r#"{"businessDomainId": "CORP", "description": "Corporate"}"#)
                .unwrap();
        assert_eq!(domain.id(), Some("CORP"));
    }
}
