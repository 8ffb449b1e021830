//! Reference data: dropdown values and the product catalogue
//!
//! The catalogue is a five-level tree. Each level is listed under its
//! parent's id; business domains are the roots.

use dealdesk_domain::ProductEntity;
use serde::Deserialize;
use tracing::instrument;

use crate::api::{encode_segment, ApiClient, ApiError, Operation};

#[derive(Debug, Deserialize)]
struct TranslateField {
    id: TranslateFieldId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateFieldId {
    field_value: String,
}

const PRODUCT_SELECTION: &str = "/api/product-selection";

/// A level of the product catalogue below the business domains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLevel {
    /// Categories of a business domain
    Categories,
    /// Subcategories of a category
    Subcategories,
    /// Products of a subcategory
    Products,
    /// Sub-products of a product
    SubProducts,
}

impl CatalogLevel {
    const fn endpoint(self) -> &'static str {
        match self {
            Self::Categories => "product-categories",
            Self::Subcategories => "product-subcategories",
            Self::Products => "products",
            Self::SubProducts => "sub-products",
        }
    }

    /// Query parameter naming the parent entry
    const fn parent_param(self) -> &'static str {
        match self {
            Self::Categories => "businessDomainId",
            Self::Subcategories => "productCategoryId",
            Self::Products => "productSubCategoryId",
            Self::SubProducts => "productId",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceDataClient {
    api: ApiClient,
}

impl ReferenceDataClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Allowed values for a form field, in server order
    pub async fn dropdown_values(&self, field_name: &str) -> Result<Vec<String>, ApiError> {
        let path = format!("/api/translate-field/{}", encode_segment(field_name));
        let entries: Vec<TranslateField> =
            self.api.get(Operation::FetchDropdownValues, &path).await?;
        Ok(entries.into_iter().map(|entry| entry.id.field_value).collect())
    }

    pub async fn business_domains(&self) -> Result<Vec<ProductEntity>, ApiError> {
        let path = format!("{PRODUCT_SELECTION}/business-domains");
        self.api.get(Operation::FetchProductCatalog, &path).await
    }

    /// Children of `parent_id` at `level`
    #[instrument(skip(self))]
    pub async fn catalog_entries(
        &self,
        level: CatalogLevel,
        parent_id: &str,
    ) -> Result<Vec<ProductEntity>, ApiError> {
        let path = format!(
            "{PRODUCT_SELECTION}/{}?{}={}",
            level.endpoint(),
            level.parent_param(),
            encode_segment(parent_id)
        );
        self.api.get(Operation::FetchProductCatalog, &path).await
    }
}
