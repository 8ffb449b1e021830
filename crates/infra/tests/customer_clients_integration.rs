//! Customer directory and product catalogue lookups

mod support;

use dealdesk_infra::{CatalogLevel, CustomerClient, ReferenceDataClient};
use serde_json::json;
use support::{api_client, capture_events};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_customer_directory_and_details() {
    let (_events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "customerID": "C-1",
                "customerName": "Acme",
                "customerCode": "ACM",
                "industry": "Manufacturing",
                "riskRating": "A"
            },
            { "customerID": 2, "customerName": "Globex" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/C-1/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": { "customerID": "C-1", "customerName": "Acme" },
            "customerAccounts": [{ "accountNumber": "001-22" }],
            "customerFacilities": [],
            "childCustomers": [
                { "customerID": "C-1A", "customerName": "Acme Logistics", "cif": "88123" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customers = CustomerClient::new(api_client(&server));
    let directory = customers.customers().await.unwrap();
    assert_eq!(directory[0].industry.as_deref(), Some("Manufacturing"));
    assert_eq!(directory[1].customer_id, "2");

    let details = customers.customer_details("C-1").await.unwrap();
    assert_eq!(details.customer.customer_name, "Acme");
    assert_eq!(details.customer_accounts[0]["accountNumber"], "001-22");
    assert!(details.customer_contacts.is_empty());
    assert_eq!(details.child_customers[0].customer_name, "Acme Logistics");
}

#[tokio::test]
async fn test_customer_details_failure_has_fixed_message() {
    let (events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/C%2F9/details"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = CustomerClient::new(api_client(&server)).customer_details("C/9").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch customer details");
    assert_eq!(events.errors(), vec!["Error fetching customer details".to_string()]);
}

#[tokio::test]
async fn test_product_catalogue_walks_each_level() {
    let (_events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product-selection/business-domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "businessDomainId": 1, "description": "Corporate Banking" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    for (route, param, parent, body) in [
        (
            "/api/product-selection/product-categories",
            "businessDomainId",
            "1",
            json!([{ "businessDomainId": 1, "productCategoryId": 10, "description": "Loans" }]),
        ),
        (
            "/api/product-selection/product-subcategories",
            "productCategoryId",
            "10",
            json!([
                { "productCategoryId": 10, "productSubCategoryId": 100, "description": "Term" }
            ]),
        ),
        (
            "/api/product-selection/products",
            "productSubCategoryId",
            "100",
            json!([{ "productSubCategoryId": 100, "productId": "TL-5", "description": "5Y Term" }]),
        ),
        (
            "/api/product-selection/sub-products",
            "productId",
            "TL-5",
            json!([{ "productId": "TL-5", "subProductId": "TL-5-F", "description": "Fixed" }]),
        ),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(query_param(param, parent))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let reference = ReferenceDataClient::new(api_client(&server));
    let domains = reference.business_domains().await.unwrap();
    assert_eq!(domains[0].id(), Some("1"));

    let mut parent = "1".to_string();
    let mut descriptions = Vec::new();
    for level in [
        CatalogLevel::Categories,
        CatalogLevel::Subcategories,
        CatalogLevel::Products,
        CatalogLevel::SubProducts,
    ] {
        let entries = reference.catalog_entries(level, &parent).await.unwrap();
        descriptions.push(entries[0].description.clone());
        parent = entries[0].id().expect("entry id").to_string();
    }

    assert_eq!(descriptions, vec!["Loans", "Term", "5Y Term", "Fixed"]);
    assert_eq!(parent, "TL-5-F");
}

#[tokio::test]
async fn test_catalogue_failure_reports_fixed_message() {
    let (events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product-selection/products"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = ReferenceDataClient::new(api_client(&server))
        .catalog_entries(CatalogLevel::Products, "100")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch product catalog");
    assert_eq!(events.errors(), vec!["Error fetching product catalog".to_string()]);
}
