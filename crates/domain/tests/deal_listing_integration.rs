//! Integration tests for the deal listing shapes
//!
//! Drives a realistic by-status payload through decoding and normalization
//! the way the stage clients do.

use dealdesk_domain::{normalize_deals, Deal, DealStatus, Priority, RawDeal};

const LISTING: &str = r#"[
    {
        "id": 1,
        "dealId": "DEAL-0001",
        "customerId": "C-001",
        "customerName": "Acme Holdings",
        "initiator": "rm.one@bank.test",
        "commitmentAmount": "USD 1,200,000",
        "stage": "Under Review",
        "status": "In-Progress"
    },
    {
        "id": "2",
        "dealId": "DEAL-0002",
        "customerName": "Globex",
        "commitmentAmount": 350000,
        "status": "In-Progress"
    },
    {
        "dealId": "DEAL-0003",
        "customerName": "Initech",
        "customerId": null,
        "initiator": "",
        "stage": null
    }
]"#;

#[test]
fn test_listing_normalizes_every_entry_in_order() {
    let raw: Vec<RawDeal> = serde_json::from_str(LISTING).expect("listing decodes");
    let deals: Vec<Deal> = normalize_deals(raw);

    assert_eq!(deals.len(), 3);
    assert_eq!(deals[0].deal_id.as_deref(), Some("DEAL-0001"));
    assert_eq!(deals[0].deal_phase, "Under Review");

    assert_eq!(deals[1].id.as_deref(), Some("2"));
    assert_eq!(deals[1].customer_id, "N/A");
    assert_eq!(deals[1].total_commitment_amount, "350000");
    assert_eq!(deals[1].deal_phase, "Initial");

    assert_eq!(deals[2].customer_id, "N/A");
    assert_eq!(deals[2].initiator, "N/A");
    assert_eq!(deals[2].status, None);
}

#[test]
fn test_normalized_deal_round_trips_through_ui_shape() {
    let raw: Vec<RawDeal> = serde_json::from_str(LISTING).expect("listing decodes");
    let deals = normalize_deals(raw);

    let json = serde_json::to_string(&deals).expect("deals encode");
    let decoded: Vec<Deal> = serde_json::from_str(&json).expect("deals decode");
    assert_eq!(decoded, deals);
}

#[test]
fn test_status_and_priority_parse_from_user_input() {
    assert_eq!("approved".parse::<DealStatus>().unwrap(), DealStatus::Approved);
    assert_eq!("IN REVIEW".parse::<DealStatus>().unwrap(), DealStatus::InReview);
    assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    assert!("urgent".parse::<Priority>().is_err());
}
