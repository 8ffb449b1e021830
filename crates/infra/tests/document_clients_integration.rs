//! Credit-deal document and comment clients

mod support;

use dealdesk_core::DocumentRepository;
use dealdesk_domain::{CommentPatch, DocumentPatch, NewComment, NewDocument};
use dealdesk_infra::{ApiError, CommentClient, DocumentClient};
use serde_json::json;
use support::{api_client, capture_events};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn document_json(id: u64) -> serde_json::Value {
    json!({
        "creditDocumentId": id,
        "assignmentId": "CR-1",
        "dealId": "DEAL-1",
        "documentType": "Term Sheet",
        "fileName": "terms.pdf",
        "storageFilePath": "deals/DEAL-1/terms.pdf",
        "isMandatory": true,
        "createdBy": "analyst@bank.test",
        "createdDateTime": "2025-01-10T08:00:00"
    })
}

#[tokio::test]
async fn test_document_reads_hit_each_listing_endpoint() {
    let (_events, _guard) = capture_events();
    let server = MockServer::start().await;
    for route in [
        "/api/credit-deal-documents",
        "/api/credit-deal-documents/deal/DEAL-1",
        "/api/credit-deal-documents/assignment/CR-1",
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([document_json(5)])))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/credit-deal-documents/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json(5)))
        .expect(1)
        .mount(&server)
        .await;

    let documents = DocumentClient::new(api_client(&server));
    let all = documents.list().await.unwrap();
    let by_deal = documents.list_by_deal("DEAL-1").await.unwrap();
    let by_assignment = documents.list_by_assignment("CR-1").await.unwrap();
    let single = documents.get("5").await.unwrap();

    assert_eq!(single.credit_document_id, "5");
    assert_eq!(all, by_deal);
    assert_eq!(by_deal, by_assignment);
    assert!(single.is_mandatory);
}

#[tokio::test]
async fn test_document_create_update_delete() {
    let (_events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/credit-deal-documents"))
        .and(body_json(json!({
            "assignmentId": "CR-1",
            "dealId": "DEAL-1",
            "documentType": "Term Sheet",
            "fileName": "terms.pdf",
            "storageFilePath": "deals/DEAL-1/terms.pdf",
            "isMandatory": true,
            "createdBy": "analyst@bank.test",
            "lastUpdatedBy": "analyst@bank.test"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(document_json(6)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/credit-deal-documents/6"))
        .and(body_json(json!({"fileName": "terms-v2.pdf"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json(6)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/credit-deal-documents/6"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let documents = DocumentClient::new(api_client(&server));
    let repository: &dyn DocumentRepository = &documents;

    let created = repository
        .create(&NewDocument {
            assignment_id: "CR-1".into(),
            deal_id: "DEAL-1".into(),
            document_type: "Term Sheet".into(),
            file_name: "terms.pdf".into(),
            storage_file_path: "deals/DEAL-1/terms.pdf".into(),
            is_mandatory: true,
            created_by: "analyst@bank.test".into(),
            last_updated_by: "analyst@bank.test".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.credit_document_id, "6");

    let patch = DocumentPatch { file_name: Some("terms-v2.pdf".into()), ..Default::default() };
    repository.update("6", &patch).await.unwrap();
    repository.delete("6").await.unwrap();
}

#[tokio::test]
async fn test_document_delete_failure_has_fixed_message() {
    let (events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let err = DocumentClient::new(api_client(&server)).delete("6").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete document");
    assert_eq!(events.errors(), vec!["Error deleting document".to_string()]);
}

#[tokio::test]
async fn test_document_delete_accepts_text_acknowledgement() {
    let (events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/credit-deal-documents/DOC-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Document deleted successfully"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/credit-deal-comments/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Comment deleted"))
        .expect(1)
        .mount(&server)
        .await;

    DocumentClient::new(api_client(&server)).delete("DOC-1").await.unwrap();
    CommentClient::new(api_client(&server)).delete("7").await.unwrap();
    assert!(events.errors().is_empty());
}

#[tokio::test]
async fn test_document_get_twice_returns_the_same_record() {
    let (_events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/credit-deal-documents/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_json(5)))
        .expect(2)
        .mount(&server)
        .await;

    let documents = DocumentClient::new(api_client(&server));
    let first = documents.get("5").await.unwrap();
    let second = documents.get("5").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_success_body_fails_crud_reads() {
    let (events, _guard) = capture_events();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/credit-deal-documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/credit-deal-comments/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"commentId": 3, "#))
        .expect(1)
        .mount(&server)
        .await;

    let err = DocumentClient::new(api_client(&server)).list().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.to_string(), "Failed to fetch documents");

    let err = CommentClient::new(api_client(&server)).get("3").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.to_string(), "Failed to fetch comment");

    assert_eq!(
        events.errors(),
        vec!["Error fetching documents".to_string(), "Error fetching comment".to_string()]
    );
}

#[tokio::test]
async fn test_comments_share_the_crud_surface() {
    let (events, _guard) = capture_events();
    let server = MockServer::start().await;
    let comment = json!({
        "commentId": 3,
        "assignmentId": "DOC-1",
        "dealId": "DEAL-2",
        "commentText": "Pending signed guarantee",
        "createdBy": "legal@bank.test"
    });
    Mock::given(method("POST"))
        .and(path("/api/credit-deal-comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comment.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/credit-deal-comments/3"))
        .and(body_json(json!({"commentText": "Guarantee received"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(comment))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/credit-deal-comments/deal/DEAL-2"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let comments = CommentClient::new(api_client(&server));
    let created = comments
        .create(&NewComment {
            assignment_id: "DOC-1".into(),
            deal_id: "DEAL-2".into(),
            comment_text: "Pending signed guarantee".into(),
            created_by: "legal@bank.test".into(),
            last_updated_by: "legal@bank.test".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.comment_id, "3");

    let patch =
        CommentPatch { comment_text: Some("Guarantee received".into()), last_updated_by: None };
    comments.update("3", &patch).await.unwrap();

    let err = comments.list_by_deal("DEAL-2").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch comments by deal ID");
    assert_eq!(events.errors().len(), 1);
}
