//! Integration tests for AppContext wiring
//!
//! Builds a context against a mock deal-desk server and drives commands
//! through it the way the `dealdesk` binary does.

use dealdesk_domain::{Config, DealDeskError, DealStatus, Priority, WorkflowStage};
use dealdesk_lib::{execute, AppContext, Command};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_context(server: &MockServer) -> AppContext {
    AppContext::new_with_config(Config::for_base_url(server.uri()))
        .expect("context builds against mock server")
}

#[tokio::test]
async fn test_context_registers_every_stage() {
    let server = MockServer::start().await;
    let ctx = create_test_context(&server);

    assert_eq!(ctx.workflow.stages(), WorkflowStage::ALL.to_vec());
    assert_eq!(ctx.credit_risk.stage(), WorkflowStage::CreditRisk);
    assert!(!ctx.header_state().is_manager_view());
}

#[test]
fn test_context_rejects_unusable_config() {
    let mut config = Config::for_base_url("http://localhost:1");
    config.api.user_agent = Some("bad\nagent".into());

    let result = AppContext::new_with_config(config);
    assert!(matches!(result, Err(DealDeskError::Config(_))));
}

#[tokio::test]
async fn test_submitted_command_lists_normalized_deals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/deal/by-status/In-Progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "dealId": "DEAL-1", "customerName": "Acme", "status": "In-Progress" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output = execute(&ctx, Command::Submitted { stage: WorkflowStage::Legal }).await.unwrap();

    assert_eq!(output[0]["dealId"], "DEAL-1");
    assert_eq!(output[0]["customerId"], "N/A");
    assert_eq!(output[0]["dealPhase"], "Initial");
}

#[tokio::test]
async fn test_assign_command_routes_to_stage_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/documentation-deal-assignments/assign/DEAL-2"))
        .and(query_param("priority", "Critical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assignmentId": 11,
            "dealId": "DEAL-2",
            "priority": "Critical"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output = execute(
        &ctx,
        Command::Assign {
            stage: WorkflowStage::Documentation,
            deal_id: "DEAL-2".into(),
            priority: Some(Priority::Critical),
        },
    )
    .await
    .unwrap();

    assert_eq!(output["assignmentId"], "11");
    assert_eq!(output["priority"], "Critical");
}

#[tokio::test]
async fn test_deals_command_adds_badge_class() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/deal/by-status/Approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "7", "dealId": "DEAL-7", "customerName": "Globex", "status": "Approved" }
        ])))
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output =
        execute(&ctx, Command::Deals { status: DealStatus::Approved }).await.unwrap();

    let badge = output[0]["badgeClass"].as_str().unwrap();
    assert!(badge.contains("green"), "unexpected badge class {badge}");
}

#[tokio::test]
async fn test_approve_command_records_underwriter_decision() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/deal/DEAL-3"))
        .and(body_partial_json(json!({
            "dealStatus": "Approved",
            "lastUpdatedBy": "Underwriter"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output = execute(&ctx, Command::Approve { deal_id: "DEAL-3".into() }).await.unwrap();

    assert_eq!(output, json!({ "dealId": "DEAL-3", "dealStatus": "Approved" }));
}

#[tokio::test]
async fn test_failed_command_reports_operation_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/deal/status-counts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let err = execute(&ctx, Command::StatusCounts).await.unwrap_err();

    assert_eq!(err, DealDeskError::Service("Failed to fetch deal status counts".into()));
}

#[tokio::test]
async fn test_my_assignments_uses_configured_officer() {
    let server = MockServer::start().await;
    let config = Config::for_base_url(server.uri());
    let officer = config.identity.officer_id.replace('@', "%40");
    Mock::given(method("GET"))
        .and(path(format!("/api/credit-risk-assignments/credit-officer/{officer}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = AppContext::new_with_config(config).unwrap();

    let output = execute(&ctx, Command::MyAssignments).await.unwrap();

    assert_eq!(output, json!([]));
}

#[tokio::test]
async fn test_header_command_reflects_identity() {
    let server = MockServer::start().await;
    let ctx = create_test_context(&server);

    let output = execute(&ctx, Command::Header { manager: true }).await.unwrap();

    assert_eq!(output["employeeId"], ctx.config.identity.employee_id.as_str());
    assert_eq!(output["managerView"], true);
}

#[tokio::test]
async fn test_underwriter_queue_command_reads_submitted_deals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/deal/by-status/Submitted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 4, "dealId": "DEAL-4", "commitmentAmount": 900000, "status": "Submitted" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output = execute(&ctx, Command::UnderwriterQueue).await.unwrap();

    assert_eq!(output[0]["dealId"], "DEAL-4");
    assert_eq!(output[0]["totalCommitmentAmount"], "900000");
}

#[tokio::test]
async fn test_financial_analysis_command_prints_null_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/underwriter-financial-analysis/deal/DEAL-5"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output =
        execute(&ctx, Command::FinancialAnalysis { deal_id: "DEAL-5".into() }).await.unwrap();

    assert_eq!(output, serde_json::Value::Null);
}

#[tokio::test]
async fn test_add_special_condition_records_configured_author() {
    let server = MockServer::start().await;
    let config = Config::for_base_url(server.uri());
    let author = config.identity.email.clone();
    Mock::given(method("POST"))
        .and(path("/api/deal-special-conditions"))
        .and(body_partial_json(json!({
            "dealID": "DEAL-6",
            "conditionNumber": 1,
            "description": "Personal guarantee from directors",
            "createdBy": &author,
            "lastUpdatedBy": &author
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dealID": "DEAL-6",
            "conditionNumber": 1,
            "description": "Personal guarantee from directors"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = AppContext::new_with_config(config).unwrap();

    let output = execute(
        &ctx,
        Command::AddSpecialCondition {
            deal_id: "DEAL-6".into(),
            condition_number: 1,
            description: "Personal guarantee from directors".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output["conditionNumber"], 1);
}

#[tokio::test]
async fn test_all_deals_command_tolerates_numeric_amounts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/deal/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "dealId": "DEAL-1", "commitmentAmount": 75000, "stage": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = create_test_context(&server);

    let output = execute(&ctx, Command::AllDeals).await.unwrap();

    assert_eq!(output[0]["commitmentAmount"], "75000");
    assert_eq!(output[0]["stage"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_unreachable_server_reports_operation_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let ctx = AppContext::new_with_config(Config::for_base_url(format!("http://{addr}"))).unwrap();

    let err = execute(&ctx, Command::Metrics).await.unwrap_err();

    assert_eq!(err, DealDeskError::Service("Failed to fetch dashboard metrics".into()));
}
