//! Backend API mocking tests for the worklist path.
//!
//! These tests use wiremock to create deterministic HTTP mocking for the
//! dealership backend, eliminating network dependencies and exercising the
//! fetch -> join -> classify -> filter pipeline end to end.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use inspection_desk::{DealerClient, Role, WorkflowStatus, WorklistFilter, WorklistService};

/// Dealership backend mock server for deterministic testing
pub struct DealerApiMock {
    pub server: MockServer,
}

impl DealerApiMock {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn client(&self) -> DealerClient {
        DealerClient::with_base_url(self.server.uri(), None, 100, 100, Duration::from_secs(30))
            .expect("mock client")
    }

    pub fn service(&self) -> WorklistService<DealerClient> {
        WorklistService::new(self.client())
    }

    pub async fn mock_contracts(&self, contracts: Value) {
        Mock::given(method("GET"))
            .and(path("/contracts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contracts))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_inspections(&self, inspections: Value) {
        Mock::given(method("GET"))
            .and(path("/inspections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(inspections))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_server_error(&self, endpoint: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database offline"})),
            )
            .mount(&self.server)
            .await;
    }
}

fn purchase_contract(id: Value, number: &str) -> Value {
    json!({
        "id": id,
        "contractNumber": number,
        "type": "purchase",
        "motorcycleId": "M1",
        "amount": 9500.0,
        "currency": "USD",
        "date": "2024-05-12"
    })
}

#[tokio::test]
async fn test_registration_pending_worklist_includes_uninspected_contracts() {
    let mock = DealerApiMock::new().await;
    mock.mock_contracts(json!([
        purchase_contract(json!("C1"), "PC-1"),
        purchase_contract(json!("C2"), "PC-2"),
    ]))
    .await;
    mock.mock_inspections(json!([
        {"id": 1, "contractId": "C2", "workflowStatus": "rama_completed", "status": "completed"}
    ]))
    .await;

    let service = mock.service();
    let pending = service
        .worklist(Role::Registration, WorklistFilter::Pending)
        .await;

    assert_eq!(pending.len(), 1);
    assert!(pending[0].contract.id.matches_str("C1"));
    assert_eq!(pending[0].workflow_status, WorkflowStatus::RamaPending);
    // No inspection record yet, so the verify action is not available
    assert!(!pending[0].can_verify(Role::Registration));
}

#[tokio::test]
async fn test_rama_completed_lands_in_transport_pending_worklist() {
    let mock = DealerApiMock::new().await;
    mock.mock_contracts(json!([purchase_contract(json!("C1"), "PC-1")]))
        .await;
    mock.mock_inspections(json!([
        {"id": 1, "contractId": "C1", "workflowStatus": "rama_completed", "status": "completed"}
    ]))
    .await;

    let service = mock.service();

    let transport_pending = service
        .worklist(Role::Transport, WorklistFilter::Pending)
        .await;
    assert_eq!(transport_pending.len(), 1);

    let registration_pending = service
        .worklist(Role::Registration, WorklistFilter::Pending)
        .await;
    assert!(registration_pending.is_empty());
}

#[tokio::test]
async fn test_identifier_normalization_across_the_wire() {
    let mock = DealerApiMock::new().await;
    // Contract id is the string "42"; inspection refers to it as the number 42
    mock.mock_contracts(json!([purchase_contract(json!("42"), "PC-42")]))
        .await;
    mock.mock_inspections(json!([
        {"id": 9, "contractId": 42, "workflowStatus": "rama_pending"}
    ]))
    .await;

    let service = mock.service();
    let all = service.worklist(Role::Registration, WorklistFilter::All).await;

    assert_eq!(all.len(), 1);
    assert!(all[0].has_inspection());
    assert!(all[0].can_verify(Role::Registration));
}

#[tokio::test]
async fn test_contract_fetch_failure_yields_empty_worklist() {
    let mock = DealerApiMock::new().await;
    mock.mock_server_error("/contracts").await;
    mock.mock_inspections(json!([])).await;

    let service = mock.service();
    let all = service.worklist(Role::Registration, WorklistFilter::All).await;

    assert!(all.is_empty());
}

#[tokio::test]
async fn test_inspection_fetch_failure_degrades_to_initial_state() {
    let mock = DealerApiMock::new().await;
    mock.mock_contracts(json!([purchase_contract(json!("C1"), "PC-1")]))
        .await;
    mock.mock_server_error("/inspections").await;

    let service = mock.service();
    let all = service.worklist(Role::Registration, WorklistFilter::All).await;

    // Contracts still render; without inspections everything is rama_pending
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].workflow_status, WorkflowStatus::RamaPending);
    assert!(!all[0].has_inspection());
}

#[tokio::test]
async fn test_non_purchase_contracts_never_enter_the_worklist() {
    let mock = DealerApiMock::new().await;
    mock.mock_contracts(json!([
        purchase_contract(json!("C1"), "PC-1"),
        {"id": "L1", "contractNumber": "LN-1", "type": "loan"},
        {"id": "R1", "contractNumber": "RP-1", "type": "repair"},
    ]))
    .await;
    mock.mock_inspections(json!([])).await;

    let service = mock.service();
    let all = service.worklist(Role::Registration, WorklistFilter::All).await;

    assert_eq!(all.len(), 1);
    assert!(all[0].contract.id.matches_str("C1"));
}

#[tokio::test]
async fn test_status_summary_counts_match_worklist() {
    let mock = DealerApiMock::new().await;
    mock.mock_contracts(json!([
        purchase_contract(json!("C1"), "PC-1"),
        purchase_contract(json!("C2"), "PC-2"),
        purchase_contract(json!("C3"), "PC-3"),
    ]))
    .await;
    mock.mock_inspections(json!([
        {"id": 1, "contractId": "C2", "workflowStatus": "rama_pending"},
        {"id": 2, "contractId": "C3", "workflowStatus": "completed", "status": "completed"},
    ]))
    .await;

    let service = mock.service();
    let summary = service.status_summary(Role::Registration).await;

    assert_eq!(summary.total, 3);
    assert_eq!(summary.first_stage_pending, 2);
    assert_eq!(summary.done, 1);
    assert_eq!(summary.missing_inspection, 1);
    // Only C2 has an inspection record in rama_pending
    assert_eq!(summary.actionable, 1);
}
