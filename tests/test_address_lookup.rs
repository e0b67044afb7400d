//! Address lookup adapter tests against a mock directory client.

mod mocks;

use br_fields_mcp_server::client::AsyncPostalClient;
use br_fields_mcp_server::services::{
    AddressLookupService, AddressLookupServiceImpl, FieldService,
};
use br_fields_mcp_server::{Address, LookupError, LookupOutcome};
use mocks::MockPostalClient;
use std::sync::Arc;
use std::time::Duration;

fn paulista() -> Address {
    Address {
        street: Some("Avenida Paulista".to_string()),
        city: Some("São Paulo".to_string()),
        region_code: Some("SP".to_string()),
    }
}

fn service(mock: &MockPostalClient, concurrency: usize) -> AddressLookupServiceImpl {
    let client = Arc::new(mock.clone()) as Arc<dyn AsyncPostalClient>;
    AddressLookupServiceImpl::new(client, concurrency)
}

#[tokio::test]
async fn test_found_address_passes_through() {
    let mock = MockPostalClient::new();
    mock.add_address("01310100", paulista());

    let outcome = service(&mock, 1).lookup("01310-100").await.unwrap();

    assert_eq!(outcome, LookupOutcome::Found(paulista()));
    assert_eq!(mock.requested_codes(), vec!["01310100".to_string()]);
}

#[tokio::test]
async fn test_unassigned_code_is_not_an_error() {
    let mock = MockPostalClient::new();

    let outcome = service(&mock, 1).lookup("99999-999").await.unwrap();

    assert_eq!(outcome, LookupOutcome::NotFound);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_malformed_codes_are_rejected_without_calls() {
    let mock = MockPostalClient::new();
    let service = service(&mock, 1);

    for raw in ["", "0131010", "013101000", "cep", "01310-10"] {
        let err = service.lookup(raw).await.unwrap_err();
        assert!(err.is_precondition_failure(), "{raw} should be rejected");
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_transport_error_is_surfaced_without_retry() {
    let mock = MockPostalClient::new();
    mock.add_failure("01310100");

    let result = service(&mock, 1).lookup("01310100").await;

    assert!(matches!(result, Err(LookupError::Timeout)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_batch_concurrency_is_bounded() {
    let mock = MockPostalClient::new().with_delay(Duration::from_millis(20));
    let codes: Vec<String> = (0..6).map(|i| format!("0131010{}", i)).collect();

    let results = service(&mock, 2).lookup_many(&codes).await;

    assert_eq!(results.len(), 6);
    assert_eq!(mock.call_count(), 6);
    assert_eq!(mock.max_in_flight(), 2);
}

#[tokio::test]
async fn test_batch_results_follow_input_order() {
    let mock = MockPostalClient::new();
    mock.add_address("01310100", paulista());
    mock.add_failure("20040020");

    let codes = vec![
        "20040-020".to_string(),
        "abc".to_string(),
        "01310-100".to_string(),
        "99999999".to_string(),
    ];
    let results = service(&mock, 3).lookup_many(&codes).await;

    assert!(matches!(results[0], Err(LookupError::Timeout)));
    assert!(matches!(results[1], Err(LookupError::InvalidPostalCode(_))));
    assert_eq!(results[2].as_ref().unwrap(), &LookupOutcome::Found(paulista()));
    assert_eq!(results[3].as_ref().unwrap(), &LookupOutcome::NotFound);
}

#[test]
fn test_field_service_lookup_blocking() {
    let mock = MockPostalClient::new();
    mock.add_address("01310100", paulista());
    let lookup = Arc::new(service(&mock, 1)) as Arc<dyn AddressLookupService>;
    let fields = FieldService::new(lookup);

    let outcome = tokio_test::block_on(fields.lookup_address("01310100")).unwrap();

    assert!(outcome.is_found());
}
