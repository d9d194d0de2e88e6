//! Shared setup for orchestrator and backend tests.
//!
//! Tests run the orchestrator against a mockito server standing in for the
//! remote backend and a [`MemoryCache`] standing in for Valkey, so no external
//! service is needed.

use std::sync::Arc;

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

use crate::backend::BackendClient;
use crate::cache::MemoryCache;
use crate::pool::{PoolOrchestrator, PoolSettings};

pub struct TestSetup {
    pub server: ServerGuard,
    pub cache: Arc<MemoryCache>,
    pub orchestrator: PoolOrchestrator,
}

/// Builds an orchestrator with default settings (minimum pool size 10) wired to
/// a fresh mockito server and in-memory cache.
pub async fn test_setup() -> TestSetup {
    test_setup_with_settings(PoolSettings::default()).await
}

pub async fn test_setup_with_minimum(minimum_pool_size: usize) -> TestSetup {
    test_setup_with_settings(PoolSettings {
        minimum_pool_size,
        ..PoolSettings::default()
    })
    .await
}

pub async fn test_setup_with_settings(settings: PoolSettings) -> TestSetup {
    let server = Server::new_async().await;
    let cache = Arc::new(MemoryCache::new());

    let backend = BackendClient::new(server.url());
    let orchestrator =
        PoolOrchestrator::with_settings(backend, Arc::clone(&cache) as Arc<_>, settings);

    TestSetup {
        server,
        cache,
        orchestrator,
    }
}

/// Success envelope wrapping a list of records.
pub fn list_body(items: Vec<serde_json::Value>) -> String {
    json!({ "EC": 0, "data": items }).to_string()
}

/// Success envelope wrapping a single record.
pub fn record_body(item: serde_json::Value) -> String {
    json!({ "EC": 0, "data": item }).to_string()
}

/// Failure envelope with a non-zero error code.
pub fn error_body(code: i64, message: &str) -> String {
    json!({ "EC": code, "EM": message, "data": null }).to_string()
}

/// Mocks an entity read endpoint returning the given records.
///
/// `expected_requests` is only checked when the caller asserts the mock.
pub fn mock_read_endpoint(
    server: &mut ServerGuard,
    path: &str,
    items: Vec<serde_json::Value>,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(list_body(items))
        .expect(expected_requests)
        .create()
}

/// Mocks an entity write endpoint that always succeeds, answering every
/// creation with `created` as the stored record.
///
/// `expected_requests` is only checked when the caller asserts the mock.
pub fn mock_write_endpoint(
    server: &mut ServerGuard,
    path: &str,
    created: serde_json::Value,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(record_body(created))
        .expect(expected_requests)
        .create()
}

/// Canned customer records with ids `CUS_0..CUS_{count}`.
pub fn customer_records(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| json!({ "id": format!("CUS_{i}"), "first_name": "Seeded" }))
        .collect()
}

/// Canned order records with the given statuses.
pub fn order_records(statuses: &[&str]) -> Vec<serde_json::Value> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| json!({ "id": format!("ORD_{i}"), "status": status }))
        .collect()
}
