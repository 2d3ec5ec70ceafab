//! Common test utilities for integration tests.
//!
//! Reusable fixtures and helpers: sample records, pre-wired controllers
//! over the mock HTTP client, and a wiremock-backed gateway builder.

#![allow(dead_code)]

use std::sync::Arc;

use lms_admin::adapters::mock::{MockHttpClient, MockIdentityStore};
use lms_admin::adapters::ReqwestHttpClient;
use lms_admin::config::ApiConfig;
use lms_admin::controller::ViewController;
use lms_admin::gateway::{Gateway, Routed};
use lms_admin::models::{KycSubmission, Resource, User};
use lms_admin::session::{Operator, Session};

/// Base URL used with the mock HTTP client.
pub const MOCK_BASE: &str = "http://test";

/// Initializes tracing output for a test binary. Safe to call from every
/// test; only the first call installs the subscriber.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lms_admin=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Creates a signed-out session over an in-memory identity store.
pub fn test_session() -> Arc<Session> {
    Session::new(Arc::new(MockIdentityStore::new()))
}

/// Creates a test operator with a bearer token.
pub fn test_operator() -> Operator {
    Operator {
        id: "op-1".to_string(),
        name: "Test Operator".to_string(),
        email: "ops@example.com".to_string(),
        role: "admin".to_string(),
        token: Some("test-token-12345".to_string()),
    }
}

/// Creates a gateway over the mock HTTP client.
pub fn mock_gateway<R: Resource + Routed>(http: Arc<MockHttpClient>) -> Gateway<R> {
    Gateway::new(http, ApiConfig::default().with_base_url(MOCK_BASE), test_session())
}

/// Creates a controller over the mock HTTP client.
pub fn mock_controller<R: Resource + Routed>(http: Arc<MockHttpClient>) -> ViewController<R> {
    ViewController::new(mock_gateway(http))
}

/// Creates a gateway pointed at a wiremock server.
pub fn wiremock_gateway<R: Resource + Routed>(
    server_uri: &str,
    session: Arc<Session>,
) -> Gateway<R> {
    Gateway::new(
        Arc::new(ReqwestHttpClient::new()),
        ApiConfig::default().with_base_url(server_uri),
        session,
    )
}

/// A user fixture with the given id/name/status.
pub fn user(id: &str, name: &str, status: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        status: Some(status.to_string()),
        ..Default::default()
    }
}

/// A KYC fixture with the given id/name/status.
pub fn kyc(id: &str, name: &str, status: &str) -> KycSubmission {
    KycSubmission {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        kyc_status: Some(status.to_string()),
        ..Default::default()
    }
}

/// JSON body for a KYC submissions listing.
pub fn kyc_list_json(records: &[KycSubmission]) -> String {
    serde_json::to_string(records).expect("fixtures serialize")
}
