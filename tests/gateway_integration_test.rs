//! Integration tests for the gateway against a real HTTP server.
//!
//! wiremock stands in for the backend so these tests exercise the full
//! reqwest transport path: envelope normalization, error mapping, and
//! auth header attachment.

mod common;

use common::{init_tracing, test_operator, test_session, wiremock_gateway};
use lms_admin::error::GatewayError;
use lms_admin::models::{Course, KycSubmission, Meeting, User, Withdrawal};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_users_decodes_bare_array() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/allUsers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"_id": "u1", "name": "Ada", "email": "ada@example.com"},
            {"_id": "u2", "name": "Bob", "email": "bob@example.com"}
        ])))
        .mount(&server)
        .await;

    let gateway = wiremock_gateway::<User>(&server.uri(), test_session());
    let users = gateway.list(None).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Ada");
}

#[tokio::test]
async fn test_list_courses_unwraps_success_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/courses/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [{"_id": "c1", "title": "Rust 101", "pricing": 49.0, "isPublished": true}]
        })))
        .mount(&server)
        .await;

    let gateway = wiremock_gateway::<Course>(&server.uri(), test_session());
    let courses = gateway.list(None).await.unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].publication_status(), "published");
}

#[tokio::test]
async fn test_non_2xx_maps_to_server_error_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/kyc/admin/kyc-submissions"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "success": false,
            "message": "maintenance window"
        })))
        .mount(&server)
        .await;

    let gateway = wiremock_gateway::<KycSubmission>(&server.uri(), test_session());
    let err = gateway.list(None).await.unwrap_err();

    assert_eq!(
        err,
        GatewayError::Server {
            status: 503,
            message: "maintenance window".to_string()
        }
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_error() {
    // Unroutable port; nothing is listening.
    let gateway = wiremock_gateway::<User>("http://127.0.0.1:1", test_session());
    let err = gateway.list(None).await.unwrap_err();
    assert!(matches!(err, GatewayError::Network { .. }));
}

#[tokio::test]
async fn test_auth_header_attached_after_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/allUsers"))
        .and(header("Authorization", "Bearer test-token-12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session();
    session.login(test_operator()).await.unwrap();

    let gateway = wiremock_gateway::<User>(&server.uri(), session);
    gateway.list(None).await.unwrap();
}

#[tokio::test]
async fn test_reject_sends_reason_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/kyc/admin/reject/k9"))
        .and(body_json(serde_json::json!({ "reason": "document expired" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = wiremock_gateway::<KycSubmission>(&server.uri(), test_session());
    gateway.reject("k9", "document expired").await.unwrap();
}

#[tokio::test]
async fn test_withdrawal_status_update_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/wallet/status/w1"))
        .and(body_json(serde_json::json!({ "status": "Paid" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = wiremock_gateway::<Withdrawal>(&server.uri(), test_session());
    gateway.set_status("w1", "Paid", None).await.unwrap();
}

#[tokio::test]
async fn test_meeting_registrations_unwrap_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/meetings/m1/registrations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [
                {"_id": "r1", "name": "Ada", "email": "ada@example.com"},
                {"_id": "r2", "name": "Bob", "email": "bob@example.com"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = wiremock_gateway::<Meeting>(&server.uri(), test_session());
    let registrations = gateway.registrations("m1").await.unwrap();

    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].id, "r1");
    assert_eq!(registrations[1].name, "Bob");
}

#[tokio::test]
async fn test_status_query_param_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payment/requests"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway =
        wiremock_gateway::<lms_admin::models::Payment>(&server.uri(), test_session());
    gateway.list(Some("pending")).await.unwrap();
}
