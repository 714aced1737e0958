//! End-to-end tests over the fully assembled application.
//!
//! Requests pass through the tracing middleware, the JSON configuration and
//! the `/api/v1` scope exactly as they do in the running server.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use registry_backend::domain::{RegistrationService, TRACE_ID_HEADER, UserRegistry};
use registry_backend::inbound::http::health::HealthState;
use registry_backend::inbound::http::state::HttpState;
use registry_backend::server::{AppDependencies, build_app};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const JSON_LIMIT: usize = 1024;

#[fixture]
fn registry() -> Arc<UserRegistry> {
    Arc::new(UserRegistry::new())
}

fn dependencies(registry: Arc<UserRegistry>) -> AppDependencies {
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::from(RegistrationService::new(registry))),
        json_limit: JSON_LIMIT,
    }
}

fn register(username: &str, email: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({"username": username, "email": email, "password": password}))
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn registration_round_trip(registry: Arc<UserRegistry>) {
    let app = test::init_service(build_app(dependencies(registry.clone()))).await;

    let response = test::call_service(
        &app,
        register("alice", "alice@example.com", "supersecret1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/users").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!([{"username": "alice", "email": "alice@example.com"}])
    );
    assert_eq!(registry.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn conflict_carries_matching_trace_id(registry: Arc<UserRegistry>) {
    let app = test::init_service(build_app(dependencies(registry))).await;

    let first = test::call_service(
        &app,
        register("alice", "alice@example.com", "supersecret1"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = test::call_service(
        &app,
        register("alice", "alice@example.org", "supersecret2"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let header = second
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(second).await;
    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(header.as_str()));
    assert_eq!(
        body.get("details"),
        Some(&json!({"field": "username", "code": "username_taken", "value": "alice"}))
    );
}

#[rstest]
#[case("a_very_long_username_over_twenty_chars", "x@x.com", "supersecret1", "username too long")]
#[case("bob", "bob@example.com", "short", "password too short")]
#[actix_web::test]
async fn invalid_registrations_leave_registry_empty(
    registry: Arc<UserRegistry>,
    #[case] username: &str,
    #[case] email: &str,
    #[case] password: &str,
    #[case] message: &str,
) {
    let app = test::init_service(build_app(dependencies(registry.clone()))).await;

    let response = test::call_service(&app, register(username, email, password)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.get("message").and_then(Value::as_str), Some(message));
    assert!(registry.is_empty());
}

#[rstest]
#[actix_web::test]
async fn oversized_bodies_are_rejected(registry: Arc<UserRegistry>) {
    let app = test::init_service(build_app(dependencies(registry.clone()))).await;

    let padding = "x".repeat(JSON_LIMIT);
    let response = test::call_service(&app, register("alice", "alice@example.com", &padding)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("payload_too_large")
    );
    assert!(registry.is_empty());
}

#[rstest]
#[actix_web::test]
async fn calculator_and_messages_are_mounted(registry: Arc<UserRegistry>) {
    let app = test::init_service(build_app(dependencies(registry))).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/calculator")
            .set_json(json!({"x": 10, "y": 4, "operation": "divide"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"operation": "divide", "result": 2.5}));

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/messages")
            .set_json(json!({"msg": "Hello"}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "Hello Thank You!"}));
}

#[rstest]
#[actix_web::test]
async fn readiness_reports_unavailable_until_marked(registry: Arc<UserRegistry>) {
    let deps = dependencies(registry);
    let health = deps.health_state.clone();
    let app = test::init_service(build_app(deps)).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn concurrent_duplicate_requests_admit_one_user(registry: Arc<UserRegistry>) {
    let app = test::init_service(build_app(dependencies(registry.clone()))).await;

    let requests = (0..8).map(|_| {
        test::call_service(&app, register("racer", "racer@example.com", "supersecret1"))
    });
    let responses = futures_util::future::join_all(requests).await;

    let created = responses
        .iter()
        .filter(|response| response.status() == StatusCode::CREATED)
        .count();
    let conflicts = responses
        .iter()
        .filter(|response| response.status() == StatusCode::CONFLICT)
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(registry.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_use_the_error_envelope(registry: Arc<UserRegistry>) {
    let app = test::init_service(build_app(dependencies(registry))).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/accounts").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(header.as_str()));
}
