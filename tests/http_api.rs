//! HTTP-level tests for the task API routes and status-code mapping.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use taskboard::http;
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use tower::ServiceExt;

/// Builds a router backed by a fresh in-memory store.
///
/// The router clones share state, so one instance drives a whole scenario.
fn app() -> Router {
    http::router(Arc::new(TaskService::new(Arc::new(
        InMemoryTaskRepository::new(),
    ))))
}

/// Sends one request through the router, returning status and raw body.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should be handled");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, bytes.to_vec())
}

fn parse_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("body should be JSON")
}

#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_task_lifecycle() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/tasks", Some(json!({"title": "Buy milk"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        parse_json(&body),
        json!({"id": 1, "title": "Buy milk", "description": null, "status": "TO_DO"})
    );

    let (status, body) = send(&app, "GET", "/api/tasks/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse_json(&body),
        json!({"id": 1, "title": "Buy milk", "description": null, "status": "TO_DO"})
    );

    let (status, body) = send(
        &app,
        "PUT",
        "/api/tasks/1",
        Some(json!({"title": "Buy milk", "description": "2%", "status": "IN_PROGRESS"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse_json(&body),
        json!({"id": 1, "title": "Buy milk", "description": "2%", "status": "IN_PROGRESS"})
    );

    let (status, body) = send(&app, "DELETE", "/api/tasks/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", "/api/tasks/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status_query() {
    let app = app();

    for payload in [
        json!({"title": "Backlog"}),
        json!({"title": "Active", "status": "IN_PROGRESS"}),
        json!({"title": "Also active", "status": "IN_PROGRESS"}),
        json!({"title": "Done", "status": "COMPLETED"}),
    ] {
        let (status, _) = send(&app, "POST", "/api/tasks", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/api/tasks?status=IN_PROGRESS", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = parse_json(&body);
    let titles: Vec<&str> = listed
        .as_array()
        .expect("list response should be an array")
        .iter()
        .filter_map(|task| task.get("title").and_then(Value::as_str))
        .collect();
    assert_eq!(titles, vec!["Active", "Also active"]);

    let (status, body) = send(&app, "GET", "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let all = parse_json(&body);
    assert_eq!(all.as_array().map(Vec::len), Some(4));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_identifiers_map_to_404_with_empty_bodies() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/tasks/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(
        &app,
        "PUT",
        "/api/tasks/99",
        Some(json!({"title": "Ghost", "status": "TO_DO"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, "DELETE", "/api/tasks/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    // None of the misses may have created a record.
    let (status, body) = send(&app, "GET", "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_title_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"description": "no title"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_json(&body).get("code"),
        Some(&json!("invalid_task"))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_unknown_status_is_rejected() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Typo", "status": "DOING"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_oversized_description_is_rejected() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Novel", "description": "x".repeat(1001)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_without_status_is_rejected() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/tasks", Some(json!({"title": "Task"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/tasks/1",
        Some(json!({"title": "Task"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_with_unknown_status_value_is_rejected() {
    let app = app();

    let (status, _) = send(&app, "GET", "/api/tasks?status=DOING", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn body_identifier_is_ignored_in_favour_of_the_path() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/tasks", Some(json!({"title": "Task"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/tasks/1",
        Some(json!({"id": 99, "title": "Renamed", "status": "COMPLETED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body).get("id"), Some(&json!(1)));

    // The body id never created a second record.
    let (status, body) = send(&app, "GET", "/api/tasks/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn body_identifier_is_ignored_on_create() {
    // POST with an explicit id still gets a storage-assigned one.
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"id": 42, "title": "Presumptuous"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(parse_json(&body).get("id"), Some(&json!(1)));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_endpoint_reports_ok() {
    let app = app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({"status": "ok"}));
}
