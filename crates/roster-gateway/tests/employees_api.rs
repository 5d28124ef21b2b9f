use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use roster_gateway::{App, AppState};
use roster_service::{DepartmentPolicy, DirectoryPolicy, RecordService, SeqIdGenerator};
use roster_storage::InMemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with_policy(policy: DirectoryPolicy) -> Router {
    let service = RecordService::with_policy(
        InMemoryStore::new(),
        SeqIdGenerator::with_prefix("emp"),
        policy,
    );
    App::router(AppState::new(Arc::new(service)))
}

fn app() -> Router {
    app_with_policy(DirectoryPolicy::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn employee(code: &str, email: &str) -> Value {
    json!({
        "employeeCode": code,
        "name": format!("name of {code}"),
        "email": email,
        "department": "AI",
        "salary": 50000,
    })
}

async fn create(app: &Router, code: &str, email: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/api/employees", Some(employee(code, email))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

#[tokio::test]
async fn health() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn create_list_update_delete_scenario() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({
            "employeeCode": "EMP-1001",
            "name": "A",
            "email": "a@x.com",
            "department": "AI",
            "salary": 50000,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], "emp000000");
    assert_eq!(created["employeeCode"], "EMP-1001");
    assert_eq!(created["salary"], 50000.0);

    let (status, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/employees/EMP-1001",
        Some(json!({ "salary": 60000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["salary"], 60000.0);
    assert_eq!(updated["employeeCode"], "EMP-1001");
    assert_eq!(updated["name"], "A");

    let (status, deleted) = send(&app, Method::DELETE, "/api/employees/EMP-1001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Employee deleted");

    let (status, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let app = app();
    create(&app, "EMP-2", "b@x.com").await;
    create(&app, "EMP-1", "a@x.com").await;
    create(&app, "EMP-3", "c@x.com").await;

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    let codes: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["employeeCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["EMP-2", "EMP-1", "EMP-3"]);
}

#[tokio::test]
async fn missing_required_fields() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "employeeCode": "   ", "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Employee ID is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "employeeCode": "EMP-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is required");

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn duplicates_are_conflicts_with_distinct_messages() {
    let app = app();
    create(&app, "EMP-1", "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(employee("EMP-1", "other@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Employee ID already exists");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(employee("EMP-2", "a@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn legacy_code_field_is_accepted() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "empId": "EMP-7", "email": "g@x.com", "name": "G" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employeeCode"], "EMP-7");
    assert_eq!(body["salary"], 0.0);
}

#[tokio::test]
async fn null_salary_defaults_to_zero() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/employees",
        Some(json!({ "employeeCode": "E9", "email": "z@x.com", "salary": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["salary"], 0.0);
}

#[tokio::test]
async fn legacy_code_field_is_echoed_and_addressable() {
    let app = app();
    create(&app, "EMP-1", "a@x.com").await;

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    let legacy = list[0]["emp_id"].as_str().unwrap().to_string();
    assert_eq!(legacy, "EMP-1");

    let uri = format!("/api/employees/{legacy}");
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_ignores_employee_code_in_body() {
    let app = app();
    create(&app, "EMP-1", "a@x.com").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/employees/EMP-1",
        Some(json!({ "employeeCode": "EMP-2", "name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employeeCode"], "EMP-1");
    assert_eq!(body["name"], "X");

    let (status, _) = send(&app, Method::PUT, "/api/employees/EMP-2", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_email_rules() {
    let app = app();
    create(&app, "EMP-1", "a@x.com").await;
    create(&app, "EMP-2", "b@x.com").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/employees/EMP-1",
        Some(json!({ "email": "a@x.com", "department": "CS" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "CS");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/employees/EMP-1",
        Some(json!({ "email": "b@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn update_unknown_employee() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/employees/EMP-404",
        Some(json!({ "name": "X" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn delete_by_code_twice() {
    let app = app();
    create(&app, "EMP-1", "a@x.com").await;
    create(&app, "EMP-2", "b@x.com").await;

    let (status, _) = send(&app, Method::DELETE, "/api/employees/EMP-1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/api/employees/EMP-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["employeeCode"], "EMP-2");
}

#[tokio::test]
async fn delete_by_internal_id() {
    let app = app();
    let created = create(&app, "EMP-1", "a@x.com").await;
    let id = created["id"].as_str().unwrap();

    let uri = format!("/api/employees/by-id/{id}");
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn validation_failures() {
    let app = app_with_policy(
        DirectoryPolicy::builder()
            .departments(DepartmentPolicy::Catalog)
            .build(),
    );

    let mut body = employee("EMP-1", "not-an-email");
    let (status, _) = send(&app, Method::POST, "/api/employees", Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    body["email"] = json!("a@x.com");
    body["salary"] = json!(-10);
    let (status, response) = send(&app, Method::POST, "/api/employees", Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Salary cannot be negative");

    body["salary"] = json!(10);
    body["department"] = json!("Sales");
    let (status, response) = send(&app, Method::POST, "/api/employees", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Unknown department: Sales");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/employees")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
