mod common;

use axum::http::StatusCode;
use common::{employee_payload, TestApp};
use serde_json::json;

const COLLECTION: &str = "/api/v1/employees/";

#[tokio::test]
async fn create_then_get_returns_submitted_fields() {
    let app = TestApp::new();
    let payload = json!({
        "employee_id": "E001",
        "name": "Alice",
        "email": "alice@x.com",
        "department": "Eng",
        "position": "SWE",
        "base_salary": 90000.0
    });

    let (status, created) = app.post_json(COLLECTION, &payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].is_i64());
    assert!(created["created_at"].is_string());
    assert!(created["updated_at"].is_string());
    for field in ["employee_id", "name", "email", "department", "position", "base_salary"] {
        assert_eq!(created[field], payload[field], "field {}", field);
    }

    let (status, fetched) = app.get("/api/v1/employees/E001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_employee_is_not_found() {
    let app = TestApp::new();
    app.post_json(COLLECTION, &employee_payload("E001", "Alice")).await;

    let (status, body) = app.get("/api/v1/employees/E999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Employee not found"}));
}

#[tokio::test]
async fn list_is_empty_on_fresh_store() {
    let app = TestApp::new();
    let (status, body) = app.get(COLLECTION).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_length_matches_successful_creates() {
    let app = TestApp::new();
    app.post_json(COLLECTION, &employee_payload("E100", "Alice")).await;
    app.post_json(COLLECTION, &employee_payload("E101", "Bob")).await;
    // Rejected payloads must not add rows.
    app.post_json(COLLECTION, &json!({"employee_id": "E102"})).await;
    app.post_json(COLLECTION, &employee_payload("E103", "Carol")).await;

    let (status, body) = app.get(COLLECTION).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    let ids: Vec<i64> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(app.store.len(), 3);
}

#[tokio::test]
async fn collection_without_trailing_slash_is_routed() {
    let app = TestApp::new();
    let (status, _) = app.post_json("/api/v1/employees", &employee_payload("E1", "Dan")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = app.get("/api/v1/employees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_employee_ids_are_accepted() {
    let app = TestApp::new();
    let (first, a) = app.post_json(COLLECTION, &employee_payload("E7", "Alice")).await;
    let (second, b) = app.post_json(COLLECTION, &employee_payload("E7", "Bob")).await;
    assert_eq!((first, second), (StatusCode::CREATED, StatusCode::CREATED));
    assert_ne!(a["id"], b["id"]);

    let (_, fetched) = app.get("/api/v1/employees/E7").await;
    assert_eq!(fetched["name"], "Alice");
}

#[tokio::test]
async fn missing_fields_are_reported_per_field() {
    let app = TestApp::new();
    let (status, body) = app
        .post_json(COLLECTION, &json!({"employee_id": "E1", "name": "Alice", "email": "a@x.com"}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().unwrap();
    let fields: Vec<&str> = detail.iter().map(|d| d["loc"][1].as_str().unwrap()).collect();
    assert_eq!(fields, ["department", "position", "base_salary"]);
    assert!(detail.iter().all(|d| d["type"] == "missing"));
}

#[tokio::test]
async fn mistyped_salary_is_rejected() {
    let app = TestApp::new();
    let mut payload = employee_payload("E1", "Alice");
    payload["base_salary"] = json!(true);
    let (status, body) = app.post_json(COLLECTION, &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "base_salary"]));
    assert_eq!(body["detail"][0]["type"], "decimal_type");
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn malformed_json_is_unprocessable() {
    let app = TestApp::new();
    let (status, body) = app.post_raw(COLLECTION, "{\"employee_id\": ".to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let app = TestApp::new();
    let mut payload = employee_payload("E5", "Eve");
    payload["id"] = json!(999);
    let (status, body) = app.post_json(COLLECTION, &payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn store_outage_surfaces_as_service_unavailable() {
    let app = TestApp::new();
    app.store.set_offline(true);

    let (status, body) = app.get(COLLECTION).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"detail": "Service Unavailable"}));

    let (status, _) = app.get("/api/v1/employees/E1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = app.post_json(COLLECTION, &employee_payload("E1", "Alice")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn custom_prefix_moves_employee_routes() {
    let settings = payroll_api::Settings {
        api_prefix: "/api/v2".into(),
        ..Default::default()
    };
    let app = TestApp::with_settings(settings);
    let (status, _) = app.post_json("/api/v2/employees/", &employee_payload("E1", "Alice")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.get("/api/v1/employees/E1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_touching_store() {
    let app = TestApp::new();
    app.store.set_offline(true);
    let (status, body) = app.post_json(COLLECTION, &json!({"employee_id": "E1"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"].as_array().unwrap().len(), 5);

    let (status, _) = app.post_raw(COLLECTION, "not json".to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = TestApp::new();
    let mut payload = employee_payload("E1", "Alice");
    payload["position"] = json!("x".repeat(payroll_api::MAX_BODY_BYTES + 1));
    let (status, body) = app.post_json(COLLECTION, &payload).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({"detail": "Request body too large"}));
    assert!(app.store.is_empty());
}
