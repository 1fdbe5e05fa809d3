//! Test harness: the full router over an in-memory store, driven in-process.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use payroll_api::{app, AppState, MemoryEmployeeStore, Settings};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryEmployeeStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let store = Arc::new(MemoryEmployeeStore::new());
        let state = AppState::new(settings, store.clone());
        Self {
            router: app(state),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

pub fn employee_payload(employee_id: &str, name: &str) -> Value {
    serde_json::json!({
        "employee_id": employee_id,
        "name": name,
        "email": format!("{}@x.com", name.to_lowercase()),
        "department": "Eng",
        "position": "SWE",
        "base_salary": 90000.0
    })
}
