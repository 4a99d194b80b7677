use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use customers::api;
use customers::domain::{Customer, CustomerInput, CustomerRepository, DomainError};
use customers::infrastructure::AppState;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

/// Repository whose store is always broken
struct BrokenStore;

fn store_error() -> DomainError {
    DomainError::Database("disk I/O error".to_string())
}

#[async_trait]
impl CustomerRepository for BrokenStore {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        Err(store_error())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Customer, DomainError> {
        Err(store_error())
    }

    async fn create(&self, _input: CustomerInput) -> Result<Customer, DomainError> {
        Err(store_error())
    }

    async fn update(&self, _id: i32, _input: CustomerInput) -> Result<Customer, DomainError> {
        Err(store_error())
    }

    async fn delete(&self, _id: i32) -> Result<(), DomainError> {
        Err(store_error())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Err(store_error())
    }
}

fn broken_app() -> Router {
    api::api_router(AppState::with_repository(Arc::new(BrokenStore)))
}

async fn call(app: Router, method: &str, uri: &str, payload: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match payload {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_list_store_failure_is_500_with_message() {
    let (status, json) = call(broken_app(), "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "disk I/O error");
}

#[tokio::test]
async fn test_get_store_failure_is_500() {
    let (status, json) = call(broken_app(), "GET", "/customers/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "disk I/O error");
}

#[tokio::test]
async fn test_create_store_failure_is_400_with_message() {
    let payload = json!({ "name": "TestHandler", "age": 20 });
    let (status, json) = call(broken_app(), "POST", "/customers", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "disk I/O error");
}

#[tokio::test]
async fn test_update_store_failure_hides_message() {
    let payload = json!({ "name": "UpdatedHandler", "age": 21 });
    let (status, json) = call(broken_app(), "PUT", "/customers/1", Some(payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to update customer");
}

#[tokio::test]
async fn test_delete_store_failure_is_500() {
    let (status, json) = call(broken_app(), "DELETE", "/customers/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "disk I/O error");
}

#[tokio::test]
async fn test_validation_happens_before_store_access() {
    let (status, json) = call(broken_app(), "GET", "/customers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "must be a number");

    let payload = json!({ "name": "UpdatedHandler", "age": 21 });
    let (status, json) = call(broken_app(), "PUT", "/customers/abc", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid customer ID");

    let (status, json) = call(broken_app(), "PUT", "/customers/1", Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Failed to parse request body");
}
