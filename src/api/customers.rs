use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::{Customer, CustomerInput, DomainError};
use crate::infrastructure::AppState;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Ids in lookups must be plain non-negative integers
fn parse_lookup_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 0)
}

/// Row key for a parsed id; ids outside the key range can never match a row
fn row_key(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> impl IntoResponse {
    match state.customer_repo.find_all().await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list customers: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, description = "Id is not a number"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_lookup_id(&raw_id) else {
        return error_response(StatusCode::BAD_REQUEST, "must be a number");
    };
    let Some(id) = row_key(id) else {
        return error_response(StatusCode::NOT_FOUND, DomainError::NotFound.to_string());
    };

    match state.customer_repo.find_by_id(id).await {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(DomainError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, DomainError::NotFound.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to load customer {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Malformed body or store failure")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.customer_repo.create(input).await {
        Ok(customer) => {
            tracing::info!("Created customer {}", customer.id);
            (StatusCode::CREATED, Json(customer)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create customer: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = CustomerInput,
    responses(
        (status = 200, description = "Customer replaced", body = Customer),
        (status = 400, description = "Id is not a number or body is malformed"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(id) = raw_id.parse::<i64>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid customer ID");
    };

    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!("Rejected update body for {}: {}", id, rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "Failed to parse request body");
        }
    };
    let Some(id) = row_key(id) else {
        return error_response(StatusCode::NOT_FOUND, "Customer not found");
    };

    match state.customer_repo.update(id, input).await {
        Ok(customer) => {
            tracing::info!("Updated customer {}", id);
            (StatusCode::OK, Json(customer)).into_response()
        }
        Err(DomainError::NotFound) => error_response(StatusCode::NOT_FOUND, "Customer not found"),
        Err(e) => {
            tracing::error!("Failed to update customer {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update customer")
        }
    }
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, description = "Id is not a number"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    let id = match raw_id.parse::<i64>() {
        Ok(id) => id,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let Some(id) = row_key(id) else {
        return error_response(StatusCode::NOT_FOUND, DomainError::NotFound.to_string());
    };

    match state.customer_repo.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted customer {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(DomainError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, DomainError::NotFound.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to delete customer {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
