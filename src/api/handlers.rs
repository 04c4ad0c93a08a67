//! HTTP request handlers for the person validation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Employee, PersonRecord, RecordKind, Staff};
use crate::validation::{RecordConstraints, validate};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employee", post(employee_handler))
        .route("/api/staff", post(staff_handler))
        .with_state(state)
}

/// Handler for POST /api/employee.
async fn employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> Response {
    respond(&state, payload)
}

/// Handler for POST /api/staff.
async fn staff_handler(
    State(state): State<AppState>,
    payload: Result<Json<Staff>, JsonRejection>,
) -> Response {
    respond(&state, payload)
}

/// Validates a deserialized record and hands it back unchanged if every
/// rule passes.
///
/// # Errors
///
/// Returns `ValidationFailed` with every failed rule, in evaluation order.
///
/// # Examples
///
/// ```
/// use person_validation::api::handle_post;
/// use person_validation::error::ServiceError;
/// use person_validation::models::Staff;
/// use person_validation::validation::RecordConstraints;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let staff = Staff {
///     name: "Jane Doe Smith".to_string(),
///     email: None,
///     phone: Some("123-456-7890".to_string()),
///     hourly_salary: Decimal::from(20),
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// match handle_post(staff, &RecordConstraints::staff(), today) {
///     Err(ServiceError::ValidationFailed { violations, .. }) => {
///         assert_eq!(violations[0].field, "hourlySalary");
///     }
///     other => panic!("expected a validation failure, got {:?}", other),
/// }
/// ```
pub fn handle_post<R: PersonRecord>(
    record: R,
    constraints: &RecordConstraints,
    today: NaiveDate,
) -> ServiceResult<R> {
    let result = validate(&record, constraints, today);
    if result.is_valid() {
        Ok(record)
    } else {
        Err(ServiceError::ValidationFailed {
            record: R::KIND,
            violations: result.into_violations(),
        })
    }
}

fn respond<R>(state: &AppState, payload: Result<Json<R>, JsonRejection>) -> Response
where
    R: PersonRecord + Serialize,
{
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, record = %R::KIND, "Processing validation request");

    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => return rejection_response(correlation_id, R::KIND, rejection),
    };

    let start_time = Instant::now();
    let today = state.clock().today();
    let constraints = state.config().constraints(R::KIND);

    match handle_post(record, constraints, today) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record = %R::KIND,
                today = %today,
                duration_us = start_time.elapsed().as_micros(),
                "Record accepted"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            if let ServiceError::ValidationFailed { violations, .. } = &err {
                warn!(
                    correlation_id = %correlation_id,
                    record = %R::KIND,
                    today = %today,
                    violations = violations.len(),
                    fields = ?violations.iter().map(|v| v.field.as_str()).collect::<Vec<_>>(),
                    "Record rejected"
                );
            }
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, kind: RecordKind, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                record = %kind,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                record = %kind,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
