//! HTTP request handlers for the staffing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::allocate;
use crate::models::{AllocationOutcome, AllocationRequest, Employee};

use super::request::{AllocateRequest, EmployeeRequest};
use super::response::{ApiError, ApiErrorResponse, DeleteConfirmation};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route(
            "/employees/:employee_id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/allocate", post(allocate_handler))
        .with_state(state)
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employee: Employee = request.into();
    info!(employee_id = employee.employee_id, "Creating employee");

    state.directory_mut().create(employee.clone())?;

    info!(employee_id = employee.employee_id, "Employee created successfully");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    let employees = state.directory().snapshot();
    info!(count = employees.len(), "Fetched all employees");
    Json(employees)
}

/// Handler for GET /employees/:employee_id.
async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<u32>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    info!(employee_id, "Fetching employee");
    let directory = state.directory();
    let employee = directory.get(employee_id)?.clone();
    Ok(Json(employee))
}

/// Handler for PUT /employees/:employee_id.
///
/// The identifier in the path is authoritative; the body's
/// `employee_id` field is ignored.
async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<u32>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    info!(employee_id, "Updating employee");

    let updated = state.directory_mut().update(employee_id, request.into())?;

    info!(employee_id, "Employee updated successfully");
    Ok(Json(updated))
}

/// Handler for DELETE /employees/:employee_id.
async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<u32>,
) -> Result<Json<DeleteConfirmation>, ApiErrorResponse> {
    info!(employee_id, "Deleting employee");

    state.directory_mut().remove(employee_id)?;

    info!(employee_id, "Employee deleted successfully");
    Ok(Json(DeleteConfirmation::deleted()))
}

/// Handler for POST /allocate.
///
/// Accepts an allocation request and returns the computed assignment.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let request: AllocationRequest = request.into();

    // Snapshot the directory under the read lock, then release it; the
    // allocator only ever sees its own immutable copy.
    let snapshot = state.directory().snapshot();

    let start_time = Instant::now();
    match allocate(&snapshot, &request) {
        Ok(assigned) => {
            let duration = start_time.elapsed();
            let eligible_count = snapshot
                .iter()
                .filter(|e| e.dept == request.department)
                .count() as u32;
            info!(
                correlation_id = %correlation_id,
                department = %request.department,
                urgency = %request.urgency,
                requested_count = request.count,
                assigned_count = assigned.len(),
                duration_us = duration.as_micros(),
                "Allocation completed successfully"
            );

            let outcome = AllocationOutcome {
                allocation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                department: request.department,
                urgency: request.urgency,
                requested_count: request.count,
                eligible_count,
                assigned,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(outcome),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Allocation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
