//! Response types for the staffing engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Confirmation body returned after deleting an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// Human-readable confirmation message.
    pub message: String,
}

impl DeleteConfirmation {
    /// Creates the standard deletion confirmation.
    pub fn deleted() -> Self {
        Self {
            message: "Employee deleted successfully".to_string(),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::EmptyPool { department } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "EMPTY_POOL",
                    format!("No employees found in department {}", department),
                    "The requested department has no employees to allocate from",
                ),
            },
            EngineError::InvalidCount { count } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_COUNT",
                    format!("Requested count must be at least 1, got {}", count),
                    "The requested headcount is not a positive integer",
                ),
            },
            EngineError::EmployeeNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    "Employee not found",
                    format!("No employee with ID {} exists in the directory", employee_id),
                ),
            },
            EngineError::DuplicateEmployee { employee_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_EMPLOYEE_ID",
                    "Employee ID already exists",
                    format!("An employee with ID {} already exists", employee_id),
                ),
            },
            EngineError::DuplicateEmail { email } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DUPLICATE_EMAIL",
                    "Email address already in use",
                    format!("The email address '{}' belongs to another employee", email),
                ),
            },
            EngineError::RosterNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster error",
                    format!("Roster file not found: {}", path),
                ),
            },
            EngineError::RosterParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
