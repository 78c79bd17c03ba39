//! Response types for the roster service API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the small body returned by the count endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Response body for the `GET /employees/count` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of employees currently stored.
    pub count: usize,
}

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee with id {} not found", id),
            format!("No employee is stored under the id '{}'", id),
        )
    }

    /// Creates a duplicate badge error response.
    pub fn duplicate_badge(badge_number: u32) -> Self {
        Self::with_details(
            "DUPLICATE_BADGE",
            format!("Badge number {} is already in use", badge_number),
            "Each stored employee must hold a unique badge number",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            RosterError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&id),
            },
            RosterError::DuplicateBadge { badge_number } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::duplicate_badge(badge_number),
            },
            RosterError::InsufficientLeadTime { start_date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VACATION_LEAD_TIME",
                    format!(
                        "Vacation starting at {} must begin more than 24 hours from now",
                        start_date
                    ),
                    "Vacations must be booked more than 24 hours before they start",
                ),
            },
            RosterError::SeedNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SEED_ERROR",
                    "Seed roster error",
                    format!("Seed roster file not found: {}", path),
                ),
            },
            RosterError::SeedParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SEED_ERROR",
                    "Seed roster parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RosterError::SeedInvalid { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SEED_ERROR", "Seed roster invalid", message),
            },
        }
    }
}
