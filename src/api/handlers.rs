//! HTTP request handlers for the roster service API.
//!
//! This module contains the handler functions for all employee endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Employee;

use super::request::{
    AttachDocumentRequest, BookVacationRequest, NewEmployeeRequest, UpdateEmployeeRequest,
};
use super::response::{ApiError, ApiErrorResponse, CountResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route("/employees/count", get(count_employees_handler))
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .patch(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/employees/:id/documents", post(attach_document_handler))
        .route("/employees/:id/vacations", post(book_vacation_handler))
        .with_state(state)
}

/// Unwraps a JSON request body, mapping axum's rejections to API errors.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
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
                        ApiError::validation_error(body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Handler for GET /employees endpoint.
///
/// Returns every stored employee.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().get_all() {
        Ok(employees) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(employees),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /employees/count endpoint.
async fn count_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().count() {
        Ok(count) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(CountResponse { count }),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /employees/:id endpoint.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store().get_employee(&id) {
        Ok(employee) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(employee),
        )
            .into_response(),
        Err(err) => {
            warn!(employee_id = %id, error = %err, "Employee lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /employees endpoint.
///
/// Stores a new employee and returns the record as stored, including the
/// generated id.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee creation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match state.store().add_employee(Employee::from(request)) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                badge_number = employee.badge_number,
                "Employee created"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(employee),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee creation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PATCH /employees/:id endpoint.
///
/// Applies a partial update and returns the record after the merge.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing employee update request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match state.store().update_employee(request.into_patch(id)) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee updated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(employee),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee update failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /employees/:id endpoint.
///
/// Removes the employee and returns its final state.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match state.store().delete_employee(&id) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                badge_number = employee.badge_number,
                "Employee deleted"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(employee),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %id,
                error = %err,
                "Employee deletion failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /employees/:id/documents endpoint.
///
/// Attaches a document identifier to the employee's record.
async fn attach_document_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AttachDocumentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match state.store().add_document(&id, &request.document_id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                document_id = %request.document_id,
                "Document attached"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %id,
                error = %err,
                "Document attachment failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /employees/:id/vacations endpoint.
///
/// Books a vacation for the employee and returns the new booking.
async fn book_vacation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookVacationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing vacation booking request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match state
        .store()
        .add_vacation(&id, request.start_date, request.duration_hours)
    {
        Ok(vacation) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                vacation_id = %vacation.id,
                start_date = vacation.start_date,
                "Vacation booked"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(vacation),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %id,
                error = %err,
                "Vacation booking failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
