//! HTTP API module for the roster service.
//!
//! This module provides the REST API endpoints for managing employees,
//! their documents and their vacation bookings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttachDocumentRequest, BookVacationRequest, NewEmployeeRequest, UpdateEmployeeRequest,
};
pub use response::{ApiError, CountResponse};
pub use state::AppState;
