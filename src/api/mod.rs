//! HTTP API module for the staffing engine.
//!
//! This module provides the REST API endpoints for managing the staff
//! directory and requesting project allocations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocateRequest, EmployeeRequest};
pub use response::ApiError;
pub use state::AppState;
