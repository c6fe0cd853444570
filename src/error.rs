//! Error types for the staffing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the directory and the
//! allocation engine.

use thiserror::Error;

use crate::models::Department;

/// The main error type for the staffing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
/// use staffing_engine::models::Department;
///
/// let error = EngineError::EmptyPool {
///     department: Department::Ai,
/// };
/// assert_eq!(error.to_string(), "No employees found in department AI");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No employee in the directory belongs to the requested department.
    #[error("No employees found in department {department}")]
    EmptyPool {
        /// The department that had no eligible employees.
        department: Department,
    },

    /// The requested headcount was not a positive integer.
    #[error("Requested count must be at least 1, got {count}")]
    InvalidCount {
        /// The count that was rejected.
        count: u32,
    },

    /// No employee with the given identifier exists in the directory.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        employee_id: u32,
    },

    /// An employee with the given identifier already exists.
    #[error("Employee ID already exists: {employee_id}")]
    DuplicateEmployee {
        /// The identifier that collided.
        employee_id: u32,
    },

    /// An employee with the given email address already exists.
    #[error("Email address already in use: {email}")]
    DuplicateEmail {
        /// The email address that collided.
        email: String,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
