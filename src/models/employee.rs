//! Employee model and related types.
//!
//! This module defines the Employee struct and Department enum for
//! representing workers in the staff directory.

use serde::{Deserialize, Serialize};

/// Represents a department of the organization.
///
/// Departments form a closed set; an employee always belongs to exactly
/// one of them, and allocation requests are scoped to a single
/// department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    /// API Management.
    Apim,
    /// Data Management.
    Dm,
    /// Design and Development.
    Dad,
    /// Customer Success.
    Cs,
    /// Artificial Intelligence.
    Ai,
}

impl Department {
    /// All departments, in display order.
    pub const ALL: [Department; 5] = [
        Department::Apim,
        Department::Dm,
        Department::Dad,
        Department::Cs,
        Department::Ai,
    ];

    /// Returns the department code as used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Department::Apim => "APIM",
            Department::Dm => "DM",
            Department::Dad => "DAD",
            Department::Cs => "CS",
            Department::Ai => "AI",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Represents an employee record in the staff directory.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{Department, Employee};
///
/// let employee = Employee {
///     employee_id: 101,
///     name: "John Doe".to_string(),
///     dept: Department::Ai,
///     role: "ML Engineer".to_string(),
///     email: "john@example.com".to_string(),
///     experience: 3,
///     description: Some("AI specialist".to_string()),
/// };
/// assert_eq!(employee.dept.code(), "AI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee, immutable once created.
    pub employee_id: u32,
    /// The employee's full name.
    pub name: String,
    /// The department the employee belongs to.
    pub dept: Department,
    /// The employee's job title.
    pub role: String,
    /// The employee's email address, unique across the directory.
    pub email: String,
    /// Years of experience.
    pub experience: u32,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}
