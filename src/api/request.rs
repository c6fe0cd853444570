//! Request types for the staffing engine API.
//!
//! This module defines the JSON request structures for the `/employees`
//! and `/allocate` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{AllocationRequest, Department, Employee, Urgency};

/// Employee payload for the create and update endpoints.
///
/// On update, the identifier in the URL path is authoritative and the
/// `employee_id` field of the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub employee_id: u32,
    /// The employee's full name.
    pub name: String,
    /// The department the employee belongs to.
    pub dept: Department,
    /// The employee's job title.
    pub role: String,
    /// The employee's email address.
    pub email: String,
    /// Years of experience.
    pub experience: u32,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for the `/allocate` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AllocateRequest {
    /// The department to draw employees from.
    pub department: Department,
    /// The deadline urgency for the project.
    pub urgency: Urgency,
    /// The desired number of employees.
    pub count: u32,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            employee_id: req.employee_id,
            name: req.name,
            dept: req.dept,
            role: req.role,
            email: req.email,
            experience: req.experience,
            description: req.description,
        }
    }
}

impl From<AllocateRequest> for AllocationRequest {
    fn from(req: AllocateRequest) -> Self {
        AllocationRequest {
            department: req.department,
            urgency: req.urgency,
            count: req.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_request() {
        let json = r#"{
            "employee_id": 101,
            "name": "John Doe",
            "dept": "AI",
            "role": "ML Engineer",
            "email": "john@example.com",
            "experience": 3,
            "description": "AI specialist"
        }"#;

        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, 101);
        assert_eq!(request.dept, Department::Ai);
        assert_eq!(request.description.as_deref(), Some("AI specialist"));
    }

    #[test]
    fn test_deserialize_allocate_request() {
        let json = r#"{
            "department": "DM",
            "urgency": "lenient",
            "count": 4
        }"#;

        let request: AllocateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.department, Department::Dm);
        assert_eq!(request.urgency, Urgency::Lenient);
        assert_eq!(request.count, 4);
    }

    #[test]
    fn test_deserialize_allocate_request_unknown_department_fails() {
        let json = r#"{"department": "ZZ", "urgency": "tight", "count": 1}"#;
        assert!(serde_json::from_str::<AllocateRequest>(json).is_err());
    }

    #[test]
    fn test_employee_conversion() {
        let req = EmployeeRequest {
            employee_id: 101,
            name: "John Doe".to_string(),
            dept: Department::Ai,
            role: "ML Engineer".to_string(),
            email: "john@example.com".to_string(),
            experience: 3,
            description: None,
        };

        let employee: Employee = req.into();
        assert_eq!(employee.employee_id, 101);
        assert_eq!(employee.dept, Department::Ai);
    }

    #[test]
    fn test_allocation_conversion() {
        let req = AllocateRequest {
            department: Department::Cs,
            urgency: Urgency::Average,
            count: 2,
        };

        let request: AllocationRequest = req.into();
        assert_eq!(request.department, Department::Cs);
        assert_eq!(request.urgency, Urgency::Average);
        assert_eq!(request.count, 2);
    }
}
