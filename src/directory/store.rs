//! In-memory employee store.
//!
//! This module provides the [`Directory`] type, the authoritative holder
//! of employee records. Records are kept in insertion order, which is the
//! iteration order allocation snapshots observe.

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// The in-memory staff directory.
///
/// Supports create, read, update and delete over employee records and
/// hands out snapshots for allocation. Identifiers and email addresses
/// are unique across the directory; `employee_id` is immutable once a
/// record is created.
///
/// # Example
///
/// ```
/// use staffing_engine::directory::Directory;
/// use staffing_engine::models::{Department, Employee};
///
/// let mut directory = Directory::new();
/// directory
///     .create(Employee {
///         employee_id: 101,
///         name: "John Doe".to_string(),
///         dept: Department::Ai,
///         role: "ML Engineer".to_string(),
///         email: "john@example.com".to_string(),
///         experience: 3,
///         description: None,
///     })
///     .unwrap();
///
/// assert_eq!(directory.len(), 1);
/// assert_eq!(directory.get(101).unwrap().name, "John Doe");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    employees: Vec<Employee>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Adds a new employee record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateEmployee`] if an employee with the
    /// same `employee_id` already exists, or
    /// [`EngineError::DuplicateEmail`] if the email address is already in
    /// use.
    pub fn create(&mut self, employee: Employee) -> EngineResult<()> {
        if self
            .employees
            .iter()
            .any(|e| e.employee_id == employee.employee_id)
        {
            return Err(EngineError::DuplicateEmployee {
                employee_id: employee.employee_id,
            });
        }

        if self.employees.iter().any(|e| e.email == employee.email) {
            return Err(EngineError::DuplicateEmail {
                email: employee.email.clone(),
            });
        }

        self.employees.push(employee);
        Ok(())
    }

    /// Looks up an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] if no record matches.
    pub fn get(&self, employee_id: u32) -> EngineResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .ok_or(EngineError::EmployeeNotFound { employee_id })
    }

    /// Returns all employees in insertion order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns an owned snapshot of the full collection.
    ///
    /// The snapshot is independent of the directory: later mutations do
    /// not affect it. This is the view handed to the allocator, which
    /// treats it as read-only for the duration of one call.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    /// Replaces the mutable fields of an existing employee.
    ///
    /// Every field except `employee_id` is taken from `updated`; the
    /// identifier is immutable and the `employee_id` field of `updated`
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] if no record matches, or
    /// [`EngineError::DuplicateEmail`] if the new email address is used
    /// by a different employee.
    pub fn update(&mut self, employee_id: u32, updated: Employee) -> EngineResult<Employee> {
        let position = self
            .employees
            .iter()
            .position(|e| e.employee_id == employee_id)
            .ok_or(EngineError::EmployeeNotFound { employee_id })?;

        if self
            .employees
            .iter()
            .enumerate()
            .any(|(i, e)| i != position && e.email == updated.email)
        {
            return Err(EngineError::DuplicateEmail {
                email: updated.email.clone(),
            });
        }

        let employee = &mut self.employees[position];
        employee.name = updated.name;
        employee.dept = updated.dept;
        employee.role = updated.role;
        employee.email = updated.email;
        employee.experience = updated.experience;
        employee.description = updated.description;

        Ok(employee.clone())
    }

    /// Removes an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] if no record matches.
    pub fn remove(&mut self, employee_id: u32) -> EngineResult<()> {
        let position = self
            .employees
            .iter()
            .position(|e| e.employee_id == employee_id)
            .ok_or(EngineError::EmployeeNotFound { employee_id })?;

        self.employees.remove(position);
        Ok(())
    }
}
