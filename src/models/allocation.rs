//! Allocation request and outcome models.
//!
//! This module contains the transient types exchanged with the allocation
//! engine: the [`AllocationRequest`] describing what a project needs and
//! the [`AllocationOutcome`] envelope returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Department, Employee};

/// Represents how tight the project deadline is.
///
/// The urgency drives the order in which experience tiers are drawn from
/// once every tier is represented: a tight deadline prefers the most
/// experienced employees, a lenient one the least experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The deadline is close; prioritize seniors.
    Tight,
    /// An ordinary deadline; prioritize mid-level employees.
    Average,
    /// A relaxed deadline; prioritize juniors.
    Lenient,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Tight => write!(f, "tight"),
            Urgency::Average => write!(f, "average"),
            Urgency::Lenient => write!(f, "lenient"),
        }
    }
}

/// A request to allocate employees to a project.
///
/// Constructed per call and never persisted.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{AllocationRequest, Department, Urgency};
///
/// let request = AllocationRequest {
///     department: Department::Apim,
///     urgency: Urgency::Tight,
///     count: 3,
/// };
/// assert_eq!(request.count, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The department to draw employees from.
    pub department: Department,
    /// The deadline urgency for the project.
    pub urgency: Urgency,
    /// The desired number of employees.
    pub count: u32,
}

/// The result envelope returned by the allocation endpoint.
///
/// Wraps the selected employees together with the request parameters and
/// bookkeeping metadata for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Unique identifier for this allocation.
    pub allocation_id: Uuid,
    /// When the allocation was computed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced this allocation.
    pub engine_version: String,
    /// The department that was requested.
    pub department: Department,
    /// The urgency that was requested.
    pub urgency: Urgency,
    /// The headcount that was requested.
    pub requested_count: u32,
    /// How many employees were eligible in the requested department.
    pub eligible_count: u32,
    /// The selected employees, in selection order.
    pub assigned: Vec<Employee>,
}
