//! Employee selection for project allocation.
//!
//! This module implements the allocation routine itself: validating the
//! request, seeding one pick per experience tier, filling the remaining
//! slots in deadline-weighted priority order, and truncating the result
//! to the requested headcount.

use crate::error::{EngineError, EngineResult};
use crate::models::{AllocationRequest, Employee};

use super::priority::priority_order;
use super::tiering::TieredPool;

/// Allocates employees from a directory snapshot to a project.
///
/// The pool is first narrowed to the employees whose department matches
/// the request (the eligible pool). Selection then proceeds in three
/// steps:
///
/// 1. **Seed**: the single most experienced member of each non-empty tier
///    is taken, in senior, mid, junior order. This guarantees
///    representation across experience levels whenever the pool spans
///    multiple tiers.
/// 2. **Fill**: remaining slots are filled by walking the whole eligible
///    pool in the urgency's priority order, skipping employees already
///    selected (by `employee_id`).
/// 3. **Truncate**: the result is capped at `request.count` entries. The
///    seed step runs unconditionally, so a request for fewer than three
///    employees against a pool spanning all tiers is resolved here, in
///    seed insertion order.
///
/// The routine is pure: it reads only the snapshot it is given, mutates
/// nothing, and produces identical output for identical input. Equal
/// experience ties keep the snapshot's iteration order.
///
/// # Arguments
///
/// * `employees` - A snapshot of the full employee collection
/// * `request` - The department, urgency and headcount to allocate for
///
/// # Returns
///
/// The selected employees in selection order, or an error if:
/// - no employee belongs to the requested department ([`EngineError::EmptyPool`])
/// - the requested count is zero ([`EngineError::InvalidCount`])
///
/// A pool with fewer eligible members than `request.count` is not an
/// error; the result is simply shorter than requested.
///
/// # Example
///
/// ```
/// use staffing_engine::allocation::allocate;
/// use staffing_engine::models::{AllocationRequest, Department, Employee, Urgency};
///
/// let pool = vec![
///     Employee {
///         employee_id: 1,
///         name: "Ava".to_string(),
///         dept: Department::Ai,
///         role: "ML Engineer".to_string(),
///         email: "ava@example.com".to_string(),
///         experience: 7,
///         description: None,
///     },
///     Employee {
///         employee_id: 2,
///         name: "Ben".to_string(),
///         dept: Department::Ai,
///         role: "ML Engineer".to_string(),
///         email: "ben@example.com".to_string(),
///         experience: 1,
///         description: None,
///     },
/// ];
///
/// let request = AllocationRequest {
///     department: Department::Ai,
///     urgency: Urgency::Tight,
///     count: 2,
/// };
///
/// let assigned = allocate(&pool, &request).unwrap();
/// assert_eq!(assigned.len(), 2);
/// assert_eq!(assigned[0].employee_id, 1);
/// ```
pub fn allocate(
    employees: &[Employee],
    request: &AllocationRequest,
) -> EngineResult<Vec<Employee>> {
    let eligible: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.dept == request.department)
        .collect();

    if eligible.is_empty() {
        return Err(EngineError::EmptyPool {
            department: request.department,
        });
    }

    if request.count < 1 {
        return Err(EngineError::InvalidCount {
            count: request.count,
        });
    }

    let tiers = TieredPool::partition(eligible.iter().copied());

    // One pick per non-empty tier, senior first.
    let mut selected: Vec<&Employee> = Vec::new();
    for tier in [&tiers.seniors, &tiers.mids, &tiers.juniors] {
        if let Some(top) = tier.first().copied() {
            selected.push(top);
        }
    }

    let mut remaining = (request.count as usize).saturating_sub(selected.len());

    if remaining > 0 {
        for candidate in priority_order(&tiers, request.urgency) {
            if remaining == 0 {
                break;
            }
            if selected
                .iter()
                .any(|e| e.employee_id == candidate.employee_id)
            {
                continue;
            }
            selected.push(candidate);
            remaining -= 1;
        }
    }

    // Authoritative final bound; the seed step may overshoot small counts.
    selected.truncate(request.count as usize);

    Ok(selected.into_iter().cloned().collect())
}
