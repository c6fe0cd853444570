//! Deadline-weighted priority ordering.
//!
//! After the cross-tier seed picks, remaining project slots are filled by
//! walking the whole eligible pool in an order determined by the deadline
//! urgency. This module builds that walk order from ranked tiers.

use crate::models::{Employee, Urgency};

use super::tiering::TieredPool;

/// Returns the priority order over the whole eligible pool for an urgency.
///
/// The order concatenates the ranked tiers:
/// - [`Urgency::Tight`]: seniors, then mids, then juniors
/// - [`Urgency::Average`]: mids, then seniors, then juniors
/// - [`Urgency::Lenient`]: juniors, then mids, then seniors
///
/// Within each tier the ranking from [`TieredPool::partition`] is kept,
/// so the walk visits every eligible employee exactly once.
///
/// # Example
///
/// ```
/// use staffing_engine::allocation::{priority_order, TieredPool};
/// use staffing_engine::models::{Department, Employee, Urgency};
///
/// let pool = vec![
///     Employee {
///         employee_id: 1,
///         name: "Ava".to_string(),
///         dept: Department::Dm,
///         role: "Analyst".to_string(),
///         email: "ava@example.com".to_string(),
///         experience: 7,
///         description: None,
///     },
///     Employee {
///         employee_id: 2,
///         name: "Ben".to_string(),
///         dept: Department::Dm,
///         role: "Analyst".to_string(),
///         email: "ben@example.com".to_string(),
///         experience: 1,
///         description: None,
///     },
/// ];
///
/// let tiers = TieredPool::partition(&pool);
/// let lenient: Vec<u32> = priority_order(&tiers, Urgency::Lenient)
///     .map(|e| e.employee_id)
///     .collect();
/// assert_eq!(lenient, vec![2, 1]);
/// ```
pub fn priority_order<'a>(
    tiers: &'a TieredPool<'a>,
    urgency: Urgency,
) -> impl Iterator<Item = &'a Employee> + 'a {
    let (first, second, third) = match urgency {
        Urgency::Tight => (&tiers.seniors, &tiers.mids, &tiers.juniors),
        Urgency::Average => (&tiers.mids, &tiers.seniors, &tiers.juniors),
        Urgency::Lenient => (&tiers.juniors, &tiers.mids, &tiers.seniors),
    };

    first.iter().chain(second).chain(third).copied()
}
