//! Experience tiering and tier ranking logic.
//!
//! This module provides the mapping from years of experience to an
//! experience tier and the partitioning of an eligible pool into ranked
//! tiers, which later selection steps build on.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Represents the experience band an employee falls into.
///
/// The mapping is total and exhaustive over non-negative years of
/// experience; every employee belongs to exactly one tier.
///
/// # Example
///
/// ```
/// use staffing_engine::allocation::ExperienceTier;
///
/// let tier = ExperienceTier::Senior;
/// assert_eq!(format!("{:?}", tier), "Senior");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// Two years of experience or less.
    Junior,
    /// Three to five years of experience.
    Mid,
    /// More than five years of experience.
    Senior,
}

impl std::fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceTier::Junior => write!(f, "junior"),
            ExperienceTier::Mid => write!(f, "mid"),
            ExperienceTier::Senior => write!(f, "senior"),
        }
    }
}

/// Determines the experience tier for a given number of years.
///
/// # Arguments
///
/// * `experience` - Years of experience
///
/// # Returns
///
/// The [`ExperienceTier`] for the given experience:
/// - [`ExperienceTier::Junior`] for 2 years or less
/// - [`ExperienceTier::Mid`] for 3 to 5 years
/// - [`ExperienceTier::Senior`] for more than 5 years
///
/// # Example
///
/// ```
/// use staffing_engine::allocation::{tier_for, ExperienceTier};
///
/// assert_eq!(tier_for(0), ExperienceTier::Junior);
/// assert_eq!(tier_for(2), ExperienceTier::Junior);
/// assert_eq!(tier_for(3), ExperienceTier::Mid);
/// assert_eq!(tier_for(5), ExperienceTier::Mid);
/// assert_eq!(tier_for(6), ExperienceTier::Senior);
/// ```
pub fn tier_for(experience: u32) -> ExperienceTier {
    if experience <= 2 {
        ExperienceTier::Junior
    } else if experience <= 5 {
        ExperienceTier::Mid
    } else {
        ExperienceTier::Senior
    }
}

/// An eligible pool partitioned into ranked experience tiers.
///
/// Each tier is sorted by experience descending. The sort is stable:
/// employees with equal experience keep their relative order from the
/// pool's original iteration order, which makes the whole selection
/// deterministic without a secondary sort key.
#[derive(Debug, Clone)]
pub struct TieredPool<'a> {
    /// Senior employees, most experienced first.
    pub seniors: Vec<&'a Employee>,
    /// Mid-level employees, most experienced first.
    pub mids: Vec<&'a Employee>,
    /// Junior employees, most experienced first.
    pub juniors: Vec<&'a Employee>,
}

impl<'a> TieredPool<'a> {
    /// Partitions a pool of employees into ranked tiers.
    ///
    /// # Arguments
    ///
    /// * `pool` - The eligible employees, in their original iteration order
    ///
    /// # Example
    ///
    /// ```
    /// use staffing_engine::allocation::TieredPool;
    /// use staffing_engine::models::{Department, Employee};
    ///
    /// let pool = vec![
    ///     Employee {
    ///         employee_id: 1,
    ///         name: "Ava".to_string(),
    ///         dept: Department::Ai,
    ///         role: "Engineer".to_string(),
    ///         email: "ava@example.com".to_string(),
    ///         experience: 7,
    ///         description: None,
    ///     },
    ///     Employee {
    ///         employee_id: 2,
    ///         name: "Ben".to_string(),
    ///         dept: Department::Ai,
    ///         role: "Engineer".to_string(),
    ///         email: "ben@example.com".to_string(),
    ///         experience: 1,
    ///         description: None,
    ///     },
    /// ];
    ///
    /// let tiers = TieredPool::partition(&pool);
    /// assert_eq!(tiers.seniors.len(), 1);
    /// assert!(tiers.mids.is_empty());
    /// assert_eq!(tiers.juniors.len(), 1);
    /// ```
    pub fn partition<I>(pool: I) -> Self
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        let mut seniors = Vec::new();
        let mut mids = Vec::new();
        let mut juniors = Vec::new();

        for employee in pool {
            match tier_for(employee.experience) {
                ExperienceTier::Senior => seniors.push(employee),
                ExperienceTier::Mid => mids.push(employee),
                ExperienceTier::Junior => juniors.push(employee),
            }
        }

        // Stable sort: equal-experience peers keep their pool order.
        seniors.sort_by(|a, b| b.experience.cmp(&a.experience));
        mids.sort_by(|a, b| b.experience.cmp(&a.experience));
        juniors.sort_by(|a, b| b.experience.cmp(&a.experience));

        Self {
            seniors,
            mids,
            juniors,
        }
    }
}
