//! Core data models for the staffing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation;
mod employee;

pub use allocation::{AllocationOutcome, AllocationRequest, Urgency};
pub use employee::{Department, Employee};
