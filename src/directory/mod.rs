//! The staff directory component.
//!
//! This module holds the authoritative employee collection: the
//! in-memory [`Directory`] store and the [`RosterLoader`] that seeds it
//! from a YAML file at startup. The allocation engine never touches the
//! store directly; it receives an owned snapshot per call.

mod roster;
mod store;

pub use roster::RosterLoader;
pub use store::Directory;
