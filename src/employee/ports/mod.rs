//! Port contracts for employee lookup and registration.
//!
//! Projects never own employees; they hold [`crate::employee::domain::EmployeeId`]s
//! and resolve them through a [`Roster`] whenever employee state must change.

pub mod roster;

pub use roster::{Roster, RosterError, RosterResult};
