//! Project lifecycle, task staffing and billing.
//!
//! A project owns its tasks, tracks which employees currently work on them
//! and which ever did, derives its own status from task coverage, and prices
//! itself from the employees that were responsible for each task. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
