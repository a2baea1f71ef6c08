//! Employee records and per-task billing.
//!
//! Employees are either hourly contractors or salaried staff. Both variants
//! share identity, availability, delay bookkeeping and completed-task
//! history, and differ only in how a finished task is priced. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
