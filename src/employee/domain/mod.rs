//! Domain model for employees.
//!
//! The employee domain models validated identity and rate values, the
//! closed set of billing variants, and the mutable assignment bookkeeping
//! that projects drive. Storage concerns stay outside the domain boundary.

mod category;
mod employee;
mod error;
mod ids;
mod name;
mod rate;

pub use category::StaffCategory;
pub use employee::{Employee, EmployeeKind};
pub use error::EmployeeDomainError;
pub use ids::EmployeeId;
pub use name::EmployeeName;
pub use rate::Rate;
