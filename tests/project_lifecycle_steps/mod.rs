//! Step definitions for project lifecycle behaviour tests.

pub mod given;
pub mod when;
pub mod world;
