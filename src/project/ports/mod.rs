//! Port contracts for project storage.

pub mod catalogue;

pub use catalogue::{CatalogueError, CatalogueResult, ProjectCatalogue};
