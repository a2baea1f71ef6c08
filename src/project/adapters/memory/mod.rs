//! In-memory project adapters.

mod catalogue;

pub use catalogue::InMemoryProjectCatalogue;
