//! In-memory employee adapters.

mod roster;

pub use roster::InMemoryRoster;
