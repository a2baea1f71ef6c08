//! Adapter implementations for project ports.

pub mod memory;
