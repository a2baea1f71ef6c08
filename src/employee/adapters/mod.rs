//! Adapter implementations for employee ports.

pub mod memory;
