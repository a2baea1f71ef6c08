//! Unit tests for the project module.
//!
//! Tests are organised by concern: task values, the project state machine,
//! billing, the portfolio service and summary rendering.
