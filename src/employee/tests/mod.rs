//! Unit tests for the employee context.
