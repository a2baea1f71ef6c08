//! Validated employee name type.

use super::EmployeeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed employee name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Creates a validated employee name.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::EmptyName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(EmployeeDomainError::EmptyName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmployeeName {
    type Error = EmployeeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeName> for String {
    fn from(name: EmployeeName) -> Self {
        name.0
    }
}

impl AsRef<str> for EmployeeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
