//! Validated pay rate.

use super::EmployeeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative, finite pay rate (per hour or per day depending on the
/// employee variant).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rate(f64);

impl Rate {
    /// Creates a validated rate.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::InvalidRate`] when the value is
    /// negative, NaN or infinite.
    pub fn new(value: f64) -> Result<Self, EmployeeDomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(EmployeeDomainError::InvalidRate(value));
        }
        Ok(Self(value))
    }

    /// Returns the rate amount.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rate {
    type Error = EmployeeDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for f64 {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
