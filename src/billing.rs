//! Billing policy configuration.
//!
//! # Examples
//!
//! ```
//! use home_solution::billing::BillingPolicy;
//!
//! let policy = BillingPolicy::default();
//! assert_eq!(policy.hours_per_day, 8.0);
//!
//! let custom: BillingPolicy =
//!     serde_json::from_str(r#"{ "delayed_markup": 1.1 }"#).unwrap_or_default();
//! assert_eq!(custom.delayed_markup, 1.1);
//! assert_eq!(custom.on_time_markup, 1.35);
//! ```

use serde::{Deserialize, Serialize};

/// Numeric constants used when pricing tasks and projects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingPolicy {
    /// Working hours billed per day by hourly contractors.
    pub hours_per_day: f64,
    /// Multiplier applied to staff task costs finished without delay.
    pub punctuality_bonus: f64,
    /// Multiplier applied to a project total when nothing ran late.
    pub on_time_markup: f64,
    /// Multiplier applied to a project total when any delay occurred.
    pub delayed_markup: f64,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl BillingPolicy {
    /// Returns the standard policy: 8-hour days, a 2% punctuality bonus, a
    /// 35% markup for on-time projects and 25% for delayed ones.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            hours_per_day: 8.0,
            punctuality_bonus: 1.02,
            on_time_markup: 1.35,
            delayed_markup: 1.25,
        }
    }

    /// Returns the markup for a project total.
    #[must_use]
    pub const fn markup(&self, delayed: bool) -> f64 {
        if delayed {
            self.delayed_markup
        } else {
            self.on_time_markup
        }
    }
}
