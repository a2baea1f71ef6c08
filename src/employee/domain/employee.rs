//! Employee aggregate and its billing variants.

use super::{EmployeeDomainError, EmployeeId, EmployeeName, Rate, StaffCategory};
use crate::billing::BillingPolicy;
use crate::sequence::IdSequence;
use serde::{Deserialize, Serialize};

/// Billing variant of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid by the hour; delays do not affect the price.
    Contractor {
        /// Amount billed per working hour.
        hourly_rate: Rate,
    },
    /// Paid by the started day, with a bonus for punctual work.
    Staff {
        /// Amount billed per started day.
        daily_rate: Rate,
        /// Seniority tier.
        category: StaffCategory,
    },
}

impl EmployeeKind {
    /// Returns the variant name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contractor { .. } => "contractor",
            Self::Staff { .. } => "staff",
        }
    }
}

/// Employee aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: EmployeeName,
    kind: EmployeeKind,
    available: bool,
    delay_count: u32,
    completed_tasks: Vec<String>,
}

impl Employee {
    /// Creates an hourly contractor.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::EmptyName`] or
    /// [`EmployeeDomainError::InvalidRate`]. No identifier is drawn from
    /// `ids` when validation fails.
    pub fn contractor(
        name: impl Into<String>,
        hourly_rate: f64,
        ids: &mut IdSequence,
    ) -> Result<Self, EmployeeDomainError> {
        let validated_name = EmployeeName::new(name)?;
        let rate = Rate::new(hourly_rate)?;
        Ok(Self::with_kind(
            EmployeeId::new(ids.issue()),
            validated_name,
            EmployeeKind::Contractor { hourly_rate: rate },
        ))
    }

    /// Creates a salaried staff employee.
    ///
    /// The category is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::EmptyName`],
    /// [`EmployeeDomainError::InvalidRate`] or
    /// [`EmployeeDomainError::InvalidCategory`]. No identifier is drawn from
    /// `ids` when validation fails.
    pub fn staff(
        name: impl Into<String>,
        daily_rate: f64,
        category: &str,
        ids: &mut IdSequence,
    ) -> Result<Self, EmployeeDomainError> {
        let validated_name = EmployeeName::new(name)?;
        let rate = Rate::new(daily_rate)?;
        let tier = StaffCategory::try_from(category)?;
        Ok(Self::with_kind(
            EmployeeId::new(ids.issue()),
            validated_name,
            EmployeeKind::Staff {
                daily_rate: rate,
                category: tier,
            },
        ))
    }

    /// Builds an available employee with no history.
    #[must_use]
    pub const fn with_kind(id: EmployeeId, name: EmployeeName, kind: EmployeeKind) -> Self {
        Self {
            id,
            name,
            kind,
            available: true,
            delay_count: 0,
            completed_tasks: Vec::new(),
        }
    }

    /// Returns the employee file number.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee name.
    #[must_use]
    pub const fn name(&self) -> &EmployeeName {
        &self.name
    }

    /// Returns the billing variant.
    #[must_use]
    pub const fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Returns `true` when the employee is not assigned to any task.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns how many tasks this employee has let run late.
    #[must_use]
    pub const fn delay_count(&self) -> u32 {
        self.delay_count
    }

    /// Returns the titles of completed tasks in completion order.
    #[must_use]
    pub fn completed_tasks(&self) -> &[String] {
        &self.completed_tasks
    }

    /// Returns the staff category, or `None` for contractors.
    #[must_use]
    pub const fn category(&self) -> Option<StaffCategory> {
        match self.kind {
            EmployeeKind::Staff { category, .. } => Some(category),
            EmployeeKind::Contractor { .. } => None,
        }
    }

    /// Returns the hourly or daily rate, depending on the variant.
    #[must_use]
    pub const fn rate(&self) -> Rate {
        match self.kind {
            EmployeeKind::Contractor { hourly_rate } => hourly_rate,
            EmployeeKind::Staff { daily_rate, .. } => daily_rate,
        }
    }

    /// Marks the employee as assigned.
    pub const fn assign(&mut self) {
        self.available = false;
    }

    /// Marks the employee as available again.
    pub const fn release(&mut self) {
        self.available = true;
    }

    /// Counts one more late task against this employee.
    pub const fn increment_delays(&mut self) {
        self.delay_count = self.delay_count.saturating_add(1);
    }

    /// Appends a task title to the completed-task history.
    pub fn record_completed_task(&mut self, title: impl Into<String>) {
        self.completed_tasks.push(title.into());
    }

    /// Replaces the hourly or daily rate.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::InvalidRate`] when the value is
    /// negative or not finite; the current rate is kept.
    pub fn set_rate(&mut self, value: f64) -> Result<(), EmployeeDomainError> {
        let rate = Rate::new(value)?;
        match &mut self.kind {
            EmployeeKind::Contractor { hourly_rate } => *hourly_rate = rate,
            EmployeeKind::Staff { daily_rate, .. } => *daily_rate = rate,
        }
        Ok(())
    }

    /// Moves a staff employee to another category.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::InvalidCategory`] for unknown tiers
    /// and [`EmployeeDomainError::NotStaff`] for contractors.
    pub fn set_category(&mut self, value: &str) -> Result<(), EmployeeDomainError> {
        let tier = StaffCategory::try_from(value)?;
        match &mut self.kind {
            EmployeeKind::Staff { category, .. } => {
                *category = tier;
                Ok(())
            }
            EmployeeKind::Contractor { .. } => Err(EmployeeDomainError::NotStaff(self.id)),
        }
    }

    /// Prices a task under the standard [`BillingPolicy`].
    #[must_use]
    pub fn task_cost(&self, duration_days: f64, had_delay: bool) -> f64 {
        self.task_cost_under(&BillingPolicy::standard(), duration_days, had_delay)
    }

    /// Prices a task of `duration_days` (delays included).
    ///
    /// Contractors bill `days * hours_per_day * hourly_rate` regardless of
    /// delay. Staff bill every started day at the daily rate, multiplied by
    /// the punctuality bonus when the task had no delay.
    #[must_use]
    pub fn task_cost_under(
        &self,
        policy: &BillingPolicy,
        duration_days: f64,
        had_delay: bool,
    ) -> f64 {
        match self.kind {
            EmployeeKind::Contractor { hourly_rate } => {
                duration_days * policy.hours_per_day * hourly_rate.value()
            }
            EmployeeKind::Staff { daily_rate, .. } => {
                let base = duration_days.ceil() * daily_rate.value();
                if had_delay {
                    base
                } else {
                    base * policy.punctuality_bonus
                }
            }
        }
    }

    /// Returns the days that would be billed for `duration_days`.
    ///
    /// Staff round up to whole days; contractors bill the exact duration.
    #[must_use]
    pub fn billable_days(&self, duration_days: f64) -> f64 {
        match self.kind {
            EmployeeKind::Contractor { .. } => duration_days,
            EmployeeKind::Staff { .. } => duration_days.ceil(),
        }
    }

    /// Returns the working hours represented by `duration_days`.
    #[must_use]
    pub fn working_hours(&self, duration_days: f64) -> f64 {
        duration_days * BillingPolicy::standard().hours_per_day
    }

    /// Returns the bonus a staff employee earns for finishing on time.
    ///
    /// Always zero for contractors.
    #[must_use]
    pub fn punctuality_bonus(&self, duration_days: f64) -> f64 {
        let policy = BillingPolicy::standard();
        match self.kind {
            EmployeeKind::Contractor { .. } => 0.0,
            EmployeeKind::Staff { daily_rate, .. } => {
                duration_days.ceil() * daily_rate.value() * (policy.punctuality_bonus - 1.0)
            }
        }
    }

    /// Quotes a task assuming it finishes without delay.
    #[must_use]
    pub fn estimate_cost(&self, duration_days: f64) -> f64 {
        self.task_cost(duration_days, false)
    }
}
