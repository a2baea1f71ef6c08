//! In-memory roster.

use std::collections::BTreeMap;

use crate::employee::{
    domain::{Employee, EmployeeId},
    ports::{Roster, RosterError, RosterResult},
};

/// Roster backed by an ordered map, so listings come out by file number.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    employees: BTreeMap<EmployeeId, Employee>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of enrolled employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` when nobody is enrolled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Roster for InMemoryRoster {
    fn enrol(&mut self, employee: Employee) -> RosterResult<()> {
        if self.employees.contains_key(&employee.id()) {
            return Err(RosterError::DuplicateEmployee(employee.id()));
        }
        self.employees.insert(employee.id(), employee);
        Ok(())
    }

    fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    fn list(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }
}

impl FromIterator<Employee> for InMemoryRoster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter
                .into_iter()
                .map(|employee| (employee.id(), employee))
                .collect(),
        }
    }
}
