//! Sequential identifier issuing.

use serde::{Deserialize, Serialize};

/// First value issued by a fresh or reset sequence.
const FIRST_ID: u32 = 1;

/// Issues strictly increasing numeric identifiers.
///
/// A sequence is owned by whichever registry creates entities; constructors
/// borrow it mutably and only draw a value once their input has been
/// validated, so rejected constructions never consume an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Creates a sequence whose first issued value is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: FIRST_ID }
    }

    /// Returns the value the next call to [`Self::issue`] will yield.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }

    /// Issues the next identifier and advances the sequence.
    pub const fn issue(&mut self) -> u32 {
        let issued = self.next;
        self.next = self.next.saturating_add(1);
        issued
    }

    /// Rewinds the sequence so the next issued value is `1` again.
    pub const fn reset(&mut self) {
        self.next = FIRST_ID;
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
