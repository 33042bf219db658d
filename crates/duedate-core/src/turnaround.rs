//! Turnaround value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A caller-supplied count of working hours to add to a submission.
///
/// The carrier itself is unvalidated: positivity is one of the calculator's
/// ordered preconditions and is checked after the submission checks, so an
/// out-of-range value must still be representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnaroundHours(i64);

impl TurnaroundHours {
    /// Creates a new turnaround value.
    #[must_use]
    pub const fn new(hours: i64) -> Self {
        Self(hours)
    }

    /// Raw hour count.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the requested count is a valid (positive) turnaround.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for TurnaroundHours {
    fn from(hours: i64) -> Self {
        Self::new(hours)
    }
}

impl fmt::Display for TurnaroundHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
