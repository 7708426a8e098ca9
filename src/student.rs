use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;

pub const MIN_GPA: f64 = 0.0;
pub const MAX_GPA: f64 = 4.0;

/// Immutable student record.
///
/// Validated on construction, so every `Student` in existence has a GPA in `[0.0, 4.0]` and a
/// non-negative credit count. The natural order is GPA descending, then credits descending, it
/// exists for callers and is never consulted by the sorters.
#[derive(Copy, Clone, Debug)]
pub struct Student {
    gpa: f64,
    credits_taken: u32,
}

impl Student {
    pub fn new(gpa: f64, credits_taken: i64) -> Result<Self, Error> {
        // NaN fails the range check as well.
        if !(MIN_GPA..=MAX_GPA).contains(&gpa) {
            return Err(Error::GpaOutOfRange(gpa));
        }

        let credits_taken =
            u32::try_from(credits_taken).map_err(|_| Error::CreditsOutOfRange(credits_taken))?;

        Ok(Self { gpa, credits_taken })
    }

    #[inline]
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    #[inline]
    pub fn credits_taken(&self) -> u32 {
        self.credits_taken
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.gpa.total_cmp(&other.gpa) == Ordering::Equal
            && self.credits_taken == other.credits_taken
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Consistent with `total_cmp` based equality.
        self.gpa.to_bits().hash(state);
        self.credits_taken.hash(state);
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .gpa
            .total_cmp(&self.gpa)
            .then_with(|| other.credits_taken.cmp(&self.credits_taken))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(GPA: {:.2}, Credits: {})", self.gpa, self.credits_taken)
    }
}
