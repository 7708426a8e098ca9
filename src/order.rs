use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;
use crate::student::Student;

/// The two total orders a sorter can be configured with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Order 0: GPA descending, ties broken by credits descending.
    Gpa,
    /// Order 1: credits ascending, ties broken by GPA descending.
    Credits,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Gpa, SortOrder::Credits];

    pub fn from_index(order: i64) -> Result<Self, Error> {
        match order {
            0 => Ok(SortOrder::Gpa),
            1 => Ok(SortOrder::Credits),
            _ => Err(Error::UnknownOrder(order)),
        }
    }

    pub fn index(self) -> i64 {
        match self {
            SortOrder::Gpa => 0,
            SortOrder::Credits => 1,
        }
    }

    #[inline]
    pub fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortOrder::Gpa => by_gpa(a, b),
            SortOrder::Credits => by_credits(a, b),
        }
    }

    /// Plain function pointer for the order, cheap to hand to any strategy.
    pub fn comparator(self) -> fn(&Student, &Student) -> Ordering {
        match self {
            SortOrder::Gpa => by_gpa,
            SortOrder::Credits => by_credits,
        }
    }
}

impl TryFrom<i64> for SortOrder {
    type Error = Error;

    fn try_from(order: i64) -> Result<Self, Self::Error> {
        SortOrder::from_index(order)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Gpa => f.write_str("gpa_desc"),
            SortOrder::Credits => f.write_str("credits_asc"),
        }
    }
}

fn by_gpa(a: &Student, b: &Student) -> Ordering {
    b.gpa()
        .total_cmp(&a.gpa())
        .then_with(|| b.credits_taken().cmp(&a.credits_taken()))
}

fn by_credits(a: &Student, b: &Student) -> Ordering {
    a.credits_taken()
        .cmp(&b.credits_taken())
        .then_with(|| b.gpa().total_cmp(&a.gpa()))
}
