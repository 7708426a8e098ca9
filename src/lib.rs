//! Sorting engine for student records under two fixed total orders, plus the two-pass scanner
//! that derives a composite median student from them.

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_by<F>(arr: &mut [crate::Student], compare: F)
            where
                F: FnMut(&crate::Student, &crate::Student) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

/// A sorting strategy. Implementations only ever see the injected comparison, never
/// [`Student`]'s natural order.
pub trait Sort {
    fn name() -> String;

    fn sort_by<F>(arr: &mut [Student], compare: F)
    where
        F: FnMut(&Student, &Student) -> Ordering;
}

pub mod algorithm;
pub mod error;
pub mod input;
pub mod measure;
pub mod order;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod sorter;
pub mod stable;
pub mod student;
pub mod unstable;

pub use algorithm::Algorithm;
pub use error::{Error, InputError};
pub use order::SortOrder;
pub use scanner::StudentScanner;
pub use sorter::Sorter;
pub use student::Student;
