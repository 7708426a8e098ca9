use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::student::Student;
use crate::{stable, unstable, Sort};

/// Closed set of sorting strategies the scanner can drive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::SelectionSort => "SelectionSort",
            Algorithm::InsertionSort => "InsertionSort",
            Algorithm::MergeSort => "MergeSort",
            Algorithm::QuickSort => "QuickSort",
        }
    }

    /// Name of the backing strategy, see [`Sort::name`].
    pub fn sort_name(self) -> String {
        match self {
            Algorithm::SelectionSort => unstable::selection::SortImpl::name(),
            Algorithm::InsertionSort => stable::insertion::SortImpl::name(),
            Algorithm::MergeSort => stable::merge::SortImpl::name(),
            Algorithm::QuickSort => unstable::quicksort::SortImpl::name(),
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::InsertionSort | Algorithm::MergeSort)
    }

    #[inline]
    pub fn sort_by<F>(self, v: &mut [Student], compare: F)
    where
        F: FnMut(&Student, &Student) -> Ordering,
    {
        match self {
            Algorithm::SelectionSort => unstable::selection::sort_by(v, compare),
            Algorithm::InsertionSort => stable::insertion::sort_by(v, compare),
            Algorithm::MergeSort => stable::merge::sort_by(v, compare),
            Algorithm::QuickSort => unstable::quicksort::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width and alignment flags work in the stats line.
        f.pad(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selectionsort" | "selection" => Ok(Algorithm::SelectionSort),
            "insertionsort" | "insertion" => Ok(Algorithm::InsertionSort),
            "mergesort" | "merge" => Ok(Algorithm::MergeSort),
            "quicksort" | "quick" => Ok(Algorithm::QuickSort),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<usize> for Algorithm {
    type Error = Error;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .get(idx)
            .copied()
            .ok_or_else(|| Error::UnknownAlgorithm(idx.to_string()))
    }
}
