//! Insertion sort.

use std::cmp::Ordering;

use crate::Student;

sort_impl!("insertion_sort_stable");

#[inline]
pub fn sort_by<F>(v: &mut [Student], mut compare: F)
where
    F: FnMut(&Student, &Student) -> Ordering,
{
    // Only strictly greater elements are shifted, which is what keeps the sort stable.
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

fn insertion_sort<F>(v: &mut [Student], is_greater: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_greater);
    }
}

/// Inserts the last element of `v` into the sorted prefix `v[..v.len() - 1]`.
fn insert_tail<F>(v: &mut [Student], is_greater: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    let key = v[v.len() - 1];
    let mut hole = v.len() - 1;

    while hole > 0 && is_greater(&v[hole - 1], &key) {
        v[hole] = v[hole - 1];
        hole -= 1;
    }

    v[hole] = key;
}
