//! Straight selection sort.
//!
//! *O*(*n*^2) comparisons regardless of input, in-place. Swapping the minimum across the unsorted
//! suffix can jump it over equal elements, so this sort is unstable.

use std::cmp::Ordering;

use crate::Student;

sort_impl!("selection_sort_unstable");

#[inline]
pub fn sort_by<F>(v: &mut [Student], mut compare: F)
where
    F: FnMut(&Student, &Student) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<F>(v: &mut [Student], is_less: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..(len - 1) {
        let mut min_idx = i;

        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }
}
