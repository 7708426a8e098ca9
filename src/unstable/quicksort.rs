//! Recursive quicksort with median-of-three pivot selection.
//!
//! In-place, *O*(*n* \* log(*n*)) on average and *O*(*n*^2) in the worst case, for example on
//! inputs made of a few heavily repeated keys. Recursion depth stays at *O*(log(*n*)). Unstable.

use std::cmp::Ordering;
use std::mem;

use crate::Student;

sort_impl!("quicksort_median3_unstable");

#[inline]
pub fn sort_by<F>(v: &mut [Student], mut compare: F)
where
    F: FnMut(&Student, &Student) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<F>(mut v: &mut [Student], is_less: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        if len == 2 {
            if is_less(&v[1], &v[0]) {
                v.swap(0, 1);
            }
            return;
        }

        let pivot_pos = len - 2;
        median_of_three(v, is_less);

        // Partition everything strictly between the first element and the pivot. The first
        // element is known to be <= pivot and the last one >= pivot, so neither needs to move.
        let lt_count = {
            let (head, pivot) = v.split_at_mut(pivot_pos);
            hoare_partition(&mut head[1..], &pivot[0], is_less)
        };

        let mid = lt_count + 1;
        v.swap(mid, pivot_pos);

        // Recurse into the shorter side and continue with the longer one, this keeps the stack
        // depth at log(n) even when duplicates make every split lopsided.
        let (left, right) = mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Orders the first, middle and last element and moves the median of the three to `len - 2`.
fn median_of_three<F>(v: &mut [Student], is_less: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    let last = v.len() - 1;
    let mid = last / 2;

    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if is_less(&v[last], &v[0]) {
        v.swap(0, last);
    }
    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);
    }

    v.swap(mid, last - 1);
}

/// Moves all elements less than `pivot` to the front and returns how many there are.
fn hoare_partition<F>(v: &mut [Student], pivot: &Student, is_less: &mut F) -> usize
where
    F: FnMut(&Student, &Student) -> bool,
{
    let mut l = 0;
    let mut r = v.len();
    loop {
        // Find the first element not less than the pivot.
        while l < r && is_less(&v[l], pivot) {
            l += 1;
        }

        // Find the last element less than the pivot.
        while l < r && !is_less(&v[r - 1], pivot) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements.
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    l
}
