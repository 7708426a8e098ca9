//! Top-down merge sort.
//!
//! Recursively halves the slice, sorts both halves and merges them back through a single scratch
//! buffer that is allocated once per sort call and sized to the whole input. *O*(*n* \* log(*n*))
//! comparisons, *O*(*n*) auxiliary memory. On ties the element from the left run is taken first,
//! which makes the sort stable.

use std::cmp::Ordering;

use crate::Student;

sort_impl!("merge_sort_stable");

#[inline]
pub fn sort_by<F>(v: &mut [Student], mut compare: F)
where
    F: FnMut(&Student, &Student) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    let mut buf = v.to_vec();
    merge_sort(v, &mut buf, &mut |a, b| compare(a, b) != Ordering::Greater);
}

fn merge_sort<F>(v: &mut [Student], buf: &mut [Student], is_less_eq: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len - len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);
        merge_sort(left, buf_left, is_less_eq);
        merge_sort(right, buf_right, is_less_eq);
    }

    merge(v, mid, buf, is_less_eq);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`. `buf` must be at least as long as `v`.
fn merge<F>(v: &mut [Student], mid: usize, buf: &mut [Student], is_less_eq: &mut F)
where
    F: FnMut(&Student, &Student) -> bool,
{
    let len = v.len();
    let buf = &mut buf[..len];
    buf.copy_from_slice(v);

    let mut left = 0;
    let mut right = mid;
    let mut dest = 0;

    while left < mid && right < len {
        if is_less_eq(&buf[left], &buf[right]) {
            v[dest] = buf[left];
            left += 1;
        } else {
            v[dest] = buf[right];
            right += 1;
        }
        dest += 1;
    }

    // Whatever remains of the right run is already in place.
    let rest = mid - left;
    v[dest..dest + rest].copy_from_slice(&buf[left..mid]);
}
