//! Ping-pong sort, an in-place single pivot quicksort that moves elements instead of swapping them.
//!
//! The partition step moves the pivot out of the slice, which leaves one slot without a logical
//! owner. Elements found on the wrong side are moved into that slot, and the slot they came from
//! becomes the next write target. Scanning alternates between the high and the low end each time
//! an element is relocated, which is where the name comes from. Every relocation is a single move,
//! compared to the three moves of a swap.

use std::cmp::Ordering;
use std::mem;

mod observe;
mod presort;
mod quicksort;

pub use observe::{CompCounter, CompareObserver};
pub use presort::Presorted;

/// Sorts the slice in ascending or descending order, but might not preserve the order of equal
/// elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) expected on inputs with few repeated values. Slices that are already
/// sorted in either direction, or that only contain equal elements, are detected with *n* - 1
/// comparisons and handled in *O*(*n*).
///
/// Elements equal to the pivot are never moved by the partition step, so a range holding a long
/// run of equal values is only shrunk by one element per partition. The worst case is
/// *O*(*n*<sup>2</sup>), reached by inputs with few distinct values that are not all equal, e.g.
/// random values in `0..2`.
///
/// # Examples
///
/// ```
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
///
/// pingpong_sort::sort(&mut v, true);
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
///
/// pingpong_sort::sort(&mut v, false);
/// assert_eq!(v, [9, 6, 5, 4, 3, 2, 1, 1]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T], ascending: bool)
where
    T: Ord,
{
    sort_observed(v, ascending, &mut ());
}

/// Same as [`sort`], but reports every comparison, its operands and its result to `observer`.
///
/// The observer only watches, the order is always decided by `T::cmp`. If the observer panics the
/// panic propagates like a panicking `Ord` implementation would, see [`sort`].
///
/// # Examples
///
/// ```
/// use pingpong_sort::CompCounter;
///
/// let mut v = [1, 2, 3, 4, 5];
/// let mut counter = CompCounter::new();
///
/// pingpong_sort::sort_observed(&mut v, false, &mut counter);
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// assert_eq!(counter.count(), 4);
/// ```
#[inline]
pub fn sort_observed<T, O>(v: &mut [T], ascending: bool, observer: &mut O)
where
    T: Ord,
    O: CompareObserver<T>,
{
    let mut cmp = |a: &T, b: &T| -> Ordering {
        let result = a.cmp(b);
        observer.on_compare(a, b, result);
        result
    };

    pingpong_sort(v, ascending, &mut cmp);
}

/// Sorts `v` if there is one, and does nothing otherwise.
///
/// Callers holding an optional slice can use this instead of matching first. An absent slice is
/// not an error.
#[inline]
pub fn sort_option<T>(v: Option<&mut [T]>, ascending: bool)
where
    T: Ord,
{
    if let Some(v) = v {
        sort(v, ascending);
    }
}

/// Classifies the existing order of `v` with at most *n* - 1 comparisons.
///
/// See [`Presorted`] for the meaning of the variants.
#[inline]
pub fn classify<T>(v: &[T]) -> Presorted
where
    T: Ord,
{
    presort::classify(v, &mut |a: &T, b: &T| a.cmp(b))
}

/// Reverses the order of the elements in `v`, in place.
pub fn reverse<T>(v: &mut [T]) {
    let len = v.len();

    for i in 0..len / 2 {
        v.swap(i, len - 1 - i);
    }
}

// --- IMPL ---

fn pingpong_sort<T, F>(v: &mut [T], ascending: bool, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    if v.len() < 2 {
        return;
    }

    // Sorting always happens in ascending order, descending requests reverse once at the end.
    match presort::classify(v, cmp) {
        Presorted::AllEqual => {}
        Presorted::NonStrictAscending => {
            if !ascending {
                reverse(v);
            }
        }
        Presorted::NonStrictDescending => {
            if ascending {
                reverse(v);
            }
        }
        Presorted::Mixed => {
            quicksort::quicksort(v, cmp);

            if !ascending {
                reverse(v);
            }
        }
    }
}
