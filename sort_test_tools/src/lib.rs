use std::cmp::Ordering;

/// A sort implementation under test.
///
/// `sort_observed` must call `observer` once for every comparison it performs, after performing
/// it, with the operands and the result. A panicking observer must be treated like a panicking
/// `Ord` implementation.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T], ascending: bool)
    where
        T: Ord;

    fn sort_observed<T, F>(v: &mut [T], ascending: bool, observer: F)
    where
        T: Ord,
        F: FnMut(&T, &T, Ordering);
}

pub mod patterns;
pub mod types;
