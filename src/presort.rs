use std::cmp::Ordering;

/// Existing order of a slice, as found by [`classify`](crate::classify).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Presorted {
    /// Every adjacent pair compared equal. Also the result for slices shorter than two elements.
    AllEqual,
    /// No adjacent pair is descending, at least one is ascending.
    NonStrictAscending,
    /// No adjacent pair is ascending, at least one is descending.
    NonStrictDescending,
    /// Both ascending and descending adjacent pairs exist.
    Mixed,
}

/// Scans the adjacent pairs of `v` once, stopping as soon as the slice is known to be `Mixed`.
pub(crate) fn classify<T, F>(v: &[T], cmp: &mut F) -> Presorted
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ascending_pairs = 0usize;
    let mut descending_pairs = 0usize;

    for pair in v.windows(2) {
        match cmp(&pair[0], &pair[1]) {
            Ordering::Less => ascending_pairs += 1,
            Ordering::Greater => descending_pairs += 1,
            Ordering::Equal => {}
        }

        if ascending_pairs != 0 && descending_pairs != 0 {
            return Presorted::Mixed;
        }
    }

    match (ascending_pairs, descending_pairs) {
        (0, 0) => Presorted::AllEqual,
        (_, 0) => Presorted::NonStrictAscending,
        (0, _) => Presorted::NonStrictDescending,
        _ => Presorted::Mixed,
    }
}
