/// Splits fuzzer input into a sort direction and the values to sort.
///
/// The lowest bit of the first byte picks the direction, the remaining bytes are read as
/// little-endian `i32`. Trailing bytes that don't fill a value are ignored.
pub fn direction_and_values(data: &[u8]) -> (bool, Vec<i32>) {
    let Some((first, rest)) = data.split_first() else {
        return (true, Vec::new());
    };

    let values = rest
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    (first & 1 == 0, values)
}

/// Checks `sorted` against the standard library result for `original`.
pub fn check_sorted(original: &[i32], sorted: &[i32], ascending: bool) {
    let mut expected = original.to_vec();
    expected.sort_unstable();
    if !ascending {
        expected.reverse();
    }

    assert_eq!(expected, sorted);
}
