#![no_main]

use libfuzzer_sys::fuzz_target;

use pingpong_sort_fuzz::{check_sorted, direction_and_values};

fuzz_target!(|data: &[u8]| {
    let (ascending, original) = direction_and_values(data);

    let mut v = original.clone();
    pingpong_sort::sort(&mut v, ascending);
    check_sorted(&original, &v, ascending);

    // Bytes have far fewer distinct values, which stresses runs of equal elements.
    let mut bytes = data.to_vec();
    pingpong_sort::sort(&mut bytes, !ascending);
    if ascending {
        assert!(bytes.windows(2).all(|w| w[0] >= w[1]));
    } else {
        assert!(bytes.windows(2).all(|w| w[0] <= w[1]));
    }
});
