//! Wall-clock measurement of a single run, precise enough for the millisecond tables the demo
//! prints.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(mut test_fn: impl FnMut()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Milliseconds with sub-millisecond precision, small inputs finish well below one.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Formats `val` with `,` between groups of three digits, e.g. `123,600`.
pub fn with_thousands_separators(val: u64) -> String {
    let digits = val.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
