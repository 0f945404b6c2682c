use pingpong_sort::CompCounter;
use sort_test_tools::patterns;

use crate::measure::{as_millis_f64, measure_duration, with_thousands_separators};

struct RunResult {
    len: usize,
    comparisons: u64,
    millis: f64,
}

/// Compares the standard library unstable sort with the ping-pong sort on `len` random values in
/// `0..2 * len`, on the same values already sorted, and on them sorted the opposite way.
pub fn run_compare(len: usize) {
    let max_val = i32::try_from(len.saturating_mul(2)).unwrap_or(i32::MAX);
    let random = patterns::random_uniform(len, 0..max_val);

    let mut sorted = random.clone();
    sorted.sort_unstable();

    let mut sorted_opposite = sorted.clone();
    sorted_opposite.reverse();

    for (scenario, input) in [
        ("random input", &random),
        ("already sorted", &sorted),
        ("sorted the other way", &sorted_opposite),
    ] {
        println!("\n{scenario}:");
        println!(
            "{:<24}{:>12}{:>14}{:>12}",
            "sort", "elements", "comparisons", "ms"
        );

        print_row("rust_std_unstable", &run_std(input));
        print_row("rust_pingpong_unstable", &run_pingpong(input));
    }
}

fn run_std(input: &[i32]) -> RunResult {
    let mut v = input.to_vec();
    let mut comparisons = 0;

    let duration = measure_duration(|| {
        v.sort_unstable_by(|a, b| {
            comparisons += 1;
            a.cmp(b)
        })
    });

    debug_assert!(v.windows(2).all(|w| w[0] <= w[1]));

    RunResult {
        len: v.len(),
        comparisons,
        millis: as_millis_f64(duration),
    }
}

fn run_pingpong(input: &[i32]) -> RunResult {
    let mut v = input.to_vec();
    let mut counter = CompCounter::new();

    let duration = measure_duration(|| pingpong_sort::sort_observed(&mut v, true, &mut counter));

    debug_assert!(v.windows(2).all(|w| w[0] <= w[1]));

    RunResult {
        len: v.len(),
        comparisons: counter.count(),
        millis: as_millis_f64(duration),
    }
}

fn print_row(name: &str, result: &RunResult) {
    println!(
        "{:<24}{:>12}{:>14}{:>12.3}",
        name,
        with_thousands_separators(result.len as u64),
        with_thousands_separators(result.comparisons),
        result.millis
    );
}
