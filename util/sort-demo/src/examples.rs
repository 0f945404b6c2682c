use std::cmp::Ordering;
use std::fmt;

use sort_test_tools::patterns;

/// `f64` ordered by [`f64::total_cmp`], so it can be sorted like any other `Ord` type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TotalF64(pub f64);

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for TotalF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps the `.0` on whole numbers.
        write!(f, "{:?}", self.0)
    }
}

pub fn run_examples(len: usize) {
    // Ascending input sorted descending takes the presorted path.
    let initially_ascending = true;
    let sort_ascending = false;

    println!("\nSorting ordered floats.");
    let floats = patterns::ordered(len, initially_ascending)
        .into_iter()
        .map(|val| TotalF64(val as f64))
        .collect::<Vec<_>>();
    sort_and_print(floats, sort_ascending);

    println!("\nSorting strings.");
    let names = ["Tom", "Dick", "Harry", "Mary", "Jane", "Sue"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    sort_and_print(names, sort_ascending);

    println!("\nSorting ordered integers.");
    let ints = patterns::ordered(len, initially_ascending)
        .into_iter()
        .map(i64::from)
        .collect::<Vec<_>>();
    sort_and_print(ints, sort_ascending);

    println!("\nSorting integers ordered the other way round.");
    let ints = patterns::ordered(len, !initially_ascending)
        .into_iter()
        .map(i64::from)
        .collect::<Vec<_>>();
    sort_and_print(ints, !sort_ascending);

    println!("\nSorting random floats.");
    let floats = patterns::random_f64(len)
        .into_iter()
        .map(TotalF64)
        .collect::<Vec<_>>();
    sort_and_print(floats, sort_ascending);
}

fn sort_and_print<T: Ord + fmt::Display>(mut v: Vec<T>, ascending: bool) {
    println!("Before sorting: {}", join(&v));

    pingpong_sort::sort(&mut v, ascending);

    println!(
        "After sorting {}: {}",
        if ascending { "ascending" } else { "descending" },
        join(&v)
    );
}

fn join<T: fmt::Display>(v: &[T]) -> String {
    v.iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
