mod compare;
mod examples;
mod measure;

use std::env;
use std::process;

use sort_test_tools::patterns;

const USAGE: &str = "usage: sort-demo <examples|compare> [len]

  examples  sorts small arrays of floats, strings and integers and prints them (default len 6)
  compare   counts comparisons and time against the standard library sort (default len 10000)

Set OVERRIDE_SEED=<u64> to repeat a run.";

fn main() {
    let args = env::args().collect::<Vec<_>>();

    let len = match args.get(2).map(|len| len.parse::<usize>()) {
        None => None,
        Some(Ok(len)) if len > 0 => Some(len),
        _ => exit_with_usage(),
    };

    let (run, default_len): (fn(usize), usize) = match args.get(1).map(String::as_str) {
        Some("examples") => (examples::run_examples, 6),
        Some("compare") => (compare::run_compare, 10_000),
        _ => exit_with_usage(),
    };

    println!("Seed: {}", patterns::random_init_seed());
    run(len.unwrap_or(default_len));
}

fn exit_with_usage() -> ! {
    eprintln!("{USAGE}");
    process::exit(1);
}
