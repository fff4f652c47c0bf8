//! Co-sorts a dependent array, then re-sorts without it.
//!
//! Run with `cargo run --example cosort`.

use anyhow::Result;
use pdqsort::prelude::*;
use std::cmp::Ordering;

fn ascending(a: &f64, b: &f64) -> Ordering {
    if a < b { Ordering::Less } else { Ordering::Greater }
}

fn descending(a: &f64, b: &f64) -> Ordering {
    if a < b { Ordering::Greater } else { Ordering::Less }
}

fn print_row(title: &str, values: &[f64]) {
    println!("{title}");
    let row: Vec<String> = values.iter().map(|v| format!("{v:.6}")).collect();
    println!("{}", row.join("\t"));
}

fn main() -> Result<()> {
    let mut data = [0.0, 1.0, 10.0, 5.0];
    let mut data2 = [0.0, 1.0, 10.0, 5.0];

    // Mirror every swap into data2.
    pdqsort_cosort_by(&mut data, &mut data2, ascending)?;
    print_row("Sorted ascending", &data);
    print_row("Co-sorted ascending", &data2);

    // Default exchange: data2 stays as it was.
    pdqsort_with(&mut data, descending, Swap, &Config::default());
    print_row("Sorted descending", &data);
    print_row("Not sorted again, was already sorted ascending before", &data2);

    anyhow::ensure!(data == [10.0, 5.0, 1.0, 0.0], "descending sort failed: {data:?}");
    anyhow::ensure!(data2 == [0.0, 1.0, 5.0, 10.0], "co-sort failed: {data2:?}");
    Ok(())
}
