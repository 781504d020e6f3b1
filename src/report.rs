use std::collections::{BTreeMap, HashSet};

use crate::crash_record::{CrashRecord, RawDataset};
use crate::error::Result;
use crate::projection::ProjectedTable;
use crate::row_filter::FilterTally;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Read-only diagnostics printed over the raw dataset, before filtering.
pub fn print_raw_summary(dataset: &RawDataset, head: usize) {
    println!(
        "Shape: ({}, {})",
        dataset.records.len(),
        dataset.source_columns.len()
    );
    println!("Columns: {:?}", dataset.source_columns);
    println!("First {head} rows:");
    for record in dataset.records.iter().take(head) {
        println!("  {record:?}");
    }
}

pub fn print_filter_tally(tally: &FilterTally) {
    println!("Input Records: {:?}", tally.num_input);
    println!("Kept Records: {:?}", tally.num_kept);
    println!("Dropped (year): {:?}", tally.dropped_year);
    println!("Dropped (contributing factor): {:?}", tally.dropped_factor);
    println!("Dropped (coordinates): {:?}", tally.dropped_coords);
    println!("Dropped (vehicle type code): {:?}", tally.dropped_vehicle);
}

/// Collision counts per (year, month) over the given records, zero-filled
/// for every month of every included year.
pub fn monthly_counts(
    records: &[CrashRecord],
    included_years: &HashSet<i32>,
) -> Result<BTreeMap<i32, [u64; 12]>> {
    let mut counts: BTreeMap<i32, [u64; 12]> = included_years
        .iter()
        .map(|&year| (year, [0u64; 12]))
        .collect();
    for record in records {
        let (year, month) = record.year_month()?;
        if let Some(by_month) = counts.get_mut(&year) {
            by_month[(month - 1) as usize] += 1;
        }
    }
    Ok(counts)
}

pub fn print_monthly_counts(counts: &BTreeMap<i32, [u64; 12]>) {
    println!("Collisions by month:");
    println!("      {}", MONTH_LABELS.join("   "));
    for (year, by_month) in counts {
        let cells: Vec<String> = by_month.iter().map(|c| format!("{c:>5}")).collect();
        println!("{year}: {}", cells.join(" "));
    }
}

pub fn print_cleaned(table: &ProjectedTable, head: usize) {
    let (rows, cols) = table.shape();
    println!("Cleaned shape: ({rows}, {cols})");
    println!("Null values per column:");
    for (column, nulls) in table.columns.iter().zip(table.null_counts()) {
        println!("  {column}: {nulls}");
    }
    println!("Cleaned data ({} of {rows} rows):", table.head(head).len());
    for row in table.head(head) {
        let cells: Vec<&str> = row
            .iter()
            .map(|v| v.as_deref().unwrap_or("null"))
            .collect();
        println!("  {}", cells.join(", "));
    }
}
