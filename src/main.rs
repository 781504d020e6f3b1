use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use collision_cleaner_demo::crash_record::{CrashRecord, COLUMN_NAMES};
use collision_cleaner_demo::row_filter::{self, FilterConfig};
use collision_cleaner_demo::{projection, report};

#[derive(Parser)]
#[command(name = "collision-cleaner-demo")]
#[command(about = "Clean the Motor Vehicle Collisions crash CSV", long_about = None)]
struct Cli {
    /// Path to Motor_Vehicle_Collisions_-_Crashes.csv
    csv: PathBuf,

    /// Crash years to keep
    #[arg(long, value_delimiter = ',', default_values_t = [2021, 2022, 2023, 2024, 2025])]
    years: Vec<i32>,

    /// Columns to keep in the cleaned output, in output order
    #[arg(long, value_delimiter = ',', default_values_t = COLUMN_NAMES.iter().map(ToString::to_string))]
    columns: Vec<String>,

    /// Number of sample rows to print
    #[arg(long, default_value_t = 10)]
    head: usize,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let start = Instant::now();

    let config = FilterConfig {
        included_years: cli.years.iter().copied().collect::<HashSet<i32>>(),
        required_columns: cli.columns.clone(),
    };

    let dataset = CrashRecord::load_csv(&cli.csv.to_string_lossy())?;
    report::print_raw_summary(&dataset, cli.head);

    let (kept, tally) = row_filter::filter(dataset.records, &config)?;
    report::print_filter_tally(&tally);

    let by_month = report::monthly_counts(&kept, &config.included_years)?;
    report::print_monthly_counts(&by_month);

    let cleaned = projection::project(&kept, &config.required_columns)?;
    report::print_cleaned(&cleaned, cli.head);

    let duration = start.elapsed();
    let total_records = tally.num_input;
    println!("Duration: {duration:?}");
    let records_per_second = total_records as f64 / duration.as_secs_f64();
    println!("Records Per Second: {records_per_second:.0}");
    Ok(())
}
