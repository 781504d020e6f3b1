use std::collections::HashSet;
use std::ops::AddAssign;

use crate::crash_record::CrashRecord;
use crate::error::Result;

/// Sentinel meaning "no factor recorded" in the contributing-factor columns.
const UNSPECIFIED: &str = "Unspecified";

pub struct FilterConfig {
    pub included_years: HashSet<i32>,
    pub required_columns: Vec<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FilterTally {
    pub num_input: usize,
    pub num_kept: usize,
    pub dropped_year: usize,
    pub dropped_factor: usize,
    pub dropped_coords: usize,
    pub dropped_vehicle: usize,
}

impl FilterTally {
    pub fn new() -> FilterTally {
        FilterTally::default()
    }
}

impl AddAssign for FilterTally {
    fn add_assign(&mut self, other: Self) {
        self.num_input += other.num_input;
        self.num_kept += other.num_kept;
        self.dropped_year += other.dropped_year;
        self.dropped_factor += other.dropped_factor;
        self.dropped_coords += other.dropped_coords;
        self.dropped_vehicle += other.dropped_vehicle;
    }
}

fn factor_valid(factor: Option<&str>) -> bool {
    match factor {
        Some(f) => f != UNSPECIFIED,
        None => false,
    }
}

// The source data spells its not-available placeholder both "NaN" and "Nan",
// so the comparison is case-insensitive.
fn vehicle_code_valid(code: Option<&str>) -> bool {
    match code {
        Some(c) => {
            let lower = c.to_ascii_lowercase();
            lower != "nan" && lower != "na"
        }
        None => false,
    }
}

/// Keeps exactly the records that satisfy all four criteria:
/// derived year in the included set, at least one real contributing factor,
/// both coordinates present, and at least one real vehicle type code.
/// A failing crash date aborts the run rather than dropping the row.
pub fn filter(
    records: Vec<CrashRecord>,
    config: &FilterConfig,
) -> Result<(Vec<CrashRecord>, FilterTally)> {
    let mut tally = FilterTally::new();
    tally.num_input = records.len();

    let mut kept: Vec<CrashRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !config.included_years.contains(&record.year()?) {
            tally.dropped_year += 1;
            continue;
        }
        if !factor_valid(record.contributing_factor_1.as_deref())
            && !factor_valid(record.contributing_factor_2.as_deref())
        {
            tally.dropped_factor += 1;
            continue;
        }
        if record.latitude.is_none() || record.longitude.is_none() {
            tally.dropped_coords += 1;
            continue;
        }
        if !vehicle_code_valid(record.vehicle_type_code_1.as_deref())
            && !vehicle_code_valid(record.vehicle_type_code_2.as_deref())
        {
            tally.dropped_vehicle += 1;
            continue;
        }
        kept.push(record);
    }
    tally.num_kept = kept.len();

    Ok((kept, tally))
}
