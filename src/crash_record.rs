use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{DataError, Result};

/// One crash-event row, reduced to the columns this tool works with.
/// Extra columns in the source file are ignored by the reader; a missing
/// header among these is a fatal deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CrashRecord {
    #[serde(rename = "CRASH DATE")]
    pub crash_date: String,
    #[serde(rename = "LATITUDE")]
    pub latitude: Option<f64>,
    #[serde(rename = "LONGITUDE")]
    pub longitude: Option<f64>,
    #[serde(rename = "LOCATION")]
    pub location: Option<String>,
    #[serde(rename = "CONTRIBUTING FACTOR VEHICLE 1")]
    pub contributing_factor_1: Option<String>,
    #[serde(rename = "CONTRIBUTING FACTOR VEHICLE 2")]
    pub contributing_factor_2: Option<String>,
    #[serde(rename = "VEHICLE TYPE CODE 1")]
    pub vehicle_type_code_1: Option<String>,
    #[serde(rename = "VEHICLE TYPE CODE 2")]
    pub vehicle_type_code_2: Option<String>,
}

pub const COLUMN_NAMES: [&str; 8] = [
    "CRASH DATE",
    "LATITUDE",
    "LONGITUDE",
    "LOCATION",
    "CONTRIBUTING FACTOR VEHICLE 1",
    "CONTRIBUTING FACTOR VEHICLE 2",
    "VEHICLE TYPE CODE 1",
    "VEHICLE TYPE CODE 2",
];

/// The loaded file: deserialized records plus the source schema as found,
/// which is wider than the columns this tool keeps.
pub struct RawDataset {
    pub records: Vec<CrashRecord>,
    pub source_columns: Vec<String>,
}

impl CrashRecord {
    /// Calendar year derived from the MM/DD/YYYY crash date.
    pub fn year(&self) -> Result<i32> {
        Ok(self.date()?.year())
    }

    /// (year, month 1-12) derived from the crash date.
    pub fn year_month(&self) -> Result<(i32, u32)> {
        let date = self.date()?;
        Ok((date.year(), date.month()))
    }

    fn date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.crash_date, "%m/%d/%Y").map_err(|_| DataError::DateParse {
            value: self.crash_date.clone(),
        })
    }

    /// Value of one column by its source header name, rendered for output.
    pub fn value_of(&self, column: &str) -> Result<Option<String>> {
        let value = match column {
            "CRASH DATE" => Some(self.crash_date.clone()),
            "LATITUDE" => self.latitude.map(|v| v.to_string()),
            "LONGITUDE" => self.longitude.map(|v| v.to_string()),
            "LOCATION" => self.location.clone(),
            "CONTRIBUTING FACTOR VEHICLE 1" => self.contributing_factor_1.clone(),
            "CONTRIBUTING FACTOR VEHICLE 2" => self.contributing_factor_2.clone(),
            "VEHICLE TYPE CODE 1" => self.vehicle_type_code_1.clone(),
            "VEHICLE TYPE CODE 2" => self.vehicle_type_code_2.clone(),
            other => return Err(DataError::UnknownColumn(other.to_string())),
        };
        Ok(value)
    }

    pub fn load_csv(filename: &str) -> Result<RawDataset> {
        let mut rdr = csv::Reader::from_path(filename).map_err(|source| DataError::Csv {
            path: filename.to_string(),
            source,
        })?;

        // Absent optional columns would otherwise deserialize as all-None;
        // the schema check has to be explicit.
        let headers = rdr.headers().map_err(|source| DataError::Csv {
            path: filename.to_string(),
            source,
        })?;
        let source_columns: Vec<String> = headers.iter().map(str::to_string).collect();
        for expected in COLUMN_NAMES {
            if !source_columns.iter().any(|h| h == expected) {
                return Err(DataError::MissingColumn(expected.to_string()));
            }
        }

        let mut records: Vec<CrashRecord> = Vec::with_capacity(10_000);
        for result in rdr.deserialize() {
            let record: CrashRecord = result.map_err(|source| DataError::Csv {
                path: filename.to_string(),
                source,
            })?;
            records.push(record);
        }
        Ok(RawDataset {
            records,
            source_columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(crash_date: &str) -> CrashRecord {
        CrashRecord {
            crash_date: crash_date.to_string(),
            latitude: Some(40.7),
            longitude: Some(-73.9),
            location: Some("(40.7, -73.9)".to_string()),
            contributing_factor_1: Some("Driver Inattention/Distraction".to_string()),
            contributing_factor_2: None,
            vehicle_type_code_1: Some("Sedan".to_string()),
            vehicle_type_code_2: None,
        }
    }

    #[test]
    fn year_derived_from_crash_date() {
        assert_eq!(record("06/01/2022").year().unwrap(), 2022);
        assert_eq!(record("01/15/2020").year().unwrap(), 2020);
    }

    #[test]
    fn year_month_derived_from_crash_date() {
        assert_eq!(record("07/04/2023").year_month().unwrap(), (2023, 7));
        assert_eq!(record("12/31/2021").year_month().unwrap(), (2021, 12));
    }

    #[test]
    fn bad_date_names_the_value() {
        let err = record("June 1st").year().unwrap_err();
        assert!(err.to_string().contains("June 1st"));
    }

    #[test]
    fn value_of_unknown_column_errors() {
        let err = record("06/01/2022").value_of("BOROUGH").unwrap_err();
        assert!(err.to_string().contains("BOROUGH"));
    }

    #[test]
    fn value_of_follows_header_names() {
        let r = record("06/01/2022");
        assert_eq!(r.value_of("CRASH DATE").unwrap().as_deref(), Some("06/01/2022"));
        assert_eq!(r.value_of("LATITUDE").unwrap().as_deref(), Some("40.7"));
        assert_eq!(r.value_of("CONTRIBUTING FACTOR VEHICLE 2").unwrap(), None);
    }
}
