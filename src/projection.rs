use crate::crash_record::CrashRecord;
use crate::error::Result;

/// Records projected to a chosen column subset. Column order is the
/// configuration's order, not the source schema's.
pub struct ProjectedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

pub fn project(records: &[CrashRecord], columns: &[String]) -> Result<ProjectedTable> {
    let mut rows: Vec<Vec<Option<String>>> = Vec::with_capacity(records.len());
    for record in records {
        let mut row = Vec::with_capacity(columns.len());
        for column in columns {
            row.push(record.value_of(column)?);
        }
        rows.push(row);
    }
    Ok(ProjectedTable {
        columns: columns.to_vec(),
        rows,
    })
}

impl ProjectedTable {
    /// (rows, columns), pandas-style.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Null count per column, in column order.
    pub fn null_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.columns.len()];
        for row in &self.rows {
            for (idx, value) in row.iter().enumerate() {
                if value.is_none() {
                    counts[idx] += 1;
                }
            }
        }
        counts
    }

    pub fn head(&self, n: usize) -> &[Vec<Option<String>>] {
        &self.rows[..self.rows.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(factor2: Option<&str>) -> CrashRecord {
        CrashRecord {
            crash_date: "06/01/2022".to_string(),
            latitude: Some(40.7),
            longitude: Some(-73.9),
            location: Some("(40.7, -73.9)".to_string()),
            contributing_factor_1: Some("Following Too Closely".to_string()),
            contributing_factor_2: factor2.map(str::to_string),
            vehicle_type_code_1: Some("Sedan".to_string()),
            vehicle_type_code_2: None,
        }
    }

    #[test]
    fn output_columns_follow_configured_order() {
        let columns = vec!["LATITUDE".to_string(), "CRASH DATE".to_string()];
        let table = project(&[record(None)], &columns).unwrap();
        assert_eq!(table.columns, columns);
        assert_eq!(table.rows[0][0].as_deref(), Some("40.7"));
        assert_eq!(table.rows[0][1].as_deref(), Some("06/01/2022"));
    }

    #[test]
    fn shape_and_null_counts() {
        let columns = vec![
            "CONTRIBUTING FACTOR VEHICLE 2".to_string(),
            "VEHICLE TYPE CODE 2".to_string(),
        ];
        let rows = vec![record(None), record(Some("Unspecified"))];
        let table = project(&rows, &columns).unwrap();
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.null_counts(), vec![1, 2]);
    }

    #[test]
    fn unknown_column_is_fatal() {
        let columns = vec!["ZIP CODE".to_string()];
        assert!(project(&[record(None)], &columns).is_err());
    }

    #[test]
    fn head_is_capped_at_row_count() {
        let table = project(&[record(None)], &["CRASH DATE".to_string()]).unwrap();
        assert_eq!(table.head(10).len(), 1);
    }
}
