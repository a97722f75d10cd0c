//! # Trip Records
//!
//! Batch import, cleaning, and aggregation of tabular trip records. This is
//! a standalone pipeline over caller-supplied CSV data; it shares no state
//! with the per-trip calculator.
//!
//! ## Expected Columns
//!
//! `date, activity_type, value, unit` are required; `emissions_kg` appears
//! once records have been merged with computed values and is what the
//! aggregations operate on.
//!
//! ## Pipeline
//!
//! ```text
//! RecordSet::from_csv_path  ->  validate  ->  clean  ->  CleanedRecords
//!                                                        ├── aggregate_by_period
//!                                                        ├── activity_summary
//!                                                        ├── top_activities
//!                                                        └── to_csv_path
//! ```
//!
//! Cleaning parses dates (a bad date fails the batch), drops rows with an
//! empty `value` field, and coerces the remaining values to numbers --
//! unparseable entries are kept with a missing marker rather than failing
//! the whole import.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{FootprintError, FootprintResult};

/// Columns every imported dataset must carry
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "activity_type", "value", "unit"];

/// Calendar bucket size for period aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bucket per day
    Daily,
    /// One bucket per calendar month, keyed by the first of the month
    #[default]
    Monthly,
    /// One bucket per calendar year, keyed by January 1
    Yearly,
}

impl Period {
    /// All period variants for UI selection
    pub const ALL: [Period; 3] = [Period::Daily, Period::Monthly, Period::Yearly];

    /// Map a date to the start of its bucket
    pub fn bucket(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => date,
            Period::Monthly => {
                NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
            }
            Period::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// Render a bucket key at the period's natural precision
    /// (e.g. `2024-04` for a monthly bucket)
    pub fn format_bucket(&self, bucket: NaiveDate) -> String {
        match self {
            Period::Daily => bucket.format("%Y-%m-%d").to_string(),
            Period::Monthly => bucket.format("%Y-%m").to_string(),
            Period::Yearly => bucket.format("%Y").to_string(),
        }
    }

    /// Parse a period name; `None` for unrecognized input
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "daily" => Some(Period::Daily),
            "monthly" => Some(Period::Monthly),
            "yearly" => Some(Period::Yearly),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One cleaned trip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub date: NaiveDate,
    pub activity_type: String,
    /// Coerced numeric value; `None` marks an entry that was present but
    /// unparseable
    pub value: Option<f64>,
    pub unit: String,
    pub emissions_kg: f64,
}

/// Per-activity summary statistics, rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub sum: f64,
    pub mean: f64,
    pub count: u64,
}

/// One row of the top-N report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopActivity {
    pub date: NaiveDate,
    pub activity_type: String,
    pub emissions_kg: f64,
}

/// Raw imported dataset: headers plus untyped rows, as loaded.
///
/// Loading succeeds for any well-formed CSV regardless of schema;
/// [`RecordSet::validate`] checks the schema and [`RecordSet::clean`]
/// produces the typed dataset the aggregations run on.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl RecordSet {
    /// Load records from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> FootprintResult<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|e| {
            FootprintError::file_error("open", path.display().to_string(), e.to_string())
        })?;
        Self::from_csv(reader)
    }

    /// Load records from any reader producing CSV with a header row.
    pub fn from_reader<R: io::Read>(rdr: R) -> FootprintResult<Self> {
        Self::from_csv(csv::Reader::from_reader(rdr))
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> FootprintResult<Self> {
        let headers = reader
            .headers()
            .map_err(|e| FootprintError::csv_error(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record.map_err(|e| FootprintError::csv_error(e.to_string()))?);
        }

        Ok(RecordSet { headers, rows })
    }

    /// True iff all required columns are present.
    pub fn validate(&self) -> bool {
        self.missing_columns().is_empty()
    }

    /// Required columns absent from this dataset.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !self.headers.iter().any(|h| h == required))
            .collect()
    }

    /// Column headers as loaded
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Clean the dataset into typed records.
    ///
    /// - a missing required column fails with `MissingColumn`
    /// - a date that does not parse as `YYYY-MM-DD` fails the batch with
    ///   `InvalidDate` (row numbers are 1-based data rows)
    /// - rows with an empty `value` field are dropped
    /// - non-empty values that do not parse as numbers are kept with
    ///   `value: None` and a logged warning
    /// - `emissions_kg` defaults to 0.0 when the column is absent or the
    ///   cell is empty/unparseable
    pub fn clean(&self) -> FootprintResult<CleanedRecords> {
        let required = |name: &'static str| {
            self.column_index(name)
                .ok_or_else(|| FootprintError::missing_column(name))
        };
        let date_idx = required("date")?;
        let activity_idx = required("activity_type")?;
        let value_idx = required("value")?;
        let unit_idx = required("unit")?;
        let emissions_idx = self.column_index("emissions_kg");

        let mut records = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let row_number = i + 1;
            let date_cell = row.get(date_idx).unwrap_or("").trim();
            let date: NaiveDate = date_cell
                .parse()
                .map_err(|_| FootprintError::invalid_date(row_number, date_cell))?;

            let value_cell = row.get(value_idx).unwrap_or("").trim();
            if value_cell.is_empty() {
                continue;
            }
            let value = match value_cell.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(
                        "row {}: value '{}' is not numeric, keeping as missing",
                        row_number, value_cell
                    );
                    None
                }
            };

            let emissions_kg = emissions_idx
                .and_then(|idx| row.get(idx))
                .and_then(|cell| cell.trim().parse::<f64>().ok())
                .unwrap_or(0.0);

            records.push(TripRecord {
                date,
                activity_type: row.get(activity_idx).unwrap_or("").trim().to_string(),
                value,
                unit: row.get(unit_idx).unwrap_or("").trim().to_string(),
                emissions_kg,
            });
        }

        Ok(CleanedRecords { records })
    }
}

/// Cleaned, typed dataset ready for aggregation and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecords {
    records: Vec<TripRecord>,
}

impl CleanedRecords {
    /// Records in input order
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum `emissions_kg` per calendar bucket, keyed by bucket start date.
    /// Buckets with no rows are absent from the result.
    pub fn aggregate_by_period(&self, period: Period) -> BTreeMap<NaiveDate, f64> {
        let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in &self.records {
            *buckets.entry(period.bucket(record.date)).or_insert(0.0) += record.emissions_kg;
        }
        buckets
    }

    /// Per-activity sum/mean/count of `emissions_kg`, rounded to 2 decimals.
    pub fn activity_summary(&self) -> BTreeMap<String, ActivityStats> {
        let mut groups: BTreeMap<String, (f64, u64)> = BTreeMap::new();
        for record in &self.records {
            let entry = groups.entry(record.activity_type.clone()).or_insert((0.0, 0));
            entry.0 += record.emissions_kg;
            entry.1 += 1;
        }

        groups
            .into_iter()
            .map(|(activity, (sum, count))| {
                let stats = ActivityStats {
                    sum: round2(sum),
                    mean: round2(sum / count as f64),
                    count,
                };
                (activity, stats)
            })
            .collect()
    }

    /// The `n` rows with the highest emissions, descending. Returns fewer
    /// rows when the dataset is smaller than `n`.
    pub fn top_activities(&self, n: usize) -> Vec<TopActivity> {
        let mut rows: Vec<TopActivity> = self
            .records
            .iter()
            .map(|record| TopActivity {
                date: record.date,
                activity_type: record.activity_type.clone(),
                emissions_kg: record.emissions_kg,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.emissions_kg
                .partial_cmp(&a.emissions_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(n);
        rows
    }

    /// Export the cleaned records to a CSV file.
    pub fn to_csv_path(&self, path: impl AsRef<Path>) -> FootprintResult<()> {
        let path = path.as_ref();
        let writer = csv::Writer::from_path(path).map_err(|e| {
            FootprintError::file_error("write", path.display().to_string(), e.to_string())
        })?;
        self.write_csv(writer)
    }

    /// Export the cleaned records to any writer.
    pub fn to_writer<W: io::Write>(&self, wtr: W) -> FootprintResult<()> {
        self.write_csv(csv::Writer::from_writer(wtr))
    }

    fn write_csv<W: io::Write>(&self, mut writer: csv::Writer<W>) -> FootprintResult<()> {
        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| FootprintError::csv_error(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| FootprintError::csv_error(e.to_string()))?;
        Ok(())
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"\
date,activity_type,value,unit,emissions_kg
2024-03-05,flight,1000,km,255.0
2024-03-18,hotel,3,nights,68.4
2024-04-02,transport,120,km,25.2
2024-04-09,hotel,,nights,45.6
2024-04-20,activity,abc,days,12.4
2025-01-15,flight,800,km,204.0
";

    fn cleaned() -> CleanedRecords {
        RecordSet::from_reader(SAMPLE).unwrap().clean().unwrap()
    }

    #[test]
    fn test_validate_checks_required_columns() {
        let records = RecordSet::from_reader(SAMPLE).unwrap();
        assert!(records.validate());
        assert!(records.missing_columns().is_empty());

        let no_unit = RecordSet::from_reader(&b"date,activity_type,value\n2024-01-01,x,1\n"[..])
            .unwrap();
        assert!(!no_unit.validate());
        assert_eq!(no_unit.missing_columns(), vec!["unit"]);
    }

    #[test]
    fn test_clean_fails_on_missing_column() {
        let no_unit = RecordSet::from_reader(&b"date,activity_type,value\n2024-01-01,x,1\n"[..])
            .unwrap();
        let err = no_unit.clean().unwrap_err();
        assert_eq!(err, FootprintError::missing_column("unit"));
    }

    #[test]
    fn test_clean_drops_empty_values_keeps_unparseable_as_missing() {
        let records = cleaned();
        // 6 raw rows, one dropped for an empty value
        assert_eq!(records.len(), 5);

        let coerced = records
            .records()
            .iter()
            .find(|r| r.activity_type == "activity")
            .unwrap();
        assert_eq!(coerced.value, None);
        assert_eq!(coerced.emissions_kg, 12.4);
    }

    #[test]
    fn test_clean_fails_on_bad_date() {
        let bad = RecordSet::from_reader(
            &b"date,activity_type,value,unit\nnot-a-date,flight,1,km\n"[..],
        )
        .unwrap();
        let err = bad.clean().unwrap_err();
        assert_eq!(err, FootprintError::invalid_date(1, "not-a-date"));
    }

    #[test]
    fn test_monthly_aggregation_buckets_and_gaps() {
        let buckets = cleaned().aggregate_by_period(Period::Monthly);

        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let april = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let january = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        assert_eq!(buckets.len(), 3);
        assert!((buckets[&march] - 323.4).abs() < 1e-9);
        assert!((buckets[&april] - 37.6).abs() < 1e-9);
        assert!((buckets[&january] - 204.0).abs() < 1e-9);

        // months between April and January are simply absent
        assert!(!buckets.contains_key(&NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }

    #[test]
    fn test_yearly_aggregation() {
        let buckets = cleaned().aggregate_by_period(Period::Yearly);
        assert_eq!(buckets.len(), 2);
        let y2024 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!((buckets[&y2024] - 361.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_summary_rounding() {
        let summary = cleaned().activity_summary();

        let flight = &summary["flight"];
        assert_eq!(flight.count, 2);
        assert_eq!(flight.sum, 459.0);
        assert_eq!(flight.mean, 229.5);

        // 68.4 / 1 -> exact after rounding
        assert_eq!(summary["hotel"].mean, 68.4);
    }

    #[test]
    fn test_top_activities_descending_and_short_dataset() {
        let records = cleaned();

        let top2 = records.top_activities(2);
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[0].emissions_kg, 255.0);
        assert_eq!(top2[1].emissions_kg, 204.0);

        // asking for more rows than exist returns everything
        let all = records.top_activities(50);
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].emissions_kg >= w[1].emissions_kg));
    }

    #[test]
    fn test_export_round_trip() {
        let records = cleaned();

        let mut buffer = Vec::new();
        records.to_writer(&mut buffer).unwrap();

        let reloaded = RecordSet::from_reader(buffer.as_slice())
            .unwrap()
            .clean()
            .unwrap();
        // the coerced-missing row is dropped on re-import (its value cell is
        // now empty), everything else survives
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.records()[0], records.records()[0]);
    }

    #[test]
    fn test_period_from_label() {
        assert_eq!(Period::from_label("Monthly"), Some(Period::Monthly));
        assert_eq!(Period::from_label("YEARLY"), Some(Period::Yearly));
        assert_eq!(Period::from_label("weekly"), None);
    }
}
