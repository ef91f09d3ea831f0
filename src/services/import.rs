//! CSV import service
//!
//! Reads the flat `Store,Amount,Date` table, rejects the whole file when the
//! header row is missing a required column, and otherwise validates rows one
//! at a time: a bad row is skipped and counted, never fatal to the batch.

use std::collections::HashMap;
use std::io::Read;

use chrono::{Local, NaiveDate};
use csv::ReaderBuilder;

use crate::error::{SpendError, SpendResult};
use crate::models::{RawEntry, SpendEntry};
use crate::storage::EntryStore;

use super::validate::validate_with_today;

/// Header columns an import file must carry (a superset is accepted)
pub const REQUIRED_HEADERS: [&str; 3] = ["Store", "Amount", "Date"];

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of entries imported
    pub imported: usize,
    /// Number of rows skipped because they failed validation
    pub skipped: usize,
    /// Error messages by data-row number (1-based, excluding the header)
    pub error_messages: HashMap<usize, String>,
}

/// Parse a CSV into per-row validation results.
///
/// The header must contain at least Store, Amount, and Date (any order,
/// extra columns tolerated); otherwise the whole file is rejected with
/// [`SpendError::ImportFormat`]. Data rows are read positionally as
/// (store, amount, date), matching the export layout. A store name with an
/// embedded comma shifts the remaining fields and surfaces as a per-row
/// validation error rather than silent corruption.
pub fn parse_rows<R: Read>(
    reader: R,
    today: NaiveDate,
) -> SpendResult<Vec<(usize, Result<SpendEntry, String>)>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| SpendError::Import(format!("Failed to read CSV header: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|h| h == required) {
            return Err(SpendError::ImportFormat {
                expected: "Store,Amount,Date",
                found: headers.join(","),
            });
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let row_number = idx + 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                rows.push((row_number, Err(format!("unreadable CSV record: {}", e))));
                continue;
            }
        };

        // Rows of empty fields (e.g. trailing ",,") carry no entry
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let raw = RawEntry::new(
            record.get(0).unwrap_or("").trim(),
            record.get(1).unwrap_or("").trim(),
            record.get(2).map(|s| s.trim().to_string()),
        );

        let parsed = validate_with_today(&raw, today).map_err(|e| e.to_string());
        rows.push((row_number, parsed));
    }

    Ok(rows)
}

/// Service for CSV import
pub struct ImportService<'a> {
    store: &'a EntryStore,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(store: &'a EntryStore) -> Self {
        Self { store }
    }

    /// Import entries from a CSV reader, merging them with existing data
    pub fn import_from_reader<R: Read>(&self, reader: R) -> SpendResult<ImportResult> {
        self.import_with_today(reader, Local::now().date_naive())
    }

    /// Import with an explicit "today" for rows whose date column is empty
    pub fn import_with_today<R: Read>(
        &self,
        reader: R,
        today: NaiveDate,
    ) -> SpendResult<ImportResult> {
        let rows = parse_rows(reader, today)?;

        let mut result = ImportResult::default();
        let mut new_entries = Vec::new();

        for (row_number, parsed) in rows {
            match parsed {
                Ok(entry) => {
                    new_entries.push(entry);
                    result.imported += 1;
                }
                Err(message) => {
                    result.skipped += 1;
                    result.error_messages.insert(row_number, message);
                }
            }
        }

        self.store.append_all(new_entries)?;
        self.store.save()?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
    }

    fn test_store(dir: &TempDir) -> EntryStore {
        EntryStore::new(dir.path().join("entries.json"))
    }

    #[test]
    fn test_parse_simple_csv() {
        let csv_data = "Store,Amount,Date\nPick n Pay,1000,2024-03-01\nSasol,3500.50,2024-03-10\n";
        let rows = parse_rows(csv_data.as_bytes(), today()).unwrap();
        assert_eq!(rows.len(), 2);

        let entry = rows[0].1.as_ref().unwrap();
        assert_eq!(entry.store, "Pick n Pay");
        assert_eq!(entry.amount, Money::from_rands(1000));
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let entry = rows[1].1.as_ref().unwrap();
        assert_eq!(entry.amount, Money::from_cents(350_050));
    }

    #[test]
    fn test_missing_header_rejects_whole_file() {
        let csv_data = "Shop,Total\nPick n Pay,1000\n";
        let err = parse_rows(csv_data.as_bytes(), today()).unwrap_err();
        assert!(err.is_import_format());
    }

    #[test]
    fn test_extra_header_columns_accepted() {
        let csv_data = "Store,Amount,Date,Notes\nSasol,500,2024-03-01,fill-up\n";
        let rows = parse_rows(csv_data.as_bytes(), today()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].1.is_ok());
    }

    #[test]
    fn test_bad_row_is_reported_not_fatal() {
        let csv_data = "Store,Amount,Date\nSasol,abc,2024-03-01\nDischem,200,2024-03-02\n";
        let rows = parse_rows(csv_data.as_bytes(), today()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].1.is_err());
        assert!(rows[1].1.is_ok());
    }

    #[test]
    fn test_empty_date_column_defaults_to_today() {
        let csv_data = "Store,Amount,Date\nSasol,500,\n";
        let rows = parse_rows(csv_data.as_bytes(), today()).unwrap();
        assert_eq!(rows[0].1.as_ref().unwrap().date, today());
    }

    #[test]
    fn test_import_merges_with_existing_data() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store
            .append(SpendEntry::new(
                "Woolworths",
                Money::from_rands(250),
                today(),
            ))
            .unwrap();

        let service = ImportService::new(&store);
        let csv_data = "Store,Amount,Date\nSasol,500,2024-03-01\n";
        let result = service
            .import_with_today(csv_data.as_bytes(), today())
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.skipped, 0);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_import_counts_skipped_rows() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let service = ImportService::new(&store);

        let csv_data = "Store,Amount,Date\n,500,2024-03-01\nSasol,500,2024-03-01\nDischem,-2,2024-03-01\n";
        let result = service
            .import_with_today(csv_data.as_bytes(), today())
            .unwrap();

        assert_eq!(result.imported, 1);
        assert_eq!(result.skipped, 2);
        assert!(result.error_messages.contains_key(&1));
        assert!(result.error_messages.contains_key(&3));
        assert_eq!(store.len().unwrap(), 1);
    }
}
