//! CLI command handlers
//!
//! Each handler takes the entry store plus parsed arguments, runs the
//! relevant service, and prints the outcome. All user-facing output from the
//! binary funnels through here.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{SpendResult, ValidationError};
use crate::export::export_entries_csv;
use crate::models::{CategoryConfig, RawEntry};
use crate::reports::SummaryReport;
use crate::services::validate::{validate, DATE_FORMAT};
use crate::services::ImportService;
use crate::storage::EntryStore;

/// Record a single spend entry
pub fn handle_add(
    store: &EntryStore,
    store_name: &str,
    amount: &str,
    date: Option<String>,
) -> SpendResult<()> {
    let raw = RawEntry::new(store_name, amount, date);
    let entry = validate(&raw)?;

    store.append(entry.clone())?;
    store.save()?;

    println!(
        "Recorded {} at {} on {}",
        entry.amount, entry.store, entry.date
    );
    Ok(())
}

/// Show the current-period summary with totals and alerts
pub fn handle_summary(
    store: &EntryStore,
    settings: &Settings,
    config: &CategoryConfig,
    reference: Option<String>,
) -> SpendResult<()> {
    let reference = match reference {
        Some(s) => NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate { value: s })?,
        None => Local::now().date_naive(),
    };

    let entries = store.get_all()?;
    let report = SummaryReport::generate(&entries, reference, config);
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Export all entries as CSV, to a file or stdout
pub fn handle_export(store: &EntryStore, file: Option<&Path>) -> SpendResult<()> {
    let entries = store.get_all()?;

    match file {
        Some(path) => {
            let mut writer = File::create(path).map_err(|e| {
                crate::error::SpendError::Export(format!(
                    "Failed to create {}: {}",
                    path.display(),
                    e
                ))
            })?;
            export_entries_csv(&entries, &mut writer)?;
            println!("Exported {} entries to {}", entries.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            export_entries_csv(&entries, &mut lock)?;
        }
    }

    Ok(())
}

/// Import entries from a CSV file, merging with existing data
pub fn handle_import(store: &EntryStore, file: &Path) -> SpendResult<()> {
    let reader = File::open(file).map_err(|e| {
        crate::error::SpendError::Import(format!("Failed to open {}: {}", file.display(), e))
    })?;

    let service = ImportService::new(store);
    let result = service.import_from_reader(BufReader::new(reader))?;

    println!(
        "Imported {} entries ({} skipped)",
        result.imported, result.skipped
    );

    let mut failed_rows: Vec<_> = result.error_messages.iter().collect();
    failed_rows.sort_by_key(|(row, _)| **row);
    for (row, message) in failed_rows {
        eprintln!("  row {}: {}", row, message);
    }

    Ok(())
}

/// Clear all spend data, prompting unless `assume_yes` is set
pub fn handle_clear(store: &EntryStore, assume_yes: bool) -> SpendResult<()> {
    if !assume_yes {
        print!("Clear all spend data? This cannot be undone. [y/N] ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        if !matches!(line.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let count = store.len()?;
    store.clear()?;
    println!("Cleared {} entries.", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> EntryStore {
        EntryStore::new(dir.path().join("entries.json"))
    }

    #[test]
    fn test_handle_add_persists_entry() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        handle_add(&store, "Sasol", "500", Some("2024-03-01".into())).unwrap();

        let reopened = test_store(&dir);
        reopened.load().unwrap();
        assert_eq!(reopened.len().unwrap(), 1);
    }

    #[test]
    fn test_handle_add_rejects_bad_amount() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let err = handle_add(&store, "Sasol", "abc", None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn test_handle_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        handle_add(&store, "Sasol", "500", Some("2024-03-01".into())).unwrap();

        let out_path = dir.path().join("out.csv");
        handle_export(&store, Some(&out_path)).unwrap();

        let text = std::fs::read_to_string(&out_path).unwrap();
        assert!(text.starts_with("Store,Amount,Date\n"));
        assert!(text.contains("Sasol,500.00,2024-03-01"));
    }

    #[test]
    fn test_handle_clear_with_assume_yes() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        handle_add(&store, "Sasol", "500", None).unwrap();

        handle_clear(&store, true).unwrap();
        assert!(store.is_empty().unwrap());
    }
}
