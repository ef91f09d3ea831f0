//! CSV export functionality
//!
//! Writes the flat `Store,Amount,Date` table the import side reads back.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::SpendEntry;

/// Export all entries as a `Store,Amount,Date` table.
///
/// Fields are written unquoted for parity with the original wire format:
/// a store name containing a comma will not survive a round-trip. The import
/// side reports such rows as skipped instead of corrupting them silently.
pub fn export_entries_csv<W: Write>(entries: &[SpendEntry], writer: &mut W) -> SpendResult<()> {
    writeln!(writer, "Store,Amount,Date").map_err(|e| SpendError::Export(e.to_string()))?;

    for entry in entries {
        writeln!(
            writer,
            "{},{},{}",
            entry.store,
            entry.amount.to_decimal_string(),
            entry.date.format("%Y-%m-%d")
        )
        .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    Ok(())
}
