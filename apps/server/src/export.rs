//! CSV rendering of the export table.
//!
//! Column layout and cell formatting come from `steez_core::report`; this
//! module only writes them out with the `csv` crate.

use steez_core::error::CoreResult;
use steez_core::{export_row, CoreError, SaleRecord, EXPORT_COLUMNS};

/// Download name of the export.
pub const EXPORT_FILENAME: &str = "steez_export.csv";

/// Renders every record as CSV, header row first.
pub fn sales_csv(records: &[SaleRecord]) -> CoreResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(EXPORT_COLUMNS).map_err(export_error)?;
    for record in records {
        writer.write_record(export_row(record)).map_err(export_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| CoreError::Export(e.to_string()))
}

fn export_error(err: csv::Error) -> CoreError {
    CoreError::Export(err.to_string())
}
