//! Spreadsheet export of fetched records.
//!
//! Records are flattened through an ordered list of [`Column`]s (dotted
//! JSON path plus display header) and written as UTF-8 CSV with a byte
//! order mark, which spreadsheet tools need to detect Arabic text.

pub mod csv_export;
pub mod error;
pub mod presets;

pub use csv_export::{cell, read_csv, Column, CsvExport, CsvTable, BOM};
pub use error::ExportError;
