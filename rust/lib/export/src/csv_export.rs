use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ExportError;

/// UTF-8 byte order mark written before the header row.
pub const BOM: &[u8] = b"\xEF\xBB\xBF";

/// One output column: where to read the value and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Dotted JSON path, e.g. `facility.name` or `items.0.quantity`.
    pub path: String,
    pub header: String,
}

impl Column {
    pub fn new(path: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            header: header.into(),
        }
    }
}

/// CSV writer for any serializable records.
#[derive(Debug, Clone)]
pub struct CsvExport {
    columns: Vec<Column>,
}

impl CsvExport {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Write BOM, header row and one row per record. Returns the number of
    /// data rows written.
    pub fn write<W: Write, T: Serialize>(
        &self,
        mut out: W,
        records: &[T],
    ) -> Result<usize, ExportError> {
        out.write_all(BOM)?;
        let mut writer = WriterBuilder::new().from_writer(out);
        writer.write_record(self.columns.iter().map(|c| c.header.as_str()))?;

        for record in records {
            let value = serde_json::to_value(record)
                .map_err(|e| ExportError::Serialization(e.to_string()))?;
            writer.write_record(self.columns.iter().map(|c| cell(&value, &c.path)))?;
        }
        writer.flush()?;
        Ok(records.len())
    }

    pub fn to_bytes<T: Serialize>(&self, records: &[T]) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        self.write(&mut buf, records)?;
        Ok(buf)
    }

    pub fn write_to_path<T: Serialize>(
        &self,
        path: &Path,
        records: &[T],
    ) -> Result<usize, ExportError> {
        let file = File::create(path)?;
        let rows = self.write(BufWriter::new(file), records)?;
        debug!("exported {} rows to {:?}", rows, path);
        Ok(rows)
    }
}

/// Text of the value at `path`. Missing values and nulls are empty,
/// booleans are نعم/لا, nested arrays and objects are compact JSON.
pub fn cell(record: &Value, path: &str) -> String {
    let mut current = record;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(v) => current = v,
            None => return String::new(),
        }
    }
    match current {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "نعم".to_string(),
        Value::Bool(false) => "لا".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Parsed CSV, as read back from an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read CSV text, dropping a leading BOM if present.
pub fn read_csv(bytes: &[u8]) -> Result<CsvTable, ExportError> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { headers, rows })
}
