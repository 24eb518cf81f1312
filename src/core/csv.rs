//! CSV encoding and decoding
//!
//! Report tables are encoded excel-style: every field quoted, CRLF row
//! terminators, UTF-8 text. Uploaded cohort-assignment files arrive as
//! delimited text with unpredictable line endings, so parsing normalizes
//! newlines first (universal-newline handling).

use crate::domain::result::Result;
use crate::domain::table::{Cell, ReportTable};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::collections::HashMap;

/// Encodes a table to CSV bytes, header first, all fields quoted
pub fn encode_table(table: &ReportTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(Cell::render))?;
    }

    writer
        .into_inner()
        .map_err(|e| crate::domain::RegistrarError::Csv(e.to_string()))
}

/// Decodes CSV bytes back into a table.
///
/// Row 0 becomes the header; all data cells come back as text, since the
/// CSV layer erases scalar kinds.
pub fn decode_table(bytes: &[u8]) -> Result<ReportTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut table = ReportTable::new(header);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(Cell::from).collect());
    }
    Ok(table)
}

/// Parses an uploaded delimited-text file into keyed rows, one map per
/// data row, keyed by the header row.
///
/// Rows shorter than the header simply omit the trailing keys; callers
/// treat absent keys as empty. Line endings are normalized before parsing
/// so files exported from any platform read identically.
pub fn read_keyed_rows(content: &str) -> Result<Vec<HashMap<String, String>>> {
    let normalized = normalize_newlines(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(normalized.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Counts the data rows in an uploaded delimited-text file
pub fn count_keyed_rows(content: &str) -> Result<u64> {
    Ok(read_keyed_rows(content)?.len() as u64)
}

fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}
