//! CSV record source and the cleaned-dataset writer.
//!
//! The pipeline reads nothing but the text column; every other column of a row
//! (likes, author, timestamps, ...) is carried through untouched so the caller
//! can label and analyse it after normalization.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::{info, warn};

use crate::NormalizedResult;

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// The text cell; `None` when the cell is missing or empty.
    pub text: Option<String>,
    /// Every cell of the original row, text included.
    pub fields: Vec<String>,
}

/// Header plus rows of a loaded dataset.
#[derive(Debug, Clone)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub text_index: usize,
    pub records: Vec<RawRecord>,
}

/// Read a CSV file with a header row, locating the text column by name.
pub fn read_records(path: &Path, text_column: &str) -> Result<RecordTable, String> {
    let file = File::open(path).map_err(|e| format!("Open {} failed: {e}", path.display()))?;
    let table = read_records_from(file, text_column)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    info!(
        "loaded {} records from {}",
        table.records.len(),
        path.display()
    );
    Ok(table)
}

/// Like [`read_records`], for any reader.
pub fn read_records_from<R: Read>(reader: R, text_column: &str) -> Result<RecordTable, String> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| format!("Read CSV header failed: {e}"))?
        .iter()
        .map(String::from)
        .collect();
    let text_index = headers
        .iter()
        .position(|h| h.trim() == text_column)
        .ok_or_else(|| {
            format!(
                "Missing text column {text_column:?} (found: {})",
                headers.join(", ")
            )
        })?;

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| format!("Read CSV row {} failed: {e}", row + 1))?;
        let fields: Vec<String> = record.iter().map(String::from).collect();
        let text = fields
            .get(text_index)
            .filter(|cell| !cell.is_empty())
            .cloned();
        records.push(RawRecord { text, fields });
    }
    Ok(RecordTable {
        headers,
        text_index,
        records,
    })
}

/// Drop rows without text and keep only the first row of each distinct text.
pub fn dedup_records(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let total = records.len();
    let mut seen: HashSet<String> = HashSet::new();
    let unique: Vec<RawRecord> = records
        .into_iter()
        .filter(|record| match &record.text {
            Some(text) => seen.insert(text.clone()),
            None => false,
        })
        .collect();
    if unique.len() < total {
        warn!(
            "dropped {} empty or duplicate records",
            total - unique.len()
        );
    }
    unique
}

/// Write the original columns plus a trailing `cleaned` column.
/// Rows whose normalization is empty are left out. Returns the number of rows written.
pub fn write_cleaned(
    path: &Path,
    headers: &[String],
    rows: &[(&RawRecord, &NormalizedResult)],
) -> Result<usize, String> {
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| format!("Create {} failed: {e}", path.display()))?;
    let write_err = |e: csv::Error| format!("Write {} failed: {e}", path.display());

    let mut header_row: Vec<&str> = headers.iter().map(String::as_str).collect();
    header_row.push("cleaned");
    wtr.write_record(&header_row).map_err(write_err)?;

    let mut written = 0;
    for (record, result) in rows.iter().filter(|(_, result)| !result.is_empty()) {
        let mut row: Vec<&str> = record.fields.iter().map(String::as_str).collect();
        row.resize(headers.len(), "");
        row.push(&result.joined);
        wtr.write_record(&row).map_err(write_err)?;
        written += 1;
    }
    wtr.flush()
        .map_err(|e| format!("Flush {} failed: {e}", path.display()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "id,text,diggCount\n\
                          1,Gamenya seru,12000\n\
                          2,,50\n\
                          3,Gamenya seru,7\n\
                          4,\"tidak bagus, laggy\",5000\n";

    #[test]
    fn reads_text_column_and_passthrough_fields() {
        let table = read_records_from(SAMPLE.as_bytes(), "text").unwrap();
        assert_eq!(table.headers, vec!["id", "text", "diggCount"]);
        assert_eq!(table.text_index, 1);
        assert_eq!(table.records.len(), 4);
        assert_eq!(table.records[0].text.as_deref(), Some("Gamenya seru"));
        assert_eq!(table.records[1].text, None);
        assert_eq!(table.records[3].text.as_deref(), Some("tidak bagus, laggy"));
        assert_eq!(table.records[3].fields[2], "5000");
    }

    #[test]
    fn missing_column_names_the_headers() {
        let err = read_records_from(SAMPLE.as_bytes(), "comment").unwrap_err();
        assert!(err.contains("comment"));
        assert!(err.contains("diggCount"));
    }

    #[test]
    fn short_rows_have_no_text() {
        let table = read_records_from("id,text\n1\n2,ok\n".as_bytes(), "text").unwrap();
        assert_eq!(table.records[0].text, None);
        assert_eq!(table.records[1].text.as_deref(), Some("ok"));
    }

    #[test]
    fn dedup_keeps_first_and_drops_empty() {
        let table = read_records_from(SAMPLE.as_bytes(), "text").unwrap();
        let unique = dedup_records(table.records);
        let ids: Vec<&str> = unique.iter().map(|r| r.fields[0].as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn cleaned_file_skips_empty_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let headers = vec!["id".to_string(), "text".to_string()];
        let a = RawRecord {
            text: Some("seru".into()),
            fields: vec!["1".into(), "seru".into()],
        };
        let b = RawRecord {
            text: Some("ya".into()),
            fields: vec!["2".into(), "ya".into()],
        };
        let ra = NormalizedResult {
            tokens: vec!["seru".into()],
            terms: vec!["seru".into()],
            joined: "seru".into(),
        };
        let rb = NormalizedResult::default();
        let written = write_cleaned(&path, &headers, &[(&a, &ra), (&b, &rb)]).unwrap();
        assert_eq!(written, 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,text,cleaned\n1,seru,seru\n");
    }
}
