use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use csv::WriterBuilder;

use crate::stats::TermCount;

/// Output format for term-frequency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

///Build `<dir>/<stem>_<YYYYMMDD_HHMMSS>_<suffix>.<ext>` from the local time.
pub fn timestamped_path(dir: &Path, stem: &str, suffix: &str, ext: &str) -> PathBuf {
    let local: DateTime<Local> = Local::now();
    let stamp = local.format("%Y%m%d_%H%M%S");
    dir.join(format!("{stem}_{stamp}_{suffix}.{ext}"))
}

/// Write the term-frequency table as `<stem>_<timestamp>_termfreq.<ext>` in `dir`.
pub fn export_term_frequencies(
    dir: &Path,
    stem: &str,
    format: ExportFormat,
    rows: &[TermCount],
) -> Result<PathBuf, String> {
    let path = timestamped_path(dir, stem, "termfreq", format.extension());
    let file = File::create(&path).map_err(|e| format!("Create {} failed: {e}", path.display()))?;
    let write_err = |e: String| format!("Write {} failed: {e}", path.display());

    match format {
        ExportFormat::Json => {
            let mut out = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut out, rows).map_err(|e| write_err(e.to_string()))?;
            out.flush().map_err(|e| write_err(e.to_string()))?;
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let delimiter = if format == ExportFormat::Tsv { b'\t' } else { b',' };
            let mut wtr = WriterBuilder::new().delimiter(delimiter).from_writer(file);
            for row in rows {
                wtr.serialize(row).map_err(|e| write_err(e.to_string()))?;
            }
            wtr.flush().map_err(|e| write_err(e.to_string()))?;
        }
        ExportFormat::Txt => {
            let mut out = BufWriter::new(file);
            out.write_all(format_term_table(rows, rows.len()).as_bytes())
                .and_then(|_| out.flush())
                .map_err(|e| write_err(e.to_string()))?;
        }
    }
    Ok(path)
}

/// Render the first `top` rows as an aligned two-column table.
pub fn format_term_table(rows: &[TermCount], top: usize) -> String {
    let shown = &rows[..top.min(rows.len())];
    let width = shown.iter().map(|r| r.item.len()).max().unwrap_or(0).max(4);
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  count", "term");
    for row in shown {
        let _ = writeln!(out, "{:<width$}  {}", row.item, row.count);
    }
    out
}
