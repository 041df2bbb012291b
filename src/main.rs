#![forbid(unsafe_code)]
//! # Ulasan Norm CLI
//!
//! Command-line front end for the `ulasan_norm` crate. It loads a CSV of
//! social-media comments, normalizes the text column into canonical terms and
//! writes the cleaned dataset plus a term-frequency table.
//!
//! ## Features
//! - Drops empty and duplicate texts before normalizing.
//! - Extra stopword and slang files on top of the built-in Indonesian tables.
//! - Configurable negation marker, minimum token length and stemmer.
//! - Term frequencies exported as txt, csv, tsv or json.
//!
//! ## Example
//! ```bash
//! cargo run --release -- comments.csv --text-column text --export-format json
//! ```
//!
//! Set `RUST_LOG=debug` for per-stage details. See `--help` for all options.

use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use ulasan_norm::{
    CorpusSummary, ExportFormat, LexicalResources, NormalizedResult, RawRecord, StemmerKind,
    count_terms, dedup_records, export_term_frequencies, format_term_table, load_slang_file,
    load_stopword_file, normalize_all, read_records, sort_map_to_vec, timestamped_path,
    write_cleaned,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// CSV file with a header row
    path: String,

    /// Name of the column holding the raw text
    #[arg(long, default_value = "text")]
    text_column: String,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<String>,

    /// Optional path to additional slang file (`slang<TAB>canonical` per line)
    #[arg(long)]
    slang: Option<String>,

    /// Word fused with its successor (e.g. "tidak bagus" -> "tidak_bagus")
    #[arg(long, default_value = "tidak")]
    negation: String,

    /// Tokens shorter than this are dropped
    #[arg(long, default_value_t = 4)]
    min_token_len: usize,

    /// Root reduction to apply to surviving tokens
    #[arg(long, value_enum, default_value = "indonesian")]
    stemmer: StemmerKind,

    /// Output format for the term-frequency table (txt, csv, tsv, json)
    #[arg(long, value_enum, default_value = "csv")]
    export_format: ExportFormat,

    /// Directory for output files (default: current directory)
    #[arg(long)]
    out_dir: Option<String>,

    /// Number of most frequent terms printed to stdout
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Keep rows whose text duplicates an earlier row
    #[arg(long, default_value_t = false)]
    keep_duplicates: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            info!(
                "kept {} of {} records ({} unique)",
                summary.records_kept, summary.records_in, summary.records_unique
            );
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<CorpusSummary, String> {
    let resources = build_resources(cli)?;
    let stemmer = cli.stemmer.build();

    let input = Path::new(&cli.path);
    let table = read_records(input, &cli.text_column)?;
    let records_in = table.records.len();
    let records: Vec<RawRecord> = if cli.keep_duplicates {
        table
            .records
            .into_iter()
            .filter(|r| r.text.is_some())
            .collect()
    } else {
        dedup_records(table.records)
    };

    let texts: Vec<Option<&str>> = records.iter().map(|r| r.text.as_deref()).collect();
    let results = normalize_all(&texts, &resources, stemmer.as_ref());

    let kept: Vec<(&RawRecord, &NormalizedResult)> = records
        .iter()
        .zip(results.iter())
        .filter(|(_, result)| !result.is_empty())
        .collect();

    let out_dir = cli
        .out_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .map_err(|e| format!("Create {} failed: {e}", out_dir.display()))?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());

    let cleaned_path = timestamped_path(&out_dir, &stem, "cleaned", "csv");
    let written = write_cleaned(&cleaned_path, &table.headers, &kept)?;
    info!("wrote {} rows to {}", written, cleaned_path.display());

    // empty results carry no terms, so counting over all of them equals counting the kept rows
    let frequencies = sort_map_to_vec(count_terms(&results));
    let freq_path = export_term_frequencies(&out_dir, &stem, cli.export_format, &frequencies)?;
    info!("wrote term frequencies to {}", freq_path.display());

    let kept_texts: Vec<&str> = kept
        .iter()
        .filter_map(|(record, _)| record.text.as_deref())
        .collect();
    let summary = CorpusSummary::new(
        records_in,
        records.len(),
        &kept_texts,
        frequencies.len(),
        resources.config().clone(),
    );
    let summary_path = timestamped_path(&out_dir, &stem, "summary", "json");
    let summary_json = serde_json::to_string_pretty(&summary)
        .map_err(|e| format!("Serialize summary failed: {e}"))?;
    std::fs::write(&summary_path, summary_json)
        .map_err(|e| format!("Write {} failed: {e}", summary_path.display()))?;

    println!(
        "Records: {} read, {} unique, {} with terms (mean {:.2} words)",
        summary.records_in, summary.records_unique, summary.records_kept, summary.mean_words
    );
    println!("{}", format_term_table(&frequencies, cli.top));
    Ok(summary)
}

fn build_resources(cli: &Cli) -> Result<LexicalResources, String> {
    let mut builder = LexicalResources::builder()
        .with_indonesian_defaults()?
        .negation_marker(&cli.negation)
        .min_token_len(cli.min_token_len);
    if let Some(path) = &cli.stopwords {
        builder = builder.stopwords(load_stopword_file(Path::new(path))?);
    }
    if let Some(path) = &cli.slang {
        builder = builder.slang(load_slang_file(Path::new(path))?);
    }
    builder.build()
}
