use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::NormalizedResult;
use crate::resources::NormalizerConfig;

/// One row of a term-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub item: String,
    pub count: usize,
}

///Counts every term of every record. Map-reduce over records with rayon, so the result is
///independent of thread scheduling.
/// # Example
/// ```
/// use ulasan_norm::{NormalizedResult, count_terms};
/// let a = NormalizedResult { terms: vec!["seru".into(), "game".into()], ..Default::default() };
/// let b = NormalizedResult { terms: vec!["seru".into()], ..Default::default() };
/// let counted = count_terms(&[a, b]);
/// assert_eq!(counted["seru"], 2);
/// assert_eq!(counted["game"], 1);
/// ```
pub fn count_terms(results: &[NormalizedResult]) -> HashMap<String, usize> {
    results
        .par_iter()
        .fold(HashMap::new, |mut frequency: HashMap<String, usize>, result| {
            for term in &result.terms {
                *frequency.entry(term.to_owned()).or_insert(0) += 1;
            }
            frequency
        })
        .reduce(HashMap::new, |mut left, right| {
            for (term, count) in right {
                *left.entry(term).or_insert(0) += count;
            }
            left
        })
}

///Sort a term-frequency map into rows, most frequent first; ties are broken alphabetically.
/// # Example
/// ```
/// use ulasan_norm::sort_map_to_vec;
/// use std::collections::HashMap;
/// let mut terms_map = HashMap::new();
/// terms_map.insert("seru".to_string(), 1);
/// terms_map.insert("game".to_string(), 3);
/// terms_map.insert("bagus".to_string(), 1);
/// let rows = sort_map_to_vec(terms_map);
/// let order: Vec<&str> = rows.iter().map(|r| r.item.as_str()).collect();
/// assert_eq!(order, vec!["game", "bagus", "seru"]);
/// ```
pub fn sort_map_to_vec(frequency: HashMap<String, usize>) -> Vec<TermCount> {
    let mut rows: Vec<TermCount> = frequency
        .into_iter()
        .map(|(item, count)| TermCount { item, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
    rows
}

/// Descriptive numbers about one run over a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    /// Rows read from the source.
    pub records_in: usize,
    /// Rows left after dropping empty and duplicate texts.
    pub records_unique: usize,
    /// Rows whose normalization produced at least one term.
    pub records_kept: usize,
    /// Mean number of whitespace-separated words in the raw text of kept rows.
    pub mean_words: f64,
    /// Distinct terms across kept rows.
    pub distinct_terms: usize,
    pub config: NormalizerConfig,
}

impl CorpusSummary {
    /// `kept_texts` are the raw texts of the rows that produced terms.
    pub fn new(
        records_in: usize,
        records_unique: usize,
        kept_texts: &[&str],
        distinct_terms: usize,
        config: NormalizerConfig,
    ) -> Self {
        let words: usize = kept_texts
            .iter()
            .map(|text| text.split_whitespace().count())
            .sum();
        let mean_words = if kept_texts.is_empty() {
            0.0
        } else {
            words as f64 / kept_texts.len() as f64
        };
        Self {
            records_in,
            records_unique,
            records_kept: kept_texts.len(),
            mean_words,
            distinct_terms,
            config,
        }
    }
}
