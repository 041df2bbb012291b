//! Normalization of noisy Indonesian social-media text into a canonical bag of terms.
//!
//! Every record runs through the same chain of pure stages:
//!
//! raw text -> [`clean`] -> [`tag_negation`] -> [`tokenize`] -> [`normalize_filter`]
//! -> [`Stemmer`] -> [`expand`] -> space-joined term string.
//!
//! The only shared state is an immutable [`LexicalResources`] value, so records
//! can be normalized in parallel ([`normalize_all`]) without any locking.

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

mod clean;
mod export;
mod filter;
mod negation;
mod ngram;
mod records;
mod resources;
mod stats;
mod stem;
mod tokenize;

pub use clean::{clean, clean_text, is_emoji};
pub use export::{ExportFormat, export_term_frequencies, format_term_table, timestamped_path};
pub use filter::normalize_filter;
pub use negation::{NegationTagger, tag_negation};
pub use ngram::{expand, join_windows};
pub use records::{
    RawRecord, RecordTable, dedup_records, read_records, read_records_from, write_cleaned,
};
pub use resources::{
    LexicalResources, NormalizerConfig, ResourcesBuilder, load_slang_file, load_stopword_file,
    parse_slang_table, parse_word_list,
};
pub use stats::{CorpusSummary, TermCount, count_terms, sort_map_to_vec};
pub use stem::{
    IdentityStemmer, IndonesianStemmer, SnowballStemmer, Stemmer, StemmerKind, stem_token,
};
pub use tokenize::tokenize;

/// Outcome of normalizing one record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NormalizedResult {
    /// Stemmed tokens that survived filtering, in input order.
    pub tokens: Vec<String>,
    /// Unigrams, then bigrams, then trigrams.
    pub terms: Vec<String>,
    /// `terms` joined by single spaces.
    pub joined: String,
}

impl NormalizedResult {
    /// Records that normalize to nothing should be left out of any analysis.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Normalize one text into its joined term string.
///
/// # Example
/// ```
/// use ulasan_norm::{IndonesianStemmer, LexicalResources, normalize};
/// let resources = LexicalResources::indonesian().unwrap();
/// let out = normalize(Some("Barang ini tidak bagus"), &resources, &IndonesianStemmer::new());
/// assert_eq!(out, "barang tidak_bagus barang_tidak_bagus");
/// ```
pub fn normalize<S: Stemmer + ?Sized>(
    raw_text: Option<&str>,
    resources: &LexicalResources,
    stemmer: &S,
) -> String {
    normalize_record(raw_text, resources, stemmer).joined
}

/// Normalize one text, keeping the token list and the term list alongside the joined form.
pub fn normalize_record<S: Stemmer + ?Sized>(
    raw_text: Option<&str>,
    resources: &LexicalResources,
    stemmer: &S,
) -> NormalizedResult {
    let cleaned = clean(raw_text);
    let tagged = resources.negation().tag(&cleaned);
    let tokens = tokenize(&tagged);
    let stems: Vec<String> = normalize_filter(tokens, resources)
        .iter()
        .map(|token| stem_token(token, stemmer))
        .collect();
    let terms = expand(stems.clone());
    let joined = terms.join(" ");
    NormalizedResult {
        tokens: stems,
        terms,
        joined,
    }
}

/// Normalize many texts in parallel. Output order matches input order.
pub fn normalize_all<S: Stemmer + ?Sized>(
    texts: &[Option<&str>],
    resources: &LexicalResources,
    stemmer: &S,
) -> Vec<NormalizedResult> {
    let results: Vec<NormalizedResult> = texts
        .par_iter()
        .map(|text| normalize_record(*text, resources, stemmer))
        .collect();
    debug!(
        "normalized {} records, {} without terms",
        results.len(),
        results.iter().filter(|r| r.is_empty()).count()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> LexicalResources {
        LexicalResources::indonesian().unwrap()
    }

    #[test]
    fn end_to_end_noisy_comment() {
        let out = normalize(
            Some("Gamenya laggy bgt, tidak bagus!! 😡 http://x.co"),
            &resources(),
            &IdentityStemmer,
        );
        assert_eq!(
            out,
            "game lambat tidak_bagus game_lambat lambat_tidak_bagus game_lambat_tidak_bagus"
        );
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        let res = resources();
        for text in [None, Some(""), Some("   \n\t"), Some("ya sih 😂 123")] {
            let r = normalize_record(text, &res, &IdentityStemmer);
            assert!(r.is_empty());
            assert_eq!(r.joined, "");
        }
    }

    #[test]
    fn record_keeps_tokens_and_terms() {
        let r = normalize_record(
            Some("bermain game seru"),
            &resources(),
            &IndonesianStemmer::new(),
        );
        assert_eq!(r.tokens, vec!["main", "game", "seru"]);
        assert_eq!(r.terms.len(), 3 + 2 + 1);
        assert_eq!(r.joined, r.terms.join(" "));
    }

    #[test]
    fn parallel_matches_sequential() {
        let res = resources();
        let stemmer = IndonesianStemmer::new();
        let texts = vec![
            Some("tidak bagus sama sekali"),
            None,
            Some("gamenya seru banget @admin"),
            Some("ngelag terus, tolong diperbaiki"),
        ];
        let parallel = normalize_all(&texts, &res, &stemmer);
        let sequential: Vec<_> = texts
            .iter()
            .map(|t| normalize_record(*t, &res, &stemmer))
            .collect();
        assert_eq!(parallel, sequential);
    }
}
