//! Lexical resources shared by every pipeline run: the stopword set, the slang
//! map and the tuning knobs of the filter stage.
//!
//! A [`LexicalResources`] value is assembled once through [`ResourcesBuilder`]
//! and never mutated afterwards, so a single instance can be borrowed by any
//! number of concurrent pipeline invocations.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::negation::NegationTagger;

const BASE_STOPWORDS: &str = include_str!("../data/stopwords_id.txt");
const CUSTOM_STOPWORDS: &str = include_str!("../data/stopwords_custom.txt");
const BUILTIN_SLANG: &str = include_str!("../data/slang_id.tsv");

/// Tuning parameters of the normalizer that are empirical rather than structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizerConfig {
    /// Word that fuses with its successor (`tidak bagus` -> `tidak_bagus`).
    pub negation_marker: String,
    /// Tokens with fewer characters than this are dropped after slang substitution.
    pub min_token_len: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            negation_marker: "tidak".to_string(),
            min_token_len: 4,
        }
    }
}

/// Immutable stopword set, slang map and filter configuration.
#[derive(Debug, Clone)]
pub struct LexicalResources {
    stopwords: HashSet<String>,
    slang: HashMap<String, String>,
    config: NormalizerConfig,
    negation: NegationTagger,
}

impl LexicalResources {
    /// Start from empty tables and the default configuration.
    pub fn builder() -> ResourcesBuilder {
        ResourcesBuilder::default()
    }

    /// The built-in Indonesian tables: base stopwords, the slang/filler
    /// extension list and the slang correction map.
    pub fn indonesian() -> Result<Self, String> {
        Self::builder().with_indonesian_defaults()?.build()
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Canonical replacement for a slang surface form, if one is known.
    pub fn slang_for(&self, token: &str) -> Option<&str> {
        self.slang.get(token).map(String::as_str)
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn negation(&self) -> &NegationTagger {
        &self.negation
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn slang_count(&self) -> usize {
        self.slang.len()
    }
}

/// Collects tables and settings, then freezes them into [`LexicalResources`].
#[derive(Debug, Clone, Default)]
pub struct ResourcesBuilder {
    stopwords: HashSet<String>,
    slang: HashMap<String, String>,
    config: NormalizerConfig,
}

impl ResourcesBuilder {
    /// Add the built-in Indonesian stopwords, custom fillers and slang map.
    pub fn with_indonesian_defaults(self) -> Result<Self, String> {
        self.stopwords(parse_word_list(BASE_STOPWORDS))
            .stopwords(parse_word_list(CUSTOM_STOPWORDS))
            .slang_table(BUILTIN_SLANG)
            .map_err(|e| format!("built-in slang table: {e}"))
    }

    /// Add every pair of a slang table; one malformed line rejects the whole table.
    pub fn slang_table(self, content: &str) -> Result<Self, String> {
        Ok(self.slang(parse_slang_table(content)?))
    }

    /// Add stopwords. Entries are trimmed and lower-cased; blanks are ignored.
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.stopwords.insert(word);
            }
        }
        self
    }

    /// Add slang corrections. Later entries override earlier ones for the same key.
    /// A multi-word replacement is fused with `_` into one compound token.
    pub fn slang<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (slang, canonical) in pairs {
            let slang = slang.as_ref().trim().to_lowercase();
            let canonical = fuse_words(canonical.as_ref());
            if !slang.is_empty() && !canonical.is_empty() {
                self.slang.insert(slang, canonical);
            }
        }
        self
    }

    pub fn min_token_len(mut self, min_token_len: usize) -> Self {
        self.config.min_token_len = min_token_len;
        self
    }

    pub fn negation_marker(mut self, marker: &str) -> Self {
        self.config.negation_marker = marker.trim().to_lowercase();
        self
    }

    pub fn config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Freeze the collected tables. Fails only when the negation marker cannot
    /// survive tokenization (it must be ASCII letters).
    pub fn build(self) -> Result<LexicalResources, String> {
        let negation = NegationTagger::new(&self.config.negation_marker)?;
        debug!(
            "lexical resources ready: {} stopwords, {} slang entries, min token length {}",
            self.stopwords.len(),
            self.slang.len(),
            self.config.min_token_len
        );
        Ok(LexicalResources {
            stopwords: self.stopwords,
            slang: self.slang,
            config: self.config,
            negation,
        })
    }
}

/// Parse a word list: one entry per line, `#` starts a comment line.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Parse a slang table with one `slang<TAB>canonical` or `slang,canonical` pair per line.
pub fn parse_slang_table(content: &str) -> Result<Vec<(String, String)>, String> {
    slang_entries(content).collect()
}

/// Load an additional stopword file (.txt, one word per line).
pub fn load_stopword_file(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Read stopword file {} failed: {e}", path.display()))?;
    Ok(parse_word_list(&content))
}

/// Load an additional slang table (see [`parse_slang_table`] for the format).
pub fn load_slang_file(path: &Path) -> Result<Vec<(String, String)>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Read slang file {} failed: {e}", path.display()))?;
    parse_slang_table(&content).map_err(|e| format!("{}: {e}", path.display()))
}

// ---- Internal helpers ----

fn slang_entries(content: &str) -> impl Iterator<Item = Result<(String, String), String>> + '_ {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            let (slang, canonical) = line
                .split_once('\t')
                .or_else(|| line.split_once(','))
                .ok_or_else(|| format!("line {line_no}: expected `slang<TAB>canonical`"))?;
            let (slang, canonical) = (slang.trim(), canonical.trim());
            if slang.is_empty() || canonical.is_empty() {
                return Err(format!("line {line_no}: empty slang or canonical form"));
            }
            Ok((slang.to_string(), canonical.to_string()))
        })
}

fn fuse_words(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
