//! Pluggable root reduction.
//!
//! The pipeline only relies on the [`Stemmer`] contract: a deterministic, pure,
//! total function from a lowercase word to its root. Unknown words come back
//! unchanged. Three implementations ship with the crate:
//!
//! - [`IndonesianStemmer`]: affix stripping for Indonesian, accepting only
//!   roots found in its dictionary.
//! - [`SnowballStemmer`]: any `rust_stemmers` algorithm, for text in other languages.
//! - [`IdentityStemmer`]: leaves every word as it is.
//!
//! Plain closures `Fn(&str) -> String` are stemmers too.

use std::collections::HashSet;

use clap::ValueEnum;
use rust_stemmers::Algorithm;

use crate::resources::parse_word_list;

const ROOT_WORDS: &str = include_str!("../data/kata_dasar.txt");

/// Reduces one lowercase word to its root.
///
/// Implementations must be total and deterministic: the same word always maps
/// to the same root, and a word the stemmer does not know comes back unchanged.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Stem a token that may be a compound (`tidak_bagus`): each `_`-separated
/// part is stemmed on its own and the parts are re-joined, so stemming never
/// breaks a fused unit apart.
pub fn stem_token<S: Stemmer + ?Sized>(token: &str, stemmer: &S) -> String {
    if !token.contains('_') {
        return stemmer.stem(token);
    }
    token
        .split('_')
        .map(|part| {
            if part.is_empty() {
                String::new()
            } else {
                stemmer.stem(part)
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Adapter over the Snowball algorithms of `rust_stemmers`.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(algorithm),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Which stemmer the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StemmerKind {
    Indonesian,
    English,
    /// No stemming.
    #[value(alias = "none")]
    Identity,
}

impl StemmerKind {
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Indonesian => Box::new(IndonesianStemmer::new()),
            StemmerKind::English => Box::new(SnowballStemmer::new(Algorithm::English)),
            StemmerKind::Identity => Box::new(IdentityStemmer),
        }
    }
}

/// Dictionary-checked affix stripping for Indonesian.
///
/// A candidate root is accepted only when it appears in the root dictionary
/// (`data/kata_dasar.txt` by default). Suffixes come off first in the order
/// particle, possessive, derivational; then up to three prefixes are removed,
/// trying every recoding a nasal prefix allows (`menarik` -> `tarik`,
/// `memakai` -> `pakai`). When the fully stripped form yields nothing, less
/// stripped forms are tried. A word with no root in the dictionary comes back
/// unchanged, so the stemmer never invents a non-word.
#[derive(Debug, Clone)]
pub struct IndonesianStemmer {
    roots: HashSet<String>,
}

impl Default for IndonesianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl IndonesianStemmer {
    /// Stemmer over the built-in root dictionary.
    pub fn new() -> Self {
        Self::with_roots(parse_word_list(ROOT_WORDS))
    }

    /// Stemmer over exactly the given root dictionary.
    pub fn with_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            roots: roots
                .into_iter()
                .map(|r| r.as_ref().trim().to_lowercase())
                .filter(|r| !r.is_empty())
                .collect(),
        }
    }

    pub fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    /// Peel prefixes off `word`, at most `depth` layers deep, until a known root shows up.
    fn root_after_prefixes(&self, word: &str, depth: usize) -> Option<String> {
        if depth == 0 {
            return None;
        }
        let candidates = prefix_removals(word);
        if let Some(root) = candidates.iter().find(|c| self.is_root(c)) {
            return Some(root.clone());
        }
        candidates
            .iter()
            .find_map(|c| self.root_after_prefixes(c, depth - 1))
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, word: &str) -> String {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) || self.is_root(word) {
            return word.to_string();
        }

        // layers[0] is the word, then without particle, then without possessive
        let mut layers = vec![word];
        if let Some(rest) = strip_any_suffix(word, &PARTICLES) {
            layers.push(rest);
        }
        let innermost = layers[layers.len() - 1];
        if let Some(rest) = strip_any_suffix(innermost, &POSSESSIVES) {
            layers.push(rest);
        }
        let derived = derivational_removals(layers[layers.len() - 1]);

        if let Some(root) = layers[1..]
            .iter()
            .chain(derived.iter())
            .find(|form| self.is_root(form))
        {
            return root.to_string();
        }
        derived
            .iter()
            .chain(layers.iter().rev())
            .find_map(|form| self.root_after_prefixes(form, MAX_PREFIXES))
            .unwrap_or_else(|| word.to_string())
    }
}

const PARTICLES: [&str; 4] = ["kah", "lah", "pun", "tah"];
const POSSESSIVES: [&str; 3] = ["nya", "ku", "mu"];
const MAX_PREFIXES: usize = 3;
const MIN_ROOT_LEN: usize = 2;

fn strip_any_suffix<'a>(word: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .filter(|rest| rest.len() >= MIN_ROOT_LEN)
}

/// Forms left after removing `-kan`, `-an` or `-i`, most specific first.
fn derivational_removals(word: &str) -> Vec<&str> {
    ["kan", "an", "i"]
        .iter()
        .filter_map(|suffix| word.strip_suffix(suffix))
        .filter(|rest| rest.len() >= MIN_ROOT_LEN)
        .collect()
}

/// Every form `word` may take once its outermost prefix is removed.
///
/// Nasal prefixes absorb the first letter of the root, so those yield one
/// candidate per letter they may have replaced.
fn prefix_removals(word: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if let Some(rest) = word
        .strip_prefix("meng")
        .or_else(|| word.strip_prefix("peng"))
    {
        out.push(rest.to_string());
        if starts_with_vowel(rest) {
            out.push(format!("k{rest}"));
        }
    } else if let Some(rest) = word
        .strip_prefix("meny")
        .or_else(|| word.strip_prefix("peny"))
    {
        if starts_with_vowel(rest) {
            out.push(format!("s{rest}"));
            out.push(format!("ny{rest}"));
        }
    } else if let Some(rest) = word.strip_prefix("men").or_else(|| word.strip_prefix("pen")) {
        if starts_with_vowel(rest) {
            out.push(format!("t{rest}"));
            out.push(format!("n{rest}"));
        } else {
            out.push(rest.to_string());
        }
    } else if let Some(rest) = word.strip_prefix("mem").or_else(|| word.strip_prefix("pem")) {
        if starts_with_vowel(rest) {
            out.push(format!("p{rest}"));
            out.push(format!("m{rest}"));
        } else {
            out.push(rest.to_string());
        }
    } else if let Some(rest) = word.strip_prefix("me") {
        out.push(rest.to_string());
    } else if let Some(rest) = word.strip_prefix("per") {
        out.push(rest.to_string());
        if starts_with_vowel(rest) {
            out.push(format!("r{rest}"));
        }
    } else if word.starts_with("pelajar") {
        out.push(word[3..].to_string());
    } else if let Some(rest) = word.strip_prefix("pe") {
        out.push(rest.to_string());
    } else if let Some(rest) = word.strip_prefix("ber") {
        out.push(rest.to_string());
        if starts_with_vowel(rest) {
            out.push(format!("r{rest}"));
        }
    } else if word.starts_with("belajar") {
        out.push(word[3..].to_string());
    } else if let Some(rest) = word.strip_prefix("be") {
        // be- only before a consonant + `er` syllable, as in `bekerja`
        let bytes = rest.as_bytes();
        if bytes.first().is_some_and(|&b| !is_vowel(b)) && bytes.get(1..3) == Some(b"er".as_slice())
        {
            out.push(rest.to_string());
        }
    } else if let Some(rest) = word.strip_prefix("ter") {
        out.push(rest.to_string());
        if starts_with_vowel(rest) {
            out.push(format!("r{rest}"));
        }
    } else if let Some(rest) = ["di", "ke", "se"].iter().find_map(|p| word.strip_prefix(p)) {
        out.push(rest.to_string());
    }
    out.retain(|candidate| candidate.len() >= MIN_ROOT_LEN);
    out
}

fn starts_with_vowel(word: &str) -> bool {
    word.bytes().next().is_some_and(is_vowel)
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(word: &str) -> String {
        IndonesianStemmer::new().stem(word)
    }

    #[test]
    fn short_words_are_roots() {
        for w in ["bagus", "lambat", "game", "tidak", "main", "suka", "jelek"] {
            assert_eq!(id(w), w);
        }
    }

    #[test]
    fn first_order_prefixes() {
        assert_eq!(id("dimakan"), "makan");
        assert_eq!(id("membaca"), "baca");
        assert_eq!(id("menyapu"), "sapu");
        assert_eq!(id("menggunakan"), "guna");
        assert_eq!(id("mendengarkan"), "dengar");
    }

    #[test]
    fn second_order_prefixes() {
        assert_eq!(id("bermain"), "main");
        assert_eq!(id("bekerja"), "kerja");
        assert_eq!(id("permainan"), "main");
        assert_eq!(id("pelajaran"), "ajar");
    }

    #[test]
    fn particles_possessives_and_suffixes() {
        assert_eq!(id("bukunya"), "buku");
        assert_eq!(id("sayangnya"), "sayang");
        assert_eq!(id("bukanlah"), "bukan");
        assert_eq!(id("makanan"), "makan");
    }

    #[test]
    fn suffix_i_is_kept_after_s() {
        assert_eq!(id("aplikasi"), "aplikasi");
    }

    #[test]
    fn dictionary_roots_are_untouched() {
        for w in [
            "terima", "kecewa", "sekali", "masalah", "sekolah", "sampai", "mulai", "pakai",
            "selesai", "kemarin",
        ] {
            assert_eq!(id(w), w);
        }
    }

    #[test]
    fn unknown_words_come_back_unchanged() {
        assert_eq!(id("kenapa"), "kenapa");
        assert_eq!(id("gamenya"), "gamenya");
        let bare = IndonesianStemmer::with_roots(Vec::<String>::new());
        assert_eq!(bare.stem("kecewa"), "kecewa");
        assert_eq!(bare.stem("bermain"), "bermain");
    }

    #[test]
    fn nasal_prefixes_restore_the_first_letter() {
        assert_eq!(id("menarik"), "tarik");
        assert_eq!(id("menulis"), "tulis");
        assert_eq!(id("menunggu"), "tunggu");
        assert_eq!(id("memakai"), "pakai");
        assert_eq!(id("dipakai"), "pakai");
        assert_eq!(id("mengambil"), "ambil");
        assert_eq!(id("mengirim"), "kirim");
    }

    #[test]
    fn stripping_never_yields_a_non_root() {
        let s = IndonesianStemmer::new();
        for w in [
            "masalah", "sekolah", "menarik", "menulis", "menunggu", "memakai", "dipakai",
            "sampai", "mulai", "kenapa", "bermain", "permainannya", "mendengarkan",
        ] {
            let root = s.stem(w);
            assert!(root == w || s.is_root(&root), "{w} -> {root}");
        }
    }

    #[test]
    fn non_lowercase_ascii_passes_through() {
        assert_eq!(id("tidak_bagus"), "tidak_bagus");
        assert_eq!(id("Membaca"), "Membaca");
        assert_eq!(id(""), "");
    }

    #[test]
    fn compound_tokens_are_stemmed_per_part() {
        let s = IndonesianStemmer::new();
        assert_eq!(stem_token("tidak_bermain", &s), "tidak_main");
        assert_eq!(stem_token("membaca", &s), "baca");
    }

    #[test]
    fn closures_are_stemmers() {
        let upper = |w: &str| w.to_uppercase();
        assert_eq!(stem_token("tidak_bagus", &upper), "TIDAK_BAGUS");
    }

    #[test]
    fn kinds_build_working_stemmers() {
        assert_eq!(StemmerKind::Identity.build().stem("bermain"), "bermain");
        assert_eq!(StemmerKind::Indonesian.build().stem("bermain"), "main");
        assert_eq!(StemmerKind::English.build().stem("running"), "run");
    }
}
