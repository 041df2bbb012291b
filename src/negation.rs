use std::borrow::Cow;

use regex::{Captures, Regex};

/// Fuses a negation marker with the word that follows it, so `tidak bagus`
/// becomes the single token `tidak_bagus` and later filtering cannot separate
/// the negation from its scope.
#[derive(Debug, Clone)]
pub struct NegationTagger {
    marker: String,
    pattern: Regex,
}

impl NegationTagger {
    /// `marker` must be a non-empty run of ASCII letters; anything else would be
    /// mangled by the tokenizer after fusion.
    pub fn new(marker: &str) -> Result<Self, String> {
        if marker.is_empty() || !marker.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "Invalid negation marker {marker:?}: expected ASCII letters only"
            ));
        }
        let marker = marker.to_ascii_lowercase();
        let pattern = Regex::new(&format!(r"(?i)\b{}\s+(\w+)", regex::escape(&marker)))
            .map_err(|e| format!("Compile negation pattern failed: {e}"))?;
        Ok(Self { marker, pattern })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Leftmost-first, non-overlapping; each marker consumes exactly one word.
    /// A marker without a following word is left untouched.
    pub fn tag<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern
            .replace_all(text, |caps: &Captures| format!("{}_{}", self.marker, &caps[1]))
    }
}

/// Free-function form of [`NegationTagger::tag`].
pub fn tag_negation(text: &str, tagger: &NegationTagger) -> String {
    tagger.tag(text).into_owned()
}
