///Expands stemmed tokens into unigrams, then contiguous bigrams, then contiguous trigrams.
///N-gram parts are joined with `_`, so every term stays a single whitespace-free word.
/// # Example
/// ```
/// use ulasan_norm::expand;
/// let stems = vec!["game".to_string(), "lambat".to_string(), "tidak_bagus".to_string()];
/// let terms = expand(stems);
/// assert_eq!(
///     terms,
///     vec![
///         "game",
///         "lambat",
///         "tidak_bagus",
///         "game_lambat",
///         "lambat_tidak_bagus",
///         "game_lambat_tidak_bagus",
///     ]
/// );
/// ```
pub fn expand(stems: Vec<String>) -> Vec<String> {
    let bigrams = join_windows(&stems, 2);
    let trigrams = join_windows(&stems, 3);
    let mut terms = stems;
    terms.reserve(bigrams.len() + trigrams.len());
    terms.extend(bigrams);
    terms.extend(trigrams);
    terms
}

///Sliding window of size `n` over `tokens`, each window joined with `_`.
///Yields `max(0, len - n + 1)` items; no skip-grams.
pub fn join_windows(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|window| window.join("_")).collect()
}
