use crate::resources::LexicalResources;

/// Replace slang forms with their canonical words, then drop stopwords and short tokens.
///
/// Substitution runs first so a slang form that expands to a stopword
/// (`bgt` -> `banget`) is still removed. The length floor is a blunt
/// heuristic: meaningful words of 1-3 letters are dropped along with fillers.
pub fn normalize_filter(tokens: Vec<String>, resources: &LexicalResources) -> Vec<String> {
    let min_len = resources.config().min_token_len;
    tokens
        .into_iter()
        .map(|token| match resources.slang_for(&token) {
            Some(canonical) => canonical.to_string(),
            None => token,
        })
        .filter(|token| !resources.is_stopword(token) && token.chars().count() >= min_len)
        .collect()
}
