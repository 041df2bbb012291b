///Splits text into lowercase word tokens.
///Every char outside ASCII letters, `_` and whitespace becomes a space first, so the
///underscores of fused negations survive while punctuation and accented letters split words.
/// # Example
/// ```
/// use ulasan_norm::tokenize;
/// let tokens = tokenize("Gamenya LAGGY, tidak_bagus!!");
/// assert_eq!(tokens, vec!["gamenya", "laggy", "tidak_bagus"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}
