//! Removal of URLs, mentions/hashtags, digits and emoji from raw text.
//!
//! Emoji are recognised through Unicode property tables (`Extended_Pictographic`,
//! `Emoji_Presentation`, `Emoji_Modifier`, `Regional_Indicator`) plus the
//! joiners that glue emoji sequences together, rather than a fixed list of
//! code points, so new emoji blocks are covered whenever the tables are.

use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("valid URL pattern"));

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+|#\w+").expect("valid mention pattern"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\p{Extended_Pictographic}\p{Emoji_Presentation}\p{Emoji_Modifier}\p{Regional_Indicator}\u{200D}\u{20E3}\u{FE0E}\u{FE0F}\u{E0020}-\u{E007F}]+",
    )
    .expect("valid emoji pattern")
});

/// Clean an optional text field; an absent field cleans to the empty string.
pub fn clean(raw: Option<&str>) -> String {
    raw.map(clean_text).unwrap_or_default()
}

/// Strip URLs, then mentions and hashtags, then digits, then emoji.
///
/// Removing one kind of noise can splice a new one together (`ht1tp://x`
/// loses its digit and becomes a URL), so the passes repeat until nothing
/// more is removed. Every pass only shrinks the text, which bounds the loop.
pub fn clean_text(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// True for any code point the emoji pass removes.
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI.is_match(c.encode_utf8(&mut buf))
}

fn clean_once(text: &str) -> String {
    let text = URL.replace_all(text, "");
    let text = MENTION.replace_all(&text, "");
    let text = DIGITS.replace_all(&text, "");
    EMOJI.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input_is_empty() {
        assert_eq!(clean(None), "");
        assert_eq!(clean(Some("")), "");
    }

    #[test]
    fn strips_urls() {
        assert_eq!(clean_text("cek http://x.co/a?b=1 ya"), "cek  ya");
        assert_eq!(clean_text("link www.contoh.com sekarang"), "link  sekarang");
        assert_eq!(clean_text("https://t.co"), "");
    }

    #[test]
    fn strips_mentions_and_hashtags() {
        assert_eq!(clean_text("@budi keren #fyp parah"), " keren  parah");
    }

    #[test]
    fn strips_digits() {
        assert_eq!(clean_text("level 99 susah2"), "level  susah");
    }

    #[test]
    fn strips_emoji_by_property() {
        assert_eq!(clean_text("bagus 😡🔥 banget"), "bagus  banget");
        // skin tone modifier, ZWJ family, flag, keycap
        assert_eq!(clean_text("a👍🏽b"), "ab");
        assert_eq!(clean_text("a👨‍👩‍👧b"), "ab");
        assert_eq!(clean_text("a🇮🇩b"), "ab");
        assert_eq!(clean_text("a❤️b"), "ab");
        // recent additions still fall inside the pictographic ranges
        assert_eq!(clean_text("a🫠b"), "ab");
    }

    #[test]
    fn keeps_letters_and_ascii_punctuation() {
        assert_eq!(clean_text("Tidak bagus!! #"), "Tidak bagus!! #");
        assert!(!is_emoji('#'));
        assert!(!is_emoji('a'));
        assert!(is_emoji('😡'));
    }

    #[test]
    fn spliced_noise_is_removed_too() {
        assert_eq!(clean_text("ht1tp://x.co"), "");
        assert_eq!(clean_text("#😀tag"), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let samples = [
            "Gamenya laggy bgt, tidak bagus!! 😡 http://x.co",
            "w1ww.spam.id @us3r #t4g 😂😂 123",
            "@😀mention ht9tp:/ok",
            "biasa aja",
        ];
        for s in samples {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "not idempotent for {s:?}");
        }
    }
}
