// Text normalization, the first stage of the comparison pipeline.
//
// Collapses line breaks, strips everything outside the allow-list (CJK
// ideographs, ASCII letters and digits, whitespace, and a small set of
// ASCII/CJK punctuation), lowercases, then drops stop words at the
// whitespace-token level. The output is a fixed point: normalizing it again
// returns the same string.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::stopwords::StopWords;

/// Punctuation that survives normalization, ASCII and full-width CJK forms.
pub const ALLOWED_PUNCTUATION: &str = ".,!?;:，。！？；：";

fn line_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\r\n]+").expect("line-break pattern is valid"))
}

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"[^\x{{4E00}}-\x{{9FA5}}a-zA-Z0-9\s{ALLOWED_PUNCTUATION}]"
        ))
        .expect("allow-list pattern is valid")
    })
}

/// Normalize raw document text.
///
/// Never fails; empty input (or input made entirely of disallowed
/// characters and stop words) yields an empty string.
pub fn normalize(text: &str, stop_words: &StopWords) -> String {
    let flattened = line_breaks().replace_all(text, " ");
    let filtered = disallowed().replace_all(&flattened, "");
    let lowered = filtered.to_lowercase();

    lowered
        .split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// True if the character may appear in `normalize` output.
///
/// Describes the output, not the filter pattern: tokens are rejoined with
/// single spaces, so no whitespace other than ASCII survives.
pub fn is_allowed_char(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}')
        || c.is_ascii_alphanumeric()
        || c.is_ascii_whitespace()
        || ALLOWED_PUNCTUATION.contains(c)
}
