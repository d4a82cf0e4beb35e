use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-empty segments between runs of `.`, `!` and `?`.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK_RE
        .split(text)
        .filter(|segment| !segment.is_empty())
        .count()
}

/// Average words per sentence, rounded half up. Not a standard index.
pub fn readability_score(text: &str) -> u32 {
    let words = word_count(text) as f64;
    let sentences = sentence_count(text).max(1) as f64;
    (words / sentences + 0.5).floor() as u32
}
