//! Capitalised-phrase entity heuristic.
//!
//! A candidate is a run of words shaped like `Xxxx`, joined by single
//! whitespace characters. Candidates that start the text or follow a `". "`
//! boundary are ignored so ordinary sentence capitalisation does not register.
//! Word boundaries are ASCII (`[A-Za-z0-9_]`), so an accented letter ends a
//! word the same way punctuation does.

use std::collections::HashSet;

static STOPWORDS: &[&str] = &["The", "And", "But", "For", "With"];
const MIN_ENTITY_CHARS: usize = 4;

/// All distinct entities in first-seen order. Callers truncate as needed.
pub fn extract_entities(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    for candidate in capitalized_runs(text) {
        if !seen.insert(candidate) {
            continue;
        }
        if candidate.chars().count() < MIN_ENTITY_CHARS || STOPWORDS.contains(&candidate) {
            continue;
        }
        entities.push(candidate.to_string());
    }

    entities
}

fn capitalized_runs(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map(|(byte, _)| *byte).unwrap_or(text.len());

    let mut runs = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        if can_start(&chars, i) {
            if let Some(end) = run_end(&chars, i) {
                runs.push(&text[byte_at(i)..byte_at(end)]);
                i = end;
                continue;
            }
        }
        i += 1;
    }
    runs
}

fn can_start(chars: &[(usize, char)], i: usize) -> bool {
    if i == 0 || !chars[i].1.is_ascii_uppercase() {
        return false;
    }
    let prev = chars[i - 1].1;
    if is_word_char(prev) {
        return false;
    }
    !(i >= 2 && is_space(prev) && chars[i - 2].1 == '.')
}

/// End index (exclusive, in chars) of the longest run starting at `start`
/// whose last word sits on a word boundary.
fn run_end(chars: &[(usize, char)], start: usize) -> Option<usize> {
    let first = word_end(chars, start)?;
    let mut ends = vec![first];

    loop {
        let last = ends[ends.len() - 1];
        let joined = chars.get(last).map(|(_, c)| is_space(*c)).unwrap_or(false);
        if !joined {
            break;
        }
        match word_end(chars, last + 1) {
            Some(end) => ends.push(end),
            None => break,
        }
    }

    ends.into_iter()
        .rev()
        .find(|end| chars.get(*end).map(|(_, c)| !is_word_char(*c)).unwrap_or(true))
}

/// `[A-Z][a-z]+` starting at `start`.
fn word_end(chars: &[(usize, char)], start: usize) -> Option<usize> {
    match chars.get(start) {
        Some((_, c)) if c.is_ascii_uppercase() => {}
        _ => return None,
    }
    let mut end = start + 1;
    while chars.get(end).map(|(_, c)| c.is_ascii_lowercase()).unwrap_or(false) {
        end += 1;
    }
    if end == start + 1 {
        None
    } else {
        Some(end)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
