use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffWord {
    pub word: String,
    pub changed: bool,
}

/// Word-level before/after view of a rewrite. `original` marks words that no
/// longer appear in the rewrite; `modified` marks words the original lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    pub original: Vec<DiffWord>,
    pub modified: Vec<DiffWord>,
}

impl WordDiff {
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        changed_words(&self.original)
    }

    pub fn added(&self) -> impl Iterator<Item = &str> {
        changed_words(&self.modified)
    }
}

/// Containment check per space-separated word, ignoring `.` and `,`. A word
/// counts as kept if it occurs anywhere in the other text, even mid-word.
pub fn word_diff(original: &str, modified: &str) -> WordDiff {
    WordDiff {
        original: mark_words(original, modified),
        modified: mark_words(modified, original),
    }
}

fn mark_words(source: &str, other: &str) -> Vec<DiffWord> {
    source
        .split(' ')
        .map(|word| {
            let bare: String = word.chars().filter(|c| *c != '.' && *c != ',').collect();
            DiffWord {
                word: word.to_string(),
                changed: !other.contains(bare.as_str()),
            }
        })
        .collect()
}

fn changed_words(words: &[DiffWord]) -> impl Iterator<Item = &str> {
    words
        .iter()
        .filter(|entry| entry.changed)
        .map(|entry| entry.word.as_str())
}
