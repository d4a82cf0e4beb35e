use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::sentiment::{SentimentError, SentimentScore, SentimentScorer};

// AFINN-165 style valences, -5..=5. A subset tuned for news copy.
static AFINN: &[(&str, i32)] = &[
    // Positive
    ("abundant", 1),
    ("accomplish", 2),
    ("accomplished", 2),
    ("achievement", 2),
    ("admire", 3),
    ("admired", 3),
    ("agree", 1),
    ("agreed", 1),
    ("amazing", 4),
    ("applaud", 2),
    ("applauded", 2),
    ("appreciate", 2),
    ("approve", 2),
    ("approved", 2),
    ("awesome", 4),
    ("beautiful", 3),
    ("benefit", 2),
    ("benefits", 2),
    ("best", 3),
    ("better", 2),
    ("boost", 1),
    ("boosted", 1),
    ("breakthrough", 3),
    ("brilliant", 4),
    ("calm", 2),
    ("celebrate", 3),
    ("celebrated", 3),
    ("champion", 2),
    ("cheer", 2),
    ("clean", 2),
    ("confident", 2),
    ("cool", 1),
    ("courage", 2),
    ("creative", 2),
    ("delight", 3),
    ("delighted", 3),
    ("easy", 1),
    ("effective", 2),
    ("encourage", 2),
    ("encouraged", 2),
    ("energetic", 2),
    ("enjoy", 2),
    ("enthusiastic", 3),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fair", 2),
    ("fantastic", 4),
    ("favorite", 2),
    ("fine", 2),
    ("free", 1),
    ("fresh", 1),
    ("friendly", 2),
    ("fun", 4),
    ("gain", 2),
    ("gains", 2),
    ("generous", 2),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("growth", 2),
    ("happy", 3),
    ("healthy", 2),
    ("help", 2),
    ("helped", 2),
    ("helpful", 2),
    ("hero", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("impressed", 3),
    ("impressive", 3),
    ("improve", 2),
    ("improved", 2),
    ("improvement", 2),
    ("innovative", 2),
    ("interesting", 2),
    ("joy", 3),
    ("kind", 2),
    ("like", 2),
    ("liked", 2),
    ("love", 3),
    ("loved", 3),
    ("lucky", 3),
    ("nice", 3),
    ("optimistic", 2),
    ("outstanding", 5),
    ("peace", 2),
    ("perfect", 3),
    ("pleased", 3),
    ("popular", 3),
    ("positive", 2),
    ("praise", 3),
    ("praised", 3),
    ("progress", 2),
    ("promising", 2),
    ("proud", 2),
    ("reward", 2),
    ("rewarding", 2),
    ("safe", 1),
    ("secure", 2),
    ("smart", 1),
    ("solid", 2),
    ("stable", 2),
    ("strong", 2),
    ("success", 2),
    ("successful", 3),
    ("superb", 5),
    ("support", 2),
    ("supported", 2),
    ("thank", 2),
    ("thrilled", 5),
    ("top", 2),
    ("triumph", 4),
    ("trust", 1),
    ("useful", 2),
    ("valuable", 2),
    ("win", 4),
    ("winner", 4),
    ("wins", 4),
    ("won", 3),
    ("wonderful", 4),
    ("wow", 4),
    // Negative
    ("abuse", -3),
    ("accident", -2),
    ("accused", -2),
    ("afraid", -2),
    ("alarm", -2),
    ("alarming", -2),
    ("anger", -3),
    ("angry", -3),
    ("annoyed", -2),
    ("anxious", -2),
    ("attack", -1),
    ("attacked", -1),
    ("awful", -3),
    ("bad", -3),
    ("blame", -2),
    ("blamed", -2),
    ("broken", -1),
    ("catastrophic", -4),
    ("chaos", -2),
    ("chaotic", -2),
    ("cheat", -3),
    ("collapse", -2),
    ("collapsed", -2),
    ("concerned", -2),
    ("conflict", -2),
    ("corrupt", -3),
    ("crash", -2),
    ("crashed", -2),
    ("crime", -3),
    ("crisis", -3),
    ("critical", -2),
    ("criticism", -2),
    ("criticize", -2),
    ("criticized", -2),
    ("cruel", -3),
    ("damage", -3),
    ("damaged", -3),
    ("danger", -2),
    ("dangerous", -2),
    ("dead", -3),
    ("death", -2),
    ("decline", -1),
    ("declined", -1),
    ("destroy", -3),
    ("destroyed", -3),
    ("destruction", -3),
    ("devastated", -2),
    ("devastating", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disaster", -2),
    ("disastrous", -3),
    ("disgusting", -3),
    ("dispute", -2),
    ("evil", -3),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("fraud", -4),
    ("furious", -3),
    ("harm", -2),
    ("harmful", -2),
    ("hate", -3),
    ("hated", -3),
    ("horrible", -3),
    ("hostile", -2),
    ("hurt", -2),
    ("idiot", -3),
    ("kill", -3),
    ("killed", -3),
    ("liar", -3),
    ("lie", -2),
    ("lies", -2),
    ("lose", -3),
    ("loss", -3),
    ("losses", -3),
    ("lost", -3),
    ("nightmare", -3),
    ("outrage", -3),
    ("outraged", -3),
    ("pain", -2),
    ("panic", -3),
    ("poor", -2),
    ("problem", -2),
    ("problems", -2),
    ("protest", -2),
    ("risk", -2),
    ("risks", -2),
    ("ruin", -2),
    ("ruined", -2),
    ("ruins", -2),
    ("sad", -2),
    ("scandal", -3),
    ("scared", -2),
    ("shocked", -2),
    ("shocking", -2),
    ("sick", -2),
    ("stupid", -2),
    ("suffer", -2),
    ("suffering", -2),
    ("terrible", -3),
    ("terror", -3),
    ("threat", -2),
    ("threaten", -2),
    ("threatened", -2),
    ("tragedy", -2),
    ("tragic", -2),
    ("ugly", -3),
    ("unfortunately", -2),
    ("violence", -3),
    ("violent", -3),
    ("war", -2),
    ("weak", -2),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

static NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "isnt", "isn't", "never", "no",
    "non", "not", "wont", "won't",
];

static LEXICON: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| AFINN.iter().copied().collect());

const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
    '~', '(', ')',
];

/// Embedded-lexicon scorer. A token directly after a negator counts with the
/// opposite sign.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    extra: HashMap<String, i32>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overrides valences on top of the embedded table.
    pub fn with_overrides(overrides: HashMap<String, i32>) -> Self {
        Self { extra: overrides }
    }

    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScore::neutral();
        }

        let mut score = 0i32;
        for (idx, token) in tokens.iter().enumerate() {
            let Some(valence) = self.valence(token) else {
                continue;
            };
            let negated = idx > 0 && NEGATORS.contains(&tokens[idx - 1].as_str());
            score += if negated { -valence } else { valence };
        }

        SentimentScore {
            score,
            comparative: score as f64 / tokens.len() as f64,
        }
    }

    fn valence(&self, token: &str) -> Option<i32> {
        self.extra
            .get(token)
            .copied()
            .or_else(|| LEXICON.get(token).copied())
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        Ok(self.analyze(text))
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}
