pub mod lexicon;
pub mod remote;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use lexicon::LexiconScorer;
pub use remote::RemoteSentimentClient;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Sum of per-token valence.
    pub score: i32,
    /// `score` divided by the token count, `0` for empty text.
    pub comparative: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            score: 0,
            comparative: 0.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("sentiment request failed: {message}")]
    Request { message: String },

    #[error("sentiment service returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("sentiment response malformed: {message}")]
    Malformed { message: String },
}

/// Anything that can turn text into a lexicon-style score.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScore, SentimentError>;
}

/// Scores `text`, substituting a neutral score when the scorer fails so the
/// rest of the pipeline still produces a complete result.
pub fn score_or_neutral(scorer: &dyn SentimentScorer, text: &str) -> SentimentScore {
    neutral_on_error(scorer.score(text))
}

/// The single fallback policy for every sentiment source.
pub fn neutral_on_error(scored: Result<SentimentScore, SentimentError>) -> SentimentScore {
    scored.unwrap_or_else(|err| {
        warn!(error = %err, "sentiment scoring failed, using neutral score");
        SentimentScore::neutral()
    })
}
