use serde::{Deserialize, Serialize};

/// Coefficients and thresholds for the score synthesizer. The defaults are the
/// production values; the TOML `[weights]` table may override any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisWeights {
    pub sensational_per_match: f64,
    pub sentiment_magnitude: f64,
    pub partisan_per_match: f64,
    pub tone_comparative: f64,
    pub tone_base: f64,
    pub omission: f64,
    pub virality_sensationalism: f64,
    pub virality_sentiment: f64,
    /// Sentiment strictly below this is High bias on its own.
    pub high_sentiment_floor: i32,
    pub high_sensationalism: f64,
    pub high_partisanship: f64,
    pub partisan_type: f64,
    pub sensationalist_type: f64,
}

impl Default for SynthesisWeights {
    fn default() -> Self {
        Self {
            sensational_per_match: 15.0,
            sentiment_magnitude: 5.0,
            partisan_per_match: 20.0,
            tone_comparative: 50.0,
            tone_base: 40.0,
            omission: 30.0,
            virality_sensationalism: 0.6,
            virality_sentiment: 10.0,
            high_sentiment_floor: -3,
            high_sensationalism: 65.0,
            high_partisanship: 50.0,
            partisan_type: 50.0,
            sensationalist_type: 50.0,
        }
    }
}
