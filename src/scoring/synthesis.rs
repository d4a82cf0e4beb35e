use crate::patterns::PatternMatches;
use crate::scoring::SynthesisWeights;
use crate::sentiment::SentimentScore;
use crate::{BiasLevel, BiasRadar, BiasType};

pub const TONE_ENTHUSIASTIC: &str = "Positive – Enthusiastic";
pub const TONE_SLIGHTLY_POSITIVE: &str = "Slightly Positive";
pub const TONE_ALARMIST: &str = "Negative – Alarmist";
pub const TONE_SLIGHTLY_NEGATIVE: &str = "Slightly Negative";
pub const TONE_NEUTRAL: &str = "Neutral";

/// Float intermediates of one synthesis. Rounding happens only through
/// [`ScoreSynthesis::radar`] and [`ScoreSynthesis::virality_score`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSynthesis {
    pub sentiment_score: i32,
    pub sensationalism: f64,
    pub partisanship: f64,
    pub tone: f64,
    pub omission: f64,
    pub virality: f64,
    pub bias_level: BiasLevel,
    pub bias_type: Vec<BiasType>,
    pub emotional_tone: &'static str,
}

impl ScoreSynthesis {
    pub fn radar(&self) -> BiasRadar {
        BiasRadar {
            partisanship: round_score(self.partisanship),
            sensationalism: round_score(self.sensationalism),
            omission: round_score(self.omission),
            // tone doubles as the framing proxy
            framing: round_score(self.tone),
            tone: round_score(self.tone),
        }
    }

    pub fn virality_score(&self) -> u8 {
        round_score(self.virality)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreSynthesizer {
    weights: SynthesisWeights,
}

impl ScoreSynthesizer {
    pub fn new(weights: SynthesisWeights) -> Self {
        Self { weights }
    }

    pub fn synthesize(
        &self,
        sentiment: &SentimentScore,
        matches: &PatternMatches,
        sensitivity: f64,
    ) -> ScoreSynthesis {
        let w = &self.weights;
        let magnitude = sentiment.score.unsigned_abs() as f64;

        let sensationalism = clamp100(
            (matches.sensational.len() as f64 * w.sensational_per_match
                + magnitude * w.sentiment_magnitude)
                * sensitivity,
        );
        let partisanship =
            clamp100(matches.partisan.len() as f64 * w.partisan_per_match * sensitivity);
        let tone = clamp100(sentiment.comparative.abs() * w.tone_comparative + w.tone_base);
        let omission = clamp100(w.omission);
        let virality = clamp100(
            sensationalism * w.virality_sensationalism + magnitude * w.virality_sentiment,
        );

        let bias_level = if sentiment.score < w.high_sentiment_floor
            || sensationalism > w.high_sensationalism
            || partisanship > w.high_partisanship
        {
            BiasLevel::High
        } else if sentiment.score != 0 {
            BiasLevel::Moderate
        } else {
            BiasLevel::Low
        };

        let bias_type = if partisanship > w.partisan_type {
            vec![BiasType::Partisan]
        } else if sensationalism > w.sensationalist_type {
            vec![BiasType::Sensationalist]
        } else {
            Vec::new()
        };

        ScoreSynthesis {
            sentiment_score: sentiment.score,
            sensationalism,
            partisanship,
            tone,
            omission,
            virality,
            bias_level,
            bias_type,
            emotional_tone: emotional_tone(sentiment.score),
        }
    }
}

/// First matching rung wins, so `> 3` is checked before `> 0`.
pub fn emotional_tone(score: i32) -> &'static str {
    if score > 3 {
        TONE_ENTHUSIASTIC
    } else if score > 0 {
        TONE_SLIGHTLY_POSITIVE
    } else if score < -3 {
        TONE_ALARMIST
    } else if score < 0 {
        TONE_SLIGHTLY_NEGATIVE
    } else {
        TONE_NEUTRAL
    }
}

fn clamp100(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0).min(100.0)
}

// Half-up, so 12.5 becomes 13.
fn round_score(value: f64) -> u8 {
    (clamp100(value) + 0.5).floor() as u8
}
