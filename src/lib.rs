pub mod config;
pub mod engine;
pub mod entities;
pub mod generator;
pub mod history;
pub mod patterns;
pub mod progress;
pub mod readability;
pub mod scoring;
pub mod sentiment;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::GeneratorInput;
use crate::scoring::{ScoreSynthesizer, SynthesisWeights};
use crate::sentiment::{score_or_neutral, LexiconScorer, SentimentScore, SentimentScorer};

pub use crate::engine::{AnalysisEngine, EngineError};

pub const DEFAULT_SENSITIVITY: f64 = 1.0;
pub const TOP_ENTITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLevel {
    Low,
    Moderate,
    High,
}

impl BiasLevel {
    pub fn label(self) -> &'static str {
        match self {
            BiasLevel::Low => "Low",
            BiasLevel::Moderate => "Moderate",
            BiasLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasType {
    Partisan,
    Sensationalist,
}

impl BiasType {
    pub fn label(self) -> &'static str {
        match self {
            BiasType::Partisan => "Partisan",
            BiasType::Sensationalist => "Sensationalist",
        }
    }
}

/// Caller-supplied knobs for a single analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Multiplier applied to sensationalism and partisanship. Documented range
    /// is 0.5..=2.0 but values outside it are not clamped here.
    pub sensitivity: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl AnalysisOptions {
    pub fn with_sensitivity(sensitivity: f64) -> Self {
        Self { sensitivity }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasRadar {
    pub partisanship: u8,
    pub sensationalism: u8,
    pub omission: u8,
    pub framing: u8,
    pub tone: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub bias_level: BiasLevel,
    pub bias_type: Vec<BiasType>,
    pub emotional_tone: String,
    pub virality_score: u8,
    pub readability_score: u32,
    pub bias_radar_data: BiasRadar,
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheck {
    pub verified_facts: Vec<String>,
    pub disputed_claims: Vec<String>,
    pub unverifiable_claims: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialSuggestion {
    pub issue: String,
    pub recommendation: String,
    pub why: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalArticle {
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptedContent {
    pub short_reel_script: String,
    pub podcast_summary: String,
    pub regional_articles: Vec<RegionalArticle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRewrites {
    pub neutral: String,
    pub professional: String,
    pub gen_z: String,
    pub concise: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headlines {
    pub viral: String,
    pub seo: String,
    pub neutral: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub content_analysis: ContentAnalysis,
    pub fact_check: FactCheck,
    pub editorial_suggestions: Vec<EditorialSuggestion>,
    pub adapted_content: AdaptedContent,
    pub neutralized_text: String,
    pub multi_tone_rewrites: ToneRewrites,
    pub headlines: Headlines,
    pub seo_keywords: Vec<String>,
}

/// Runs the full pipeline with the embedded lexicon and default weights.
pub fn analyze_content(text: &str, options: &AnalysisOptions) -> AnalysisResult {
    analyze_content_with(text, options, &LexiconScorer::new(), &SynthesisWeights::default())
}

pub fn analyze_content_with(
    text: &str,
    options: &AnalysisOptions,
    scorer: &dyn SentimentScorer,
    weights: &SynthesisWeights,
) -> AnalysisResult {
    let sentiment = score_or_neutral(scorer, text);
    analyze_with_sentiment(text, options, sentiment, weights)
}

/// Pipeline body once sentiment is known. The async engine uses this after
/// awaiting a remote scorer.
pub fn analyze_with_sentiment(
    text: &str,
    options: &AnalysisOptions,
    sentiment: SentimentScore,
    weights: &SynthesisWeights,
) -> AnalysisResult {
    let matches = patterns::match_patterns(text);
    let entities = entities::extract_entities(text);
    let readability = readability::readability_score(text);

    let synthesis = ScoreSynthesizer::new(weights.clone()).synthesize(
        &sentiment,
        &matches,
        options.sensitivity,
    );

    debug!(
        sentiment = sentiment.score,
        sensational = matches.sensational.len(),
        partisan = matches.partisan.len(),
        entities = entities.len(),
        readability,
        "synthesized content scores"
    );

    let generated = generator::generate(&GeneratorInput {
        text,
        entities: &entities,
        sensational_matches: &matches.sensational,
        emotional_tone: synthesis.emotional_tone,
        readability_score: readability,
    });

    AnalysisResult {
        content_analysis: ContentAnalysis {
            bias_level: synthesis.bias_level,
            bias_type: synthesis.bias_type.clone(),
            emotional_tone: synthesis.emotional_tone.to_string(),
            virality_score: synthesis.virality_score(),
            readability_score: readability,
            bias_radar_data: synthesis.radar(),
            entities: entities.iter().take(TOP_ENTITY_LIMIT).cloned().collect(),
        },
        fact_check: generated.fact_check,
        editorial_suggestions: generated.suggestions,
        adapted_content: generated.adapted_content,
        neutralized_text: generated.neutralized_text,
        multi_tone_rewrites: generated.rewrites,
        headlines: generated.headlines,
        seo_keywords: generated.seo_keywords,
    }
}

/// Accepts caller-supplied copy as-is. Whitespace only decides emptiness; it is
/// never stripped, so every input path analyzes the same characters.
pub fn require_content(text: String) -> Result<String, String> {
    if text.trim().is_empty() {
        return Err("missing content".to_string());
    }
    Ok(text)
}

/// Leading characters of `text`, counted as Unicode scalar values.
pub(crate) fn excerpt(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
