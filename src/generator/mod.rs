//! Template-driven derivations: suggestions, rewrites, adaptations and
//! headlines. Nothing here scores text; it only formats what the scoring
//! stages produced, so a real generation backend can replace this module
//! wholesale.

pub mod adaptation;
pub mod diff;
pub mod headlines;
pub mod rewrites;
pub mod suggestions;

use crate::{AdaptedContent, EditorialSuggestion, FactCheck, Headlines, ToneRewrites};

pub use diff::{word_diff, DiffWord, WordDiff};
pub use rewrites::neutralize;
pub use suggestions::apply_fix;

pub struct GeneratorInput<'a> {
    pub text: &'a str,
    /// Full de-duplicated entity list, not the top-five view.
    pub entities: &'a [String],
    pub sensational_matches: &'a [String],
    pub emotional_tone: &'a str,
    pub readability_score: u32,
}

impl GeneratorInput<'_> {
    /// Subject for templates: the first entity, or `fallback`.
    pub fn lead_or<'b>(&'b self, fallback: &'b str) -> &'b str {
        self.entities.first().map(String::as_str).unwrap_or(fallback)
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub fact_check: FactCheck,
    pub suggestions: Vec<EditorialSuggestion>,
    pub adapted_content: AdaptedContent,
    pub neutralized_text: String,
    pub rewrites: ToneRewrites,
    pub headlines: Headlines,
    pub seo_keywords: Vec<String>,
}

pub fn generate(input: &GeneratorInput<'_>) -> GeneratedContent {
    let suggestions = suggestions::build_suggestions(input);
    let rewrites = rewrites::tone_rewrites(input);
    let seo_keywords = headlines::seo_keywords(input.entities, &suggestions);

    GeneratedContent {
        fact_check: fact_check(input.entities),
        adapted_content: adaptation::adapt(input),
        neutralized_text: rewrites.neutral.clone(),
        rewrites,
        headlines: headlines::headlines(input),
        seo_keywords,
        suggestions,
    }
}

/// Placeholder verification: lists what was detected, disputes nothing.
pub fn fact_check(entities: &[String]) -> FactCheck {
    let summary = if entities.is_empty() {
        "No specific entities verified.".to_string()
    } else {
        format!("Entities detected: {}", entities.join(", "))
    };

    FactCheck {
        verified_facts: vec![summary],
        disputed_claims: Vec::new(),
        unverifiable_claims: Vec::new(),
    }
}
