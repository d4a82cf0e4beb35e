use crate::generator::GeneratorInput;
use crate::{excerpt, AdaptedContent, RegionalArticle};

// Stub translations: a language tag in front of an excerpt.
static REGIONAL_PREFIXES: &[(&str, &str)] = &[("Spanish", "(Traducción)"), ("French", "(Traduction)")];

pub fn adapt(input: &GeneratorInput<'_>) -> AdaptedContent {
    AdaptedContent {
        short_reel_script: reel_script(input),
        podcast_summary: podcast_summary(input),
        regional_articles: regional_articles(input.text),
    }
}

fn reel_script(input: &GeneratorInput<'_>) -> String {
    [
        format!("[VISUAL: Text Overlay - \"{}\"]", input.emotional_tone),
        format!("VO: Essential update on {}.", input.lead_or("recent events")),
        format!("Key takeaway: {}...", excerpt(input.text, 50)),
    ]
    .join("\n")
}

fn podcast_summary(input: &GeneratorInput<'_>) -> String {
    let subjects = if input.entities.is_empty() {
        "current affairs".to_string()
    } else {
        input.entities.join(", ")
    };
    format!(
        "In today's deep dive, we discuss {}. The tone is {}...",
        subjects,
        input.emotional_tone.to_lowercase()
    )
}

fn regional_articles(text: &str) -> Vec<RegionalArticle> {
    REGIONAL_PREFIXES
        .iter()
        .map(|(language, prefix)| RegionalArticle {
            language: language.to_string(),
            text: format!("{} {}...", prefix, excerpt(text, 40)),
        })
        .collect()
}
