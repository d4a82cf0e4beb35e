use crate::generator::{rewrites, GeneratorInput};
use crate::EditorialSuggestion;

/// Above this many words per sentence the copy gets a readability note.
pub const READABILITY_LIMIT: u32 = 25;

pub const LOW_READABILITY_ISSUE: &str = "Low Readability";

pub fn build_suggestions(input: &GeneratorInput<'_>) -> Vec<EditorialSuggestion> {
    let mut suggestions: Vec<EditorialSuggestion> = input
        .sensational_matches
        .iter()
        .map(|word| sensational_suggestion(word))
        .collect();

    if input.readability_score > READABILITY_LIMIT {
        suggestions.push(EditorialSuggestion {
            issue: LOW_READABILITY_ISSUE.to_string(),
            recommendation: "Shorten sentences for better clarity.".to_string(),
            why: "Average sentence length is too high for news (aim for < 20 words).".to_string(),
            context_snippet: None,
            fix: None,
        });
    }

    suggestions
}

fn sensational_suggestion(word: &str) -> EditorialSuggestion {
    EditorialSuggestion {
        issue: format!("Sensational Language: \"{}\"", word),
        recommendation: "Consider more neutral alternative.".to_string(),
        why: "Can be perceived as clickbait or biased.".to_string(),
        context_snippet: Some(format!("...{}...", word)),
        fix: Some(replacement_for(word).to_string()),
    }
}

pub fn replacement_for(word: &str) -> &'static str {
    match word {
        "disastrous" => "significant",
        "shocking" => "surprising",
        _ => "notable",
    }
}

/// Applies a suggestion to `text`. Only suggestions that recommend neutral
/// wording have an automatic fix. Returns `None` when nothing would change.
pub fn apply_fix(text: &str, suggestion: &EditorialSuggestion) -> Option<String> {
    if !suggestion.recommendation.contains("neutral") {
        return None;
    }
    let fixed = rewrites::neutralize(text);
    if fixed == text {
        None
    } else {
        Some(fixed)
    }
}
