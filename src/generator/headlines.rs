use crate::generator::GeneratorInput;
use crate::{EditorialSuggestion, Headlines};

pub fn headlines(input: &GeneratorInput<'_>) -> Headlines {
    Headlines {
        viral: format!("You Won't Believe What {} Just Did", input.lead_or("They")),
        seo: format!("{} Report: Full Analysis", input.lead_or("News")),
        neutral: format!("Update on {}: Key Details", input.lead_or("Situation")),
    }
}

/// Entities followed by the first word of each suggestion's issue. Repeats are
/// kept.
pub fn seo_keywords(entities: &[String], suggestions: &[EditorialSuggestion]) -> Vec<String> {
    entities
        .iter()
        .cloned()
        .chain(
            suggestions
                .iter()
                .map(|s| s.issue.split(' ').next().unwrap_or_default().to_string()),
        )
        .collect()
}
