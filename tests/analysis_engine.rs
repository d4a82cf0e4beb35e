use content_lens::scoring::SynthesisWeights;
use content_lens::sentiment::{SentimentError, SentimentScore, SentimentScorer};
use content_lens::{
    analyze_content, analyze_content_with, require_content, AnalysisOptions, BiasLevel, BiasType,
};

const CANDIDATE_TEXT: &str =
    "The disastrous policy implemented by Candidate X has ruined the economy.";

const SAMPLES: &[&str] = &[
    "",
    CANDIDATE_TEXT,
    "Apple (AAPL) released their new iPhone 16 today. The stock jumped 5% in after-hours trading. Critics praised the new camera system.",
    "SHOCKING chaos as the regime slammed a radical agenda! Disaster, crisis and meltdown everywhere. Destroyed. Obliterated.",
    "The committee met on Tuesday and approved the budget for Springfield Elementary.",
    "Great wonderful amazing fantastic excellent news for everyone involved in the project.",
];

fn defaults() -> AnalysisOptions {
    AnalysisOptions::default()
}

struct FailingScorer;

impl SentimentScorer for FailingScorer {
    fn score(&self, _text: &str) -> Result<SentimentScore, SentimentError> {
        Err(SentimentError::Request {
            message: "offline".to_string(),
        })
    }
}

#[test]
fn repeated_calls_are_identical() {
    for text in SAMPLES {
        let first = analyze_content(text, &AnalysisOptions::with_sensitivity(1.3));
        let second = analyze_content(text, &AnalysisOptions::with_sensitivity(1.3));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn scores_stay_within_bounds() {
    for text in SAMPLES {
        for sensitivity in [-1.0, 0.0, 0.5, 1.0, 2.0, 5.0, 50.0] {
            let result = analyze_content(text, &AnalysisOptions::with_sensitivity(sensitivity));
            let radar = &result.content_analysis.bias_radar_data;
            assert!(radar.sensationalism <= 100);
            assert!(radar.partisanship <= 100);
            assert!(radar.tone <= 100);
            assert!(radar.framing <= 100);
            assert_eq!(radar.omission, 30);
            assert!(result.content_analysis.virality_score <= 100);
        }
    }
}

#[test]
fn higher_sensitivity_never_lowers_bias_scores() {
    for text in SAMPLES {
        let mut previous: Option<(u8, u8)> = None;
        for step in 0..=15 {
            let sensitivity = 0.5 + step as f64 * 0.1;
            let result = analyze_content(text, &AnalysisOptions::with_sensitivity(sensitivity));
            let radar = &result.content_analysis.bias_radar_data;
            let current = (radar.sensationalism, radar.partisanship);
            if let Some((sensationalism, partisanship)) = previous {
                assert!(current.0 >= sensationalism, "sensationalism fell for {:?}", text);
                assert!(current.1 >= partisanship, "partisanship fell for {:?}", text);
            }
            previous = Some(current);
        }
    }
}

#[test]
fn entities_are_unique_and_capped() {
    let text = "We met Alice, Bob Smith, Carol, David, Erin, Frank and Alice again near Boston.";
    let result = analyze_content(text, &defaults());
    let entities = &result.content_analysis.entities;

    assert_eq!(entities, &["Alice", "Bob Smith", "Carol", "David", "Erin"]);
    assert!(result.fact_check.verified_facts[0].contains("Frank"));
    assert!(result.fact_check.verified_facts[0].contains("Boston"));

    for text in SAMPLES {
        let entities = analyze_content(text, &defaults()).content_analysis.entities;
        assert!(entities.len() <= 5);
        for (idx, entity) in entities.iter().enumerate() {
            assert!(!entities[idx + 1..].contains(entity));
        }
    }
}

#[test]
fn product_announcement_is_not_high_bias() {
    let text = "Apple (AAPL) released their new iPhone 16 today. The stock jumped 5% in after-hours trading. Critics praised the new camera system.";
    let result = analyze_content(text, &defaults());
    let analysis = &result.content_analysis;

    assert!(matches!(analysis.bias_level, BiasLevel::Low | BiasLevel::Moderate));
    assert!(analysis.bias_type.is_empty());
    assert_eq!(analysis.emotional_tone, "Slightly Positive");
    assert!(result.editorial_suggestions.is_empty());
}

#[test]
fn company_named_mid_sentence_is_an_entity() {
    let text = "Shares of Apple (AAPL) rose after the launch. Critics praised the new camera system.";
    let result = analyze_content(text, &defaults());

    assert!(result.content_analysis.entities.contains(&"Apple".to_string()));
    assert_eq!(result.headlines.seo, "Apple Report: Full Analysis");
}

#[test]
fn candidate_policy_text_is_flagged() {
    let result = analyze_content(CANDIDATE_TEXT, &defaults());
    let analysis = &result.content_analysis;

    assert_eq!(analysis.bias_level, BiasLevel::High);
    assert_eq!(analysis.bias_type, vec![BiasType::Sensationalist]);
    assert_eq!(analysis.emotional_tone, "Negative – Alarmist");
    assert_eq!(analysis.readability_score, 11);
    assert_eq!(analysis.entities, vec!["Candidate".to_string()]);
    assert_eq!(analysis.bias_radar_data.sensationalism, 55);
    assert_eq!(analysis.bias_radar_data.partisanship, 0);
    assert_eq!(analysis.bias_radar_data.tone, 63);
    assert_eq!(analysis.bias_radar_data.framing, 63);
    assert_eq!(analysis.virality_score, 83);

    let issues: Vec<&str> = result
        .editorial_suggestions
        .iter()
        .map(|s| s.issue.as_str())
        .collect();
    assert_eq!(
        issues,
        vec![
            "Sensational Language: \"ruined\"",
            "Sensational Language: \"disastrous\""
        ]
    );
    assert!(result
        .editorial_suggestions
        .iter()
        .any(|s| s.fix.as_deref() == Some("significant")));
    assert_eq!(
        result.editorial_suggestions[0].context_snippet.as_deref(),
        Some("...ruined...")
    );

    assert_eq!(
        result.neutralized_text,
        "The significant policy implemented by Candidate X has ruined the economy."
    );
    assert_eq!(result.multi_tone_rewrites.neutral, result.neutralized_text);
    assert_eq!(
        result.seo_keywords,
        vec!["Candidate", "Sensational", "Sensational"]
    );
}

#[test]
fn empty_text_yields_complete_neutral_result() {
    let result = analyze_content("", &defaults());
    let analysis = &result.content_analysis;

    assert_eq!(analysis.readability_score, 0);
    assert!(analysis.entities.is_empty());
    assert_eq!(analysis.bias_level, BiasLevel::Low);
    assert!(analysis.bias_type.is_empty());
    assert_eq!(analysis.emotional_tone, "Neutral");
    assert_eq!(analysis.virality_score, 0);
    assert_eq!(analysis.bias_radar_data.tone, 40);
    assert_eq!(
        result.fact_check.verified_facts,
        vec!["No specific entities verified.".to_string()]
    );
    assert!(result.fact_check.disputed_claims.is_empty());
    assert!(result.fact_check.unverifiable_claims.is_empty());
    assert!(result.editorial_suggestions.is_empty());
    assert!(result.seo_keywords.is_empty());
    assert_eq!(result.headlines.viral, "You Won't Believe What They Just Did");
    assert_eq!(result.multi_tone_rewrites.concise, "Update: Significant events reported. ...");
}

#[test]
fn partisan_language_outranks_sensationalism() {
    let text = "The radical regime and its corrupt puppet dictator pushed a shocking agenda amid chaos and crisis.";
    let result = analyze_content(text, &defaults());
    let analysis = &result.content_analysis;

    assert_eq!(analysis.bias_radar_data.partisanship, 100);
    assert!(analysis.bias_radar_data.sensationalism > 50);
    assert_eq!(analysis.bias_level, BiasLevel::High);
    assert_eq!(analysis.bias_type, vec![BiasType::Partisan]);
}

#[test]
fn low_sensitivity_can_drop_bias_type() {
    let loud = analyze_content(CANDIDATE_TEXT, &AnalysisOptions::with_sensitivity(1.0));
    let quiet = analyze_content(CANDIDATE_TEXT, &AnalysisOptions::with_sensitivity(0.5));

    assert_eq!(loud.content_analysis.bias_type, vec![BiasType::Sensationalist]);
    // (2 * 15 + 5 * 5) * 0.5 = 27.5
    assert_eq!(quiet.content_analysis.bias_radar_data.sensationalism, 28);
    assert!(quiet.content_analysis.bias_type.is_empty());
    // sentiment alone still marks it high
    assert_eq!(quiet.content_analysis.bias_level, BiasLevel::High);
}

#[test]
fn long_sentences_get_readability_suggestion() {
    let text = "this sentence keeps going on and on without any pause because the writer never learned \
                where to stop and so it rambles across many many words until the reader gives up entirely";
    let result = analyze_content(text, &defaults());

    assert!(result.content_analysis.readability_score > 25);
    let last = result.editorial_suggestions.last().unwrap();
    assert_eq!(last.issue, "Low Readability");
    assert!(last.fix.is_none());
    assert!(last.context_snippet.is_none());
    assert_eq!(result.seo_keywords.last().map(String::as_str), Some("Low"));
}

#[test]
fn failing_scorer_falls_back_to_neutral() {
    let text = "Great wonderful amazing fantastic excellent news.";
    let degraded = analyze_content_with(text, &defaults(), &FailingScorer, &SynthesisWeights::default());
    let normal = analyze_content(text, &defaults());

    assert_eq!(degraded.content_analysis.emotional_tone, "Neutral");
    assert_eq!(degraded.content_analysis.bias_level, BiasLevel::Low);
    assert_eq!(normal.content_analysis.emotional_tone, "Positive – Enthusiastic");
    assert_eq!(degraded.headlines, normal.headlines);
}

#[test]
fn result_serializes_with_expected_field_names() {
    let result = analyze_content(CANDIDATE_TEXT, &defaults());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["content_analysis"]["bias_level"], "High");
    assert_eq!(value["content_analysis"]["bias_type"][0], "Sensationalist");
    assert_eq!(value["content_analysis"]["bias_radar_data"]["omission"], 30);
    assert_eq!(value["adapted_content"]["regional_articles"][1]["language"], "French");
    assert!(value["editorial_suggestions"][0]["fix"].is_string());
}

#[test]
fn supplied_copy_is_kept_verbatim() {
    let padded = "  Voters met Candidate X today.\n".to_string();
    assert_eq!(require_content(padded.clone()), Ok(padded.clone()));
    assert!(require_content(" \n\t ".to_string()).is_err());
    assert!(require_content(String::new()).is_err());

    let padded_result = analyze_content(&padded, &defaults());
    let trimmed_result = analyze_content(padded.trim(), &defaults());
    assert_eq!(
        padded_result.adapted_content.regional_articles[0].text,
        "(Traducción)   Voters met Candidate X today.\n..."
    );
    assert_ne!(
        padded_result.adapted_content.regional_articles,
        trimmed_result.adapted_content.regional_articles
    );
}
