use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::watch;

use content_lens::config::{LensConfig, SentimentMode};
use content_lens::engine::AnalysisStage;
use content_lens::{analyze_content, AnalysisEngine, AnalysisOptions, EngineError};

const TEXT: &str = "The disastrous policy implemented by Candidate X has ruined the economy.";

fn instant_engine() -> AnalysisEngine {
    AnalysisEngine::default().with_latency(Duration::ZERO)
}

#[tokio::test]
async fn engine_matches_pure_pipeline() {
    let options = AnalysisOptions::with_sensitivity(1.5);
    let result = instant_engine().analyze(TEXT, &options).await;
    assert_eq!(result, analyze_content(TEXT, &options));
}

#[tokio::test]
async fn default_engine_uses_lexicon_and_one_second_delay() {
    let engine = AnalysisEngine::default();
    assert_eq!(engine.latency(), Duration::from_millis(1000));
    assert_eq!(engine.sentiment_mode(), SentimentMode::Lexicon);
    assert_eq!(engine.default_options(), AnalysisOptions::default());
}

#[tokio::test]
async fn progress_reports_stages_in_order() {
    let stages = Mutex::new(Vec::new());
    instant_engine()
        .analyze_with_progress(TEXT, &AnalysisOptions::default(), |stage| {
            stages.lock().unwrap().push(stage);
        })
        .await;

    assert_eq!(
        stages.into_inner().unwrap(),
        vec![
            AnalysisStage::Waiting,
            AnalysisStage::Sentiment,
            AnalysisStage::Scoring,
            AnalysisStage::Done
        ]
    );
}

#[tokio::test]
async fn latency_delays_the_result() {
    let engine = AnalysisEngine::default().with_latency(Duration::from_millis(50));
    let started = Instant::now();
    engine.analyze("", &AnalysisOptions::default()).await;
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn cancelled_before_start_returns_error() {
    let (tx, rx) = watch::channel(false);
    tx.send(true).unwrap();

    let outcome = instant_engine()
        .analyze_cancellable(TEXT, &AnalysisOptions::default(), rx)
        .await;
    assert!(matches!(outcome, Err(EngineError::Cancelled)));
}

#[tokio::test]
async fn cancellation_abandons_in_flight_analysis() {
    let engine = AnalysisEngine::default().with_latency(Duration::from_secs(5));
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        let _ = tx.send(true);
    });

    let started = Instant::now();
    let outcome = engine
        .analyze_cancellable(TEXT, &AnalysisOptions::default(), rx)
        .await;

    assert!(matches!(outcome, Err(EngineError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn dropped_sender_never_cancels() {
    let (tx, rx) = watch::channel(false);
    drop(tx);

    let outcome = instant_engine()
        .analyze_cancellable(TEXT, &AnalysisOptions::default(), rx)
        .await;
    let result = outcome.expect("analysis should complete");
    assert_eq!(result.content_analysis.readability_score, 11);
}

#[tokio::test]
async fn config_feeds_engine_defaults() {
    let mut config = LensConfig::default();
    config.engine.latency_ms = 0;
    config.engine.default_sensitivity = 2.0;
    config
        .sentiment
        .overrides
        .insert("slammed".to_string(), -5);

    let engine = AnalysisEngine::from_config(&config).unwrap();
    assert_eq!(engine.latency(), Duration::ZERO);
    assert_eq!(engine.default_options().sensitivity, 2.0);

    let result = engine
        .analyze("Critics slammed the plan", &engine.default_options())
        .await;
    assert_eq!(result.content_analysis.emotional_tone, "Negative – Alarmist");
    // (1 * 15 + 5 * 5) * 2.0
    assert_eq!(result.content_analysis.bias_radar_data.sensationalism, 80);
}

#[tokio::test]
async fn unreachable_remote_scorer_falls_back_to_neutral() {
    let mut config = LensConfig::default();
    config.engine.latency_ms = 0;
    config.sentiment.mode = "remote".to_string();
    config.sentiment.endpoint = "http://127.0.0.1:9".to_string();
    config.sentiment.timeout_ms = 500;

    let engine = AnalysisEngine::from_config(&config).unwrap();
    assert_eq!(engine.sentiment_mode(), SentimentMode::Remote);

    let result = engine
        .analyze(
            "Great wonderful amazing fantastic excellent news.",
            &AnalysisOptions::default(),
        )
        .await;
    assert_eq!(result.content_analysis.emotional_tone, "Neutral");
    assert_eq!(result.content_analysis.virality_score, 0);
}
