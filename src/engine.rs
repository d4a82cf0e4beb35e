use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

use crate::config::{LensConfig, SentimentMode};
use crate::scoring::SynthesisWeights;
use crate::sentiment::{
    neutral_on_error, LexiconScorer, RemoteSentimentClient, SentimentScore, SentimentScorer,
};
use crate::{analyze_with_sentiment, AnalysisOptions, AnalysisResult};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("analysis cancelled")]
    Cancelled,

    #[error("engine setup failed: {message}")]
    Setup { message: String },
}

/// Progress markers reported while an analysis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Waiting,
    Sentiment,
    Scoring,
    Done,
}

impl AnalysisStage {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisStage::Waiting => "waiting",
            AnalysisStage::Sentiment => "sentiment",
            AnalysisStage::Scoring => "scoring",
            AnalysisStage::Done => "done",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AnalysisStage::Waiting => "Queued for analysis",
            AnalysisStage::Sentiment => "Scoring sentiment",
            AnalysisStage::Scoring => "Matching patterns and synthesizing scores",
            AnalysisStage::Done => "Analysis complete",
        }
    }
}

#[derive(Clone)]
enum SentimentSource {
    Lexicon(LexiconScorer),
    Remote(RemoteSentimentClient),
}

/// Async shell around the pure pipeline. Holds no mutable state, so clones
/// can serve concurrent requests.
#[derive(Clone)]
pub struct AnalysisEngine {
    sentiment: SentimentSource,
    weights: SynthesisWeights,
    latency: Duration,
    default_sensitivity: f64,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        let config = LensConfig::default();
        Self {
            sentiment: SentimentSource::Lexicon(LexiconScorer::new()),
            weights: config.weights,
            latency: Duration::from_millis(config.engine.latency_ms),
            default_sensitivity: config.engine.default_sensitivity,
        }
    }
}

impl AnalysisEngine {
    pub fn from_config(config: &LensConfig) -> Result<Self, EngineError> {
        let sentiment = match config.sentiment.to_mode() {
            SentimentMode::Lexicon => SentimentSource::Lexicon(LexiconScorer::with_overrides(
                config.sentiment.overrides.clone(),
            )),
            SentimentMode::Remote => {
                let client = RemoteSentimentClient::from_config(&config.sentiment).map_err(
                    |err| EngineError::Setup {
                        message: err.to_string(),
                    },
                )?;
                debug!(endpoint = client.endpoint(), "using remote sentiment scorer");
                SentimentSource::Remote(client)
            }
        };

        Ok(Self {
            sentiment,
            weights: config.weights.clone(),
            latency: Duration::from_millis(config.engine.latency_ms),
            default_sensitivity: config.engine.default_sensitivity,
        })
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn sentiment_mode(&self) -> SentimentMode {
        match self.sentiment {
            SentimentSource::Lexicon(_) => SentimentMode::Lexicon,
            SentimentSource::Remote(_) => SentimentMode::Remote,
        }
    }

    /// Options carrying the configured default sensitivity.
    pub fn default_options(&self) -> AnalysisOptions {
        AnalysisOptions::with_sensitivity(self.default_sensitivity)
    }

    pub async fn analyze(&self, text: &str, options: &AnalysisOptions) -> AnalysisResult {
        self.analyze_with_progress(text, options, |_| {}).await
    }

    pub async fn analyze_with_progress<F>(
        &self,
        text: &str,
        options: &AnalysisOptions,
        progress: F,
    ) -> AnalysisResult
    where
        F: Fn(AnalysisStage) + Send + Sync,
    {
        progress(AnalysisStage::Waiting);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        progress(AnalysisStage::Sentiment);
        let sentiment = self.score_sentiment(text).await;

        progress(AnalysisStage::Scoring);
        let result = analyze_with_sentiment(text, options, sentiment, &self.weights);
        debug!(
            bias_level = result.content_analysis.bias_level.label(),
            virality = result.content_analysis.virality_score,
            "analysis finished"
        );

        progress(AnalysisStage::Done);
        result
    }

    /// Races the analysis against `cancel`. Flipping the watched value to
    /// `true` abandons the in-flight call; dropping the sender does not.
    pub async fn analyze_cancellable(
        &self,
        text: &str,
        options: &AnalysisOptions,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<AnalysisResult, EngineError> {
        if *cancel.borrow_and_update() {
            return Err(EngineError::Cancelled);
        }

        tokio::select! {
            result = self.analyze(text, options) => Ok(result),
            _ = wait_for_cancel(&mut cancel) => Err(EngineError::Cancelled),
        }
    }

    async fn score_sentiment(&self, text: &str) -> SentimentScore {
        let scored = match &self.sentiment {
            SentimentSource::Lexicon(scorer) => scorer.score(text),
            SentimentSource::Remote(client) => client.score(text).await,
        };
        neutral_on_error(scored)
    }
}

async fn wait_for_cancel(cancel: &mut watch::Receiver<bool>) {
    loop {
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        if *cancel.borrow_and_update() {
            return;
        }
    }
}
