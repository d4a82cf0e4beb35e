use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::SynthesisWeights;
use crate::DEFAULT_SENSITIVITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulated processing latency before each analysis. `0` disables it.
    pub latency_ms: u64,
    pub default_sensitivity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            default_sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentMode {
    Lexicon,
    Remote,
}

impl SentimentMode {
    pub fn label(self) -> &'static str {
        match self {
            SentimentMode::Lexicon => "lexicon",
            SentimentMode::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub mode: String,
    pub endpoint: String,
    pub timeout_ms: u64,
    /// Extra or replacement valences layered over the embedded lexicon.
    pub overrides: HashMap<String, i32>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            mode: "lexicon".to_string(),
            endpoint: "http://localhost:8090".to_string(),
            timeout_ms: 3000,
            overrides: HashMap::new(),
        }
    }
}

impl SentimentConfig {
    pub fn to_mode(&self) -> SentimentMode {
        match self.mode.to_lowercase().as_str() {
            "remote" => SentimentMode::Remote,
            _ => SentimentMode::Lexicon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/history.json"),
            limit: crate::history::DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub engine: EngineConfig,
    pub sentiment: SentimentConfig,
    pub weights: SynthesisWeights,
    pub history: HistoryConfig,
}

impl LensConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                Self::from_toml(&contents)?
            } else {
                LensConfig::default()
            }
        } else {
            LensConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(latency) = env::var("LENS_LATENCY_MS") {
            if let Ok(value) = latency.parse::<u64>() {
                self.engine.latency_ms = value;
            }
        }
        if let Ok(sensitivity) = env::var("LENS_SENSITIVITY") {
            if let Ok(value) = sensitivity.parse::<f64>() {
                if value.is_finite() {
                    self.engine.default_sensitivity = value;
                }
            }
        }
        if let Ok(mode) = env::var("LENS_SENTIMENT_MODE") {
            if !mode.trim().is_empty() {
                self.sentiment.mode = mode;
            }
        }
        if let Ok(endpoint) = env::var("LENS_SENTIMENT_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.sentiment.endpoint = endpoint;
            }
        }
        if let Ok(timeout) = env::var("LENS_SENTIMENT_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.sentiment.timeout_ms = value;
            }
        }
        if let Ok(path) = env::var("LENS_HISTORY_PATH") {
            if !path.trim().is_empty() {
                self.history.path = PathBuf::from(path);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("LENS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/lens.toml")))
}
