use serde::{Deserialize, Serialize};
use content_lens::history::HistoryEntry;
use content_lens::{require_content, AnalysisOptions, AnalysisResult, EditorialSuggestion};

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    pub request_id: Option<String>,
    pub sensitivity: Option<f64>,
    pub save_history: Option<bool>,
}

impl ApiAnalyzeRequest {
    pub fn validate(&self, defaults: AnalysisOptions) -> Result<(String, AnalysisOptions), String> {
        let text = require_content(self.text.clone().unwrap_or_default())
            .map_err(|_| "text is required".to_string())?;

        let mut options = defaults;
        if let Some(value) = self.sensitivity {
            if !value.is_finite() {
                return Err(format!("invalid sensitivity: {}", value));
            }
            options.sensitivity = value;
        }

        Ok((text, options))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAnalyzeResponse {
    pub request_id: String,
    pub sensitivity: f64,
    pub result: AnalysisResult,
    pub history_id: Option<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiHistoryItem {
    pub id: String,
    pub timestamp: u64,
    pub text_snippet: String,
    pub bias_level: String,
}

impl From<&HistoryEntry> for ApiHistoryItem {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            timestamp: entry.timestamp,
            text_snippet: entry.text_snippet.clone(),
            bias_level: entry.result.content_analysis.bias_level.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiFixRequest {
    pub text: String,
    pub suggestion: EditorialSuggestion,
}

#[derive(Debug, Serialize)]
pub struct ApiFixResponse {
    pub text: String,
    pub changed: bool,
}
