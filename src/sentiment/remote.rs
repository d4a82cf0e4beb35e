use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SentimentConfig;
use crate::sentiment::{SentimentError, SentimentScore};

/// HTTP client for an external scorer exposing `POST /sentiment`.
#[derive(Clone)]
pub struct RemoteSentimentClient {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SentimentRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SentimentResponse {
    score: i32,
    comparative: f64,
}

impl RemoteSentimentClient {
    pub fn from_config(config: &SentimentConfig) -> Result<Self, SentimentError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        RemoteSentimentClient::new(config.endpoint.clone(), timeout)
    }

    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SentimentError::Request {
                message: format!("failed to build client: {}", err),
            })?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        let url = format!("{}/sentiment", self.endpoint.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .json(&SentimentRequest { text })
            .send()
            .await
            .map_err(|err| SentimentError::Request {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::Status {
                status: status.as_u16(),
                detail: body.trim().to_string(),
            });
        }

        let body: SentimentResponse =
            response
                .json()
                .await
                .map_err(|err| SentimentError::Malformed {
                    message: err.to_string(),
                })?;

        if !body.comparative.is_finite() {
            return Err(SentimentError::Malformed {
                message: "comparative is not a finite number".to_string(),
            });
        }

        Ok(SentimentScore {
            score: body.score,
            comparative: body.comparative,
        })
    }
}
