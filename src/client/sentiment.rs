//! HTTP client for the sentiment classification service.

use reqwest::Client;

use crate::config::ServiceConfig;

use super::error::ClassifyError;
use super::result::{ClassifyRequest, ClassifyResponse, SentimentResult};

/// Client for the classification endpoint.
///
/// Each call is exactly one POST: no retries and no caching.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    client: Client,
    endpoint: String,
}

impl SentimentClient {
    /// Create a client for the endpoint described by `config`.
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classify `text`.
    pub async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifyError> {
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        tracing::debug!(
            url = %self.endpoint,
            chars = text.chars().count(),
            "Sending classification request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(ClassifyError::network)?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(status = %status, body = %body, "Classification service error");

            return Err(ClassifyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(ClassifyError::network)?;

        let wire: ClassifyResponse = serde_json::from_str(&body).map_err(|e| {
            ClassifyError::Parse(format!("Failed to parse response JSON: {}", e))
        })?;

        SentimentResult::try_from(wire)
    }
}
