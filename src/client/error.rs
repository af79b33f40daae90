//! Error types for sentiment classification.

use thiserror::Error;

/// Errors that can occur while classifying a piece of text.
///
/// Carries plain strings rather than the underlying transport error so the
/// value can be stored in UI state and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The service could not be reached or the exchange was interrupted.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Blank text was handed to the client.
    #[error("Text is empty")]
    EmptyInput,
}

impl ClassifyError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClassifyError::Network("request timed out".to_string())
        } else {
            ClassifyError::Network(err.to_string())
        }
    }

    /// Short message for display.
    pub fn user_message(&self) -> String {
        match self {
            ClassifyError::Network(_) => "Sentiment service is unreachable".to_string(),
            ClassifyError::Http { status, .. } => {
                format!("Sentiment service returned HTTP {}", status)
            }
            ClassifyError::Parse(_) => "Unexpected response from sentiment service".to_string(),
            ClassifyError::EmptyInput => "Nothing to analyze".to_string(),
        }
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        match self {
            ClassifyError::Network(message) | ClassifyError::Parse(message) => message.clone(),
            ClassifyError::Http { body, .. } => body.clone(),
            ClassifyError::EmptyInput => String::new(),
        }
    }
}
