use serde::{Deserialize, Serialize};

use super::error::ClassifyError;

/// One classification returned by the service.
///
/// Fields are private so every instance has passed the score check in
/// [`SentimentResult::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    label: String,
    score: f64,
    time_taken: u64,
}

impl SentimentResult {
    /// Build a result, rejecting scores outside `[0.0, 1.0]`.
    pub fn new(label: impl Into<String>, score: f64, time_taken: u64) -> Result<Self, ClassifyError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ClassifyError::Parse(format!(
                "score {} is outside [0, 1]",
                score
            )));
        }
        Ok(Self {
            label: label.into(),
            score,
            time_taken,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Server-side processing time in milliseconds.
    pub fn time_taken(&self) -> u64 {
        self.time_taken
    }

    /// Score as a percentage rounded to one decimal place.
    pub fn percentage(&self) -> f64 {
        (self.score * 1000.0).round() / 10.0
    }
}

/// Request body sent to the service.
#[derive(Debug, Serialize)]
pub(crate) struct ClassifyRequest<'a> {
    pub text: &'a str,
}

/// Response body returned by the service.
#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyResponse {
    pub label: String,
    pub score: f64,
    pub time_taken: u64,
}

impl TryFrom<ClassifyResponse> for SentimentResult {
    type Error = ClassifyError;

    fn try_from(wire: ClassifyResponse) -> Result<Self, Self::Error> {
        SentimentResult::new(wire.label, wire.score, wire.time_taken)
    }
}
