//! Sentiment classification client.
//!
//! Owns request construction and normalizes every failure into
//! [`ClassifyError`].

mod error;
mod result;
mod sentiment;

pub use error::ClassifyError;
pub use result::SentimentResult;
pub use sentiment::SentimentClient;
