//! Intents for the sentiment panel.

use crate::client::{ClassifyError, SentimentResult};
use crate::session::RequestId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SentimentIntent {
    /// A request was issued for the current text.
    Dispatched { request_id: RequestId },

    /// The latest request came back with a classification.
    Classified { result: SentimentResult },

    /// The latest request failed.
    Failed { error: ClassifyError },

    /// Input became blank.
    Reset,

    /// User dismissed the error panel.
    Dismiss,

    /// Spinner frame advance.
    AnimationTick,
}

impl Intent for SentimentIntent {}
