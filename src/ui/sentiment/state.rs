//! State of the sentiment panel.

use crate::client::{ClassifyError, SentimentResult};
use crate::session::RequestId;
use crate::ui::mvi::UiState;

/// Lifecycle of the visible classification.
///
/// Exactly one variant is active; there is no terminal state while the
/// session runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// No text, no result yet, or an error was dismissed.
    #[default]
    Idle,

    /// Waiting for the response to `request_id`.
    Pending {
        request_id: RequestId,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// Latest accepted classification.
    Succeeded(SentimentResult),

    /// Latest accepted request failed.
    Failed { error: ClassifyError },
}

impl UiState for ViewState {}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            Self::Pending { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SentimentResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClassifyError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
