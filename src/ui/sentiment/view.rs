//! Pure mapping from store contents to what the panel shows.

use crate::ui::input_text::InputText;

use super::state::ViewState;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const EMPTY_PROMPT: &str = "Enter some text above to get started with sentiment analysis";
pub const IDLE_WITH_TEXT_PROMPT: &str = "Press Ctrl+R to analyze the current text";

/// Badge colour family for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCategory {
    Positive,
    Negative,
    /// Anything else, including "neutral" and unknown labels.
    Other,
}

impl LabelCategory {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Other,
        }
    }
}

/// One of four mutually exclusive visual states.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    EmptyPrompt {
        hint: &'static str,
    },
    Loading {
        spinner: &'static str,
    },
    Result {
        label: String,
        category: LabelCategory,
        /// Fill ratio for the score bar, in `[0, 1]`.
        ratio: f64,
        percent_text: String,
        time_text: String,
    },
    Error {
        message: String,
        details: String,
    },
}

pub fn view_model(input: &InputText, state: &ViewState) -> ViewModel {
    match state {
        ViewState::Idle => ViewModel::EmptyPrompt {
            hint: if input.is_blank() {
                EMPTY_PROMPT
            } else {
                IDLE_WITH_TEXT_PROMPT
            },
        },
        ViewState::Pending { animation_tick, .. } => ViewModel::Loading {
            spinner: SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()],
        },
        ViewState::Succeeded(result) => ViewModel::Result {
            label: result.label().to_string(),
            category: LabelCategory::from_label(result.label()),
            ratio: result.score(),
            percent_text: format!("{:.1}%", result.percentage()),
            time_text: format!("{} ms", result.time_taken()),
        },
        ViewState::Failed { error } => ViewModel::Error {
            message: error.user_message(),
            details: error.details(),
        },
    }
}
