//! Sentiment panel feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state enum
//! - `intent.rs` - Dispatches, outcomes and user actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Pure selection of the visual state
//! - `panel.rs` - Rendering

mod intent;
mod panel;
mod reducer;
mod state;
mod view;

pub use intent::SentimentIntent;
pub use panel::render_sentiment_panel;
pub use reducer::SentimentReducer;
pub use state::ViewState;
pub use view::{view_model, LabelCategory, ViewModel, EMPTY_PROMPT, IDLE_WITH_TEXT_PROMPT};
