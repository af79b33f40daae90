//! Reducer for the sentiment panel.

use crate::ui::mvi::Reducer;

use super::intent::SentimentIntent;
use super::state::ViewState;

/// State transitions for [`ViewState`].
///
/// Staleness is decided by the request sequencer before an outcome reaches
/// the reducer, so `Classified` and `Failed` are applied unconditionally.
pub struct SentimentReducer;

impl Reducer for SentimentReducer {
    type State = ViewState;
    type Intent = SentimentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SentimentIntent::Dispatched { request_id } => ViewState::Pending {
                request_id,
                animation_tick: 0,
            },

            SentimentIntent::Classified { result } => ViewState::Succeeded(result),

            SentimentIntent::Failed { error } => ViewState::Failed { error },

            SentimentIntent::Reset => ViewState::Idle,

            SentimentIntent::Dismiss => match state {
                ViewState::Failed { .. } => ViewState::Idle,
                other => other,
            },

            SentimentIntent::AnimationTick => match state {
                ViewState::Pending {
                    request_id,
                    animation_tick,
                } => ViewState::Pending {
                    request_id,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
        }
    }
}
