//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
///
/// Side effects (spawning requests, filtering stale responses) happen in the
/// caller before or after `reduce`, never inside it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
