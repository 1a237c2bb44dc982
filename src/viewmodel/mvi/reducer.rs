//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where screen state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// An intent that is not valid in the current state returns the state
    /// unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
