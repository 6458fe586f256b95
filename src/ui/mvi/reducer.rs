//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// Implementations are pure. Anything with side effects (drawing a random
/// number, logging) is done by the caller before or after `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
