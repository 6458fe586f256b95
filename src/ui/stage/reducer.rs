//! Reducer for the lemonade stage machine.

use crate::ui::mvi::Reducer;

use super::intent::StageIntent;
use super::state::StageState;

/// Pure transition function. The squeeze count arrives already drawn inside
/// the intent; the caller owns the random source.
pub struct StageReducer;

impl Reducer for StageReducer {
    type State = StageState;
    type Intent = StageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StageIntent::Enter {
                stage,
                squeeze_taps,
            } => StageState::entering(stage, squeeze_taps),

            StageIntent::Tap => {
                if state.complete {
                    return state;
                }
                if state.stage.uses_tap_count() {
                    // Clamped: extra taps never drive the count below zero.
                    let remaining_taps = state.remaining_taps.saturating_sub(1);
                    StageState {
                        remaining_taps,
                        complete: remaining_taps == 0,
                        ..state
                    }
                } else {
                    StageState {
                        complete: true,
                        ..state
                    }
                }
            }

            StageIntent::Advance { squeeze_taps } => {
                if !state.complete {
                    return state;
                }
                StageState::entering(state.stage.next(), squeeze_taps)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;

    #[test]
    fn tap_completes_single_tap_stage() {
        let state = StageReducer::reduce(StageState::default(), StageIntent::Tap);
        assert!(state.complete);
        assert_eq!(state.stage, Stage::Select);
    }

    #[test]
    fn tap_counts_down_in_squeeze() {
        let state = StageState::entering(Stage::Squeeze, 2);
        let state = StageReducer::reduce(state, StageIntent::Tap);
        assert_eq!(state.remaining_taps, 1);
        assert!(!state.complete);
        let state = StageReducer::reduce(state, StageIntent::Tap);
        assert_eq!(state.remaining_taps, 0);
        assert!(state.complete);
    }

    #[test]
    fn advance_requires_completion() {
        let state = StageReducer::reduce(
            StageState::default(),
            StageIntent::Advance { squeeze_taps: 3 },
        );
        assert_eq!(state, StageState::default());
    }
}
