//! State of the lemonade stage machine.

use crate::stage::{Stage, StageDescriptor};
use crate::ui::mvi::UiState;

/// Current stage plus its tap progress.
///
/// `complete` is true only once the current stage's tap requirement has been
/// met and goes back to false on every stage change. `remaining_taps` is only
/// read in [`Stage::Squeeze`] and kept at zero elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageState {
    pub stage: Stage,
    pub remaining_taps: u32,
    pub complete: bool,
}

impl UiState for StageState {}

impl StageState {
    /// Fresh state for `stage`. `squeeze_taps` is ignored outside the squeeze stage.
    pub fn entering(stage: Stage, squeeze_taps: u32) -> Self {
        Self {
            stage,
            remaining_taps: if stage.uses_tap_count() {
                squeeze_taps
            } else {
                0
            },
            complete: false,
        }
    }

    pub fn descriptor(&self) -> StageDescriptor {
        StageDescriptor::for_stage(self.stage, self.complete)
    }
}
