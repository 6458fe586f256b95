//! Owner of the stage machine for one session.

use serde::Serialize;

use crate::random::{RandomRange, ThreadRandom};
use crate::stage::{Stage, StageDescriptor};
use crate::ui::mvi::Reducer;
use crate::ui::stage::{StageIntent, StageReducer, StageState};

pub const DEFAULT_MIN_SQUEEZE_TAPS: u32 = 2;
pub const DEFAULT_MAX_SQUEEZE_TAPS: u32 = 4;

/// Inclusive range the squeeze count is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqueezeRange {
    min: u32,
    max: u32,
}

impl SqueezeRange {
    /// `None` unless `1 <= min <= max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min >= 1 && min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, taps: u32) -> bool {
        (self.min..=self.max).contains(&taps)
    }
}

impl Default for SqueezeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SQUEEZE_TAPS,
            max: DEFAULT_MAX_SQUEEZE_TAPS,
        }
    }
}

/// Point-in-time view of a controller, as printed by script mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSnapshot {
    pub stage: u8,
    pub remaining_taps: u32,
    pub complete: bool,
    pub descriptor: StageDescriptor,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Drives the lemonade flow: Select → Squeeze → Drink → Restart → Select.
///
/// Every mutation goes through [`StageReducer`]. The controller's own job is
/// to draw the squeeze count from its [`RandomRange`] when, and only when,
/// the squeeze stage is being entered.
pub struct StageController<R = ThreadRandom> {
    state: StageState,
    rng: R,
    squeeze: SqueezeRange,
}

impl Default for StageController<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

impl<R: RandomRange> StageController<R> {
    /// Starts in [`Stage::Select`] with the default squeeze range.
    pub fn new(rng: R) -> Self {
        Self::with_range(rng, SqueezeRange::default())
    }

    pub fn with_range(rng: R, squeeze: SqueezeRange) -> Self {
        Self {
            state: StageState::default(),
            rng,
            squeeze,
        }
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn remaining_taps(&self) -> u32 {
        self.state.remaining_taps
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    pub fn state(&self) -> &StageState {
        &self.state
    }

    pub fn squeeze_range(&self) -> SqueezeRange {
        self.squeeze
    }

    /// Moves to `stage` with completion cleared, re-rolling the squeeze
    /// count if `stage` is the squeeze stage.
    pub fn enter_stage(&mut self, stage: Stage) {
        let squeeze_taps = self.draw_for(stage);
        self.dispatch(StageIntent::Enter {
            stage,
            squeeze_taps,
        });
        tracing::debug!(
            stage = stage.number(),
            remaining_taps = self.state.remaining_taps,
            "entered stage"
        );
    }

    /// One interaction with the stage image.
    pub fn tap(&mut self) {
        let was_complete = self.state.complete;
        self.dispatch(StageIntent::Tap);
        if !was_complete && self.state.complete {
            tracing::debug!(stage = self.state.stage.number(), "stage complete");
        }
    }

    /// The Next/Restart action. Returns `false` and changes nothing while the
    /// current stage is incomplete.
    pub fn advance(&mut self) -> bool {
        if !self.state.complete {
            tracing::trace!(
                stage = self.state.stage.number(),
                "advance ignored, stage incomplete"
            );
            return false;
        }
        let next = self.state.stage.next();
        let squeeze_taps = self.draw_for(next);
        self.dispatch(StageIntent::Advance { squeeze_taps });
        tracing::debug!(
            stage = next.number(),
            remaining_taps = self.state.remaining_taps,
            "advanced"
        );
        true
    }

    pub fn describe(&self) -> StageDescriptor {
        self.state.descriptor()
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            stage: self.state.stage.number(),
            remaining_taps: self.state.remaining_taps,
            complete: self.state.complete,
            descriptor: self.describe(),
        }
    }

    fn draw_for(&mut self, stage: Stage) -> u32 {
        if stage.uses_tap_count() {
            self.rng.next(self.squeeze.min, self.squeeze.max)
        } else {
            0
        }
    }

    fn dispatch(&mut self, intent: StageIntent) {
        dispatch_mvi!(self, state, StageReducer, intent);
    }
}
