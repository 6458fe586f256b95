use crate::stage::Stage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageIntent {
    /// Jump to `stage` with completion cleared.
    /// `squeeze_taps` becomes the tap count when `stage` is the squeeze stage.
    Enter { stage: Stage, squeeze_taps: u32 },
    /// User tapped the stage image.
    Tap,
    /// User pressed Next/Restart. Ignored until the stage is complete.
    Advance { squeeze_taps: u32 },
}

impl Intent for StageIntent {}
