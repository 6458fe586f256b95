//! Headless mode: replays taps and button presses against a controller and
//! prints a JSON snapshot after each one.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::controller::StageController;
use crate::random::RandomRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptAction {
    /// Tap the stage image.
    Tap,
    /// Press the Next/Restart button (ignored while disabled).
    Next,
}

/// Writes the initial snapshot, then one line per action.
pub fn run_script<R: RandomRange, W: Write>(
    controller: &mut StageController<R>,
    actions: &[ScriptAction],
    out: &mut W,
) -> io::Result<()> {
    write_snapshot(controller, out)?;
    for action in actions {
        match action {
            ScriptAction::Tap => controller.tap(),
            ScriptAction::Next => {
                if controller.describe().button_enabled {
                    controller.advance();
                }
            }
        }
        write_snapshot(controller, out)?;
    }
    out.flush()
}

fn write_snapshot<R: RandomRange, W: Write>(
    controller: &StageController<R>,
    out: &mut W,
) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &controller.snapshot())?;
    out.write_all(b"\n")
}
