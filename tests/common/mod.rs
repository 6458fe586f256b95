//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use lemonade::random::{RandomRange, ScriptedRandom};
use lemonade::ui::app::{App, SessionController};
use lemonade::StageController;
use std::path::PathBuf;
use tempfile::TempDir;

/// Controller whose squeeze counts come from `values`, in order.
pub fn scripted(values: &[u32]) -> StageController<ScriptedRandom> {
    StageController::new(ScriptedRandom::new(values.to_vec()))
}

/// Drives the controller to completion of its current stage.
pub fn complete_stage<R: RandomRange>(controller: &mut StageController<R>) {
    let mut guard = 0;
    while !controller.is_complete() {
        controller.tap();
        guard += 1;
        assert!(guard < 100, "stage never completed");
    }
}

/// App sized like a typical terminal, squeeze counts from `values`.
pub fn app(values: &[u32]) -> App {
    let rng: Box<dyn RandomRange> = Box::new(ScriptedRandom::new(values.to_vec()));
    let controller: SessionController = StageController::new(rng);
    let mut app = App::new(controller, true);
    app.on_resize(100, 40);
    app
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
