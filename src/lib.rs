pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod random;
pub mod resources;
pub mod script;
pub mod stage;
pub mod ui;

pub use controller::{SqueezeRange, StageController, StageSnapshot};
pub use stage::{Stage, StageDescriptor};
