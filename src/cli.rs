use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::script::ScriptAction;

/// Make lemonade one tap at a time.
#[derive(Debug, Parser)]
#[command(name = "lemonade", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fewest taps needed to squeeze a lemon
    #[arg(long, value_name = "N")]
    pub min_taps: Option<u32>,

    /// Most taps needed to squeeze a lemon
    #[arg(long, value_name = "N")]
    pub max_taps: Option<u32>,

    /// Seed for the squeeze count, for reproducible sessions
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Do not capture the mouse; keyboard only
    #[arg(long)]
    pub no_mouse: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a sequence of actions without a terminal UI and print each state as JSON
    Script {
        /// Actions to perform, in order
        #[arg(value_enum)]
        actions: Vec<ScriptAction>,
    },
}

impl Cli {
    /// `Some(false)` when mouse capture was turned off on the command line.
    pub fn mouse_override(&self) -> Option<bool> {
        self.no_mouse.then_some(false)
    }
}
