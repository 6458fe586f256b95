use anyhow::Context;
use clap::Parser;
use lemonade::cli::{Cli, Command};
use lemonade::config::Config;
use lemonade::logging::{init_tracing, LogTarget};
use lemonade::random::{RandomRange, SeededRandom, ThreadRandom};
use lemonade::script::run_script;
use lemonade::ui::app::App;
use lemonade::StageController;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?.with_overrides(
        cli.min_taps,
        cli.max_taps,
        cli.mouse_override(),
    )?;
    let squeeze = config.squeeze_range()?;

    let rng: Box<dyn RandomRange> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let mut controller = StageController::with_range(rng, squeeze);

    match cli.command {
        Some(Command::Script { actions }) => {
            init_tracing(LogTarget::Stderr, &config.logging.level)?;
            let stdout = std::io::stdout();
            run_script(&mut controller, &actions, &mut stdout.lock())
                .context("failed to write script output")?;
        }
        None => {
            let log_path = config.log_path();
            if let Err(err) = init_tracing(LogTarget::File(&log_path), &config.logging.level) {
                eprintln!("warning: logging disabled, cannot open {}: {err}", log_path.display());
            }
            tracing::info!(
                config = %config_path.display(),
                min_taps = squeeze.min(),
                max_taps = squeeze.max(),
                "starting lemonade"
            );
            let app = App::new(controller, config.ui.mouse);
            lemonade::ui::runtime::run(app, config.tick_rate())
                .context("terminal session failed")?;
        }
    }

    Ok(())
}
