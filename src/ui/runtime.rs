use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the interactive session until the user quits or a signal arrives.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(app.mouse_enabled())?;
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(
        stage = app.controller().stage().number(),
        "session ended"
    );
    Ok(())
}
