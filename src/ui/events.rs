use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use signal_hook::consts::{SIGINT, SIGTERM};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let shutdown_flag = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGINT] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&shutdown_flag)) {
                tracing::warn!(signal, error = %err, "failed to register signal handler");
            }
        }

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown_flag.swap(false, Ordering::Relaxed) {
                        if tx.send(AppEvent::Shutdown).is_err() {
                            break;
                        }
                    }

                    // Short poll timeout so the shutdown flag is checked frequently
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                            Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "terminal poll failed");
                            break;
                        }
                    };
                    // Receiver gone: the UI loop has exited.
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
            .map_err(|err| tracing::error!(error = %err, "failed to spawn event thread"))
            .ok();

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
