use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char(' ') | KeyCode::Char('t') | KeyCode::Char('T') => app.tap_image(),
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.press_button();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
