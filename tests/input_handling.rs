mod common;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use lemonade::ui::input::handle_key;
use lemonade::Stage;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn space_taps_and_enter_advances() {
    let mut app = common::app(&[2]);
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.controller().stage(), Stage::Select);

    handle_key(&mut app, key(KeyCode::Char(' ')));
    assert!(app.controller().is_complete());
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.controller().stage(), Stage::Squeeze);
    assert_eq!(app.controller().remaining_taps(), 2);
}

#[test]
fn letter_shortcuts() {
    let mut app = common::app(&[2]);
    handle_key(&mut app, key(KeyCode::Char('t')));
    handle_key(&mut app, key(KeyCode::Char('n')));
    assert_eq!(app.controller().stage(), Stage::Squeeze);
}

#[test]
fn key_release_is_ignored() {
    let mut app = common::app(&[2]);
    let mut release = key(KeyCode::Char(' '));
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert!(!app.controller().is_complete());
}

#[test]
fn quit_keys() {
    for event in [key(KeyCode::Char('q')), key(KeyCode::Esc), ctrl('q'), ctrl('c')] {
        let mut app = common::app(&[2]);
        handle_key(&mut app, event);
        assert!(app.should_quit());
    }
}

#[test]
fn ctrl_combinations_do_not_tap() {
    let mut app = common::app(&[2]);
    handle_key(&mut app, ctrl('t'));
    assert!(!app.controller().is_complete());
    assert!(!app.should_quit());
}

#[test]
fn full_session_by_mouse() {
    let mut app = common::app(&[3]);
    let regions = app.regions().expect("sized");
    let click = |column: u16, row: u16| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    };
    let image = click(regions.image.x + 2, regions.image.y + 2);
    let button = click(regions.button.x + 1, regions.button.y + 1);

    let mut stages = vec![app.controller().stage()];
    for _ in 0..4 {
        while !app.controller().is_complete() {
            app.on_mouse(image);
        }
        app.on_mouse(button);
        stages.push(app.controller().stage());
    }
    assert_eq!(
        stages,
        vec![
            Stage::Select,
            Stage::Squeeze,
            Stage::Drink,
            Stage::Restart,
            Stage::Select
        ]
    );
}

#[test]
fn right_click_is_ignored() {
    let mut app = common::app(&[2]);
    let image = app.regions().expect("sized").image;
    app.on_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: image.x + 1,
        row: image.y + 1,
        modifiers: KeyModifiers::empty(),
    });
    assert!(!app.controller().is_complete());
}
