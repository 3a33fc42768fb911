use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+Q always quits, even while a sheet is swallowing input.
    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.on_key(key) {
        return;
    }

    if matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(code) if code == ch)
}
