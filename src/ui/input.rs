use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Left => app.change_date(-1),
        KeyCode::Right => app.change_date(1),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Char(ch) => {
            if let Some(index) = slot_for_key(ch) {
                app.select_game(index);
            }
        }
        _ => {}
    }
}

/// List slot addressed by a key: `1`-`9` then `0` for slots 0-9, `a`-`f`
/// for slots 10-15.
fn slot_for_key(ch: char) -> Option<usize> {
    match ch {
        '1'..='9' => Some(ch as usize - '1' as usize),
        '0' => Some(9),
        'a'..='f' => Some(ch as usize - 'a' as usize + 10),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
