use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // An open modal captures the keyboard until dismissed.
    if app.state().modal.is_visible() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.close_modal();
        }
        return;
    }

    if matches!(key.code, KeyCode::Tab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Backspace => app.search_mut().backspace(),
            KeyCode::Left => app.search_mut().move_left(),
            KeyCode::Right => app.search_mut().move_right(),
            KeyCode::Esc => app.request_quit(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_mut().insert(ch)
            }
            _ => {}
        },
        Focus::Results => match key.code {
            KeyCode::Up => app.move_selection(-1),
            KeyCode::Down => app.move_selection(1),
            KeyCode::Enter => app.open_selected(),
            KeyCode::Esc => app.focus_search(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
