use crate::ui::app::{App, Focus};
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.confirm().is_visible() {
        handle_confirm_key(app, key);
        return;
    }

    match app.focus() {
        Focus::List => handle_list_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.resolve_confirm(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_confirm(false),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_confirm(),
        KeyCode::Enter => app.accept_highlighted(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('n') | KeyCode::Tab => app.focus_form(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('x') => app.dismiss_error(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::BackTab => app.form_input(FormIntent::NextField),
        KeyCode::Backspace => app.form_input(FormIntent::Backspace),
        code if app.form().focused == FormField::Rating => match code {
            KeyCode::Left | KeyCode::Down => app.form_input(FormIntent::RatingDown),
            KeyCode::Right | KeyCode::Up => app.form_input(FormIntent::RatingUp),
            KeyCode::Char(ch) => {
                if let Some(rating) = digit_rating(ch) {
                    app.form_input(FormIntent::SelectRating(rating));
                }
            }
            _ => {}
        },
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(FormIntent::InsertChar(ch));
        }
        _ => {}
    }
}

/// `1`-`9` pick that rating, `0` picks 10.
fn digit_rating(ch: char) -> Option<u8> {
    match ch.to_digit(10)? {
        0 => Some(10),
        n => Some(n as u8),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
