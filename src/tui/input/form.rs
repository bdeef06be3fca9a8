use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Keys while typing into the expense form. Input always edits the end of
/// the focused field.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_field = app.form_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.form_field = app.form_field.prev(),
        KeyCode::Backspace => {
            let field = app.form.field_mut(app.form_field);
            if let Some(boundary) = unicode::prev_grapheme_boundary(field, field.len()) {
                field.truncate(boundary);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.field_mut(app.form_field).clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.field_mut(app.form_field).push(c);
        }
        _ => {}
    }
}
