use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::digit;

/// Keys while the detail overlay is open: close, scroll, open numbered links
pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    if let Some(n) = digit(key.code) {
        app.open_detail_link(n);
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_detail(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.detail_scroll = app.detail_scroll.saturating_add(10);
        }
        KeyCode::PageUp => app.detail_scroll = app.detail_scroll.saturating_sub(10),
        KeyCode::Char('g') | KeyCode::Home => app.detail_scroll = 0,
        _ => {}
    }
}
