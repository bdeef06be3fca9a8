use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, View};

use super::digit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Global keys first
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_view(true);
            return;
        }
        KeyCode::BackTab => {
            app.cycle_view(false);
            return;
        }
        KeyCode::Char('i') => {
            app.switch_view(View::Itinerary);
            return;
        }
        KeyCode::Char('r') => {
            app.switch_view(View::Reference);
            return;
        }
        KeyCode::Char('e') if app.config.ledger.enabled => {
            app.switch_view(View::Ledger);
            return;
        }
        _ => {}
    }

    match app.view {
        View::Itinerary => handle_itinerary_key(app, key),
        View::Reference => handle_reference_key(app, key),
        View::Ledger => handle_ledger_key(app, key),
    }
}

fn handle_itinerary_key(app: &mut App, key: KeyEvent) {
    if let Some(n) = digit(key.code) {
        app.select_day(n - 1);
        return;
    }
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.select_prev_day(),
        KeyCode::Char('l') | KeyCode::Right => app.select_next_day(),
        KeyCode::Char('j') | KeyCode::Down => app.move_item_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_item_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.item_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.item_cursor = app.current_items().len().saturating_sub(1);
        }
        KeyCode::Enter => app.open_item_at(app.item_cursor),
        _ => {}
    }
}

fn handle_reference_key(app: &mut App, key: KeyEvent) {
    if let Some(n) = digit(key.code) {
        app.open_essential(n);
        return;
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.reference_scroll = app.reference_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.reference_scroll = app.reference_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.reference_scroll = 0,
        _ => {}
    }
}

fn handle_ledger_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Enter => app.begin_form(),
        KeyCode::Char('j') | KeyCode::Down => app.move_ledger_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_ledger_cursor(-1),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_cursor_entry(),
        _ => {}
    }
}
