mod detail;
mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, Hit, Mode, View};

use detail::handle_detail;
use form::handle_form;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    let key = normalize_key(key);
    app.status = None;

    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Detail overlay sits above the itinerary and takes every key
    if app.view == View::Itinerary && app.itinerary.is_detail_open() {
        handle_detail(app, key);
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Form => handle_form(app, key),
    }
}

/// Handle a mouse event: clicks on tabs, days and items, the backdrop
/// behind the detail overlay, and the scroll wheel.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let overlay_open = app.view == View::Itinerary && app.itinerary.is_detail_open();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status = None;
            if app.show_help {
                app.show_help = false;
                return;
            }
            if overlay_open {
                let inside = app
                    .detail_area
                    .is_some_and(|r| r.contains((mouse.column, mouse.row).into()));
                if !inside {
                    app.close_detail();
                }
                return;
            }
            match app.hit_at(mouse.column, mouse.row) {
                Some(Hit::Tab(view)) => app.switch_view(view),
                Some(Hit::Day(index)) => app.select_day(index),
                Some(Hit::Item(index)) => app.open_item_at(index),
                None => {}
            }
        }
        MouseEventKind::ScrollDown => scroll(app, overlay_open, 1),
        MouseEventKind::ScrollUp => scroll(app, overlay_open, -1),
        _ => {}
    }
}

fn scroll(app: &mut App, overlay_open: bool, delta: isize) {
    if overlay_open {
        app.detail_scroll = app.detail_scroll.saturating_add_signed(delta);
        return;
    }
    match app.view {
        View::Itinerary => app.move_item_cursor(delta),
        View::Reference => {
            app.reference_scroll = app.reference_scroll.saturating_add_signed(delta);
        }
        View::Ledger => app.move_ledger_cursor(delta),
    }
}

/// Digit keys 1-9 as a 1-based number
fn digit(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

/// Normalize key events from terminals using the kitty keyboard protocol.
///
/// Kitty sends `Char('/') + SHIFT` instead of `Char('?')`, and lowercase
/// letters with SHIFT instead of uppercase ones.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
    {
        if c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        } else if c == '/' {
            key.code = KeyCode::Char('?');
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    key
}
