pub mod day_bar;
pub mod detail_overlay;
pub mod help_overlay;
mod helpers;
pub mod itinerary_view;
pub mod ledger_view;
pub mod reference_view;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Regions are registered again by each frame
    app.hitboxes.clear();

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Itinerary => itinerary_view::render_itinerary_view(frame, app, chunks[1]),
        View::Reference => reference_view::render_reference_view(frame, app, chunks[1]),
        View::Ledger => ledger_view::render_ledger_view(frame, app, chunks[1]),
    }

    // Detail overlay sits on top of the itinerary only
    if app.view == View::Itinerary && app.itinerary.open_item().is_some() {
        detail_overlay::render_detail_overlay(frame, app, chunks[1]);
    } else {
        app.detail_area = None;
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
