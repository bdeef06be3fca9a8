use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, StatusKind, View};
use crate::util::unicode;

use super::helpers::{pad_spans, spans_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => app.theme.text,
            StatusKind::Error => app.theme.red,
        };
        spans.push(Span::styled(
            format!(" {}", unicode::truncate_to_width(&status.text, width.saturating_sub(2))),
            Style::default().fg(color).bg(bg),
        ));
    }

    // Key hint on the right, dropped when it does not fit
    let hint = hint_for(app);
    let hint_width = unicode::display_width(hint);
    let used = spans_width(&spans);
    if used + hint_width + 1 < width {
        pad_spans(&mut spans, width - hint_width - 1, Style::default().bg(bg));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn hint_for(app: &App) -> &'static str {
    if app.show_help {
        return "Esc close help";
    }
    match (app.view, app.mode) {
        (_, Mode::Form) => "Enter add  Tab next field  Esc done",
        (View::Itinerary, _) if app.itinerary.open_item().is_some() => "1-9 open link  Esc close",
        (View::Itinerary, _) => "Enter open  1-9 day  ? help",
        (View::Reference, _) => "1-9 open link  ? help",
        (View::Ledger, _) => "a add  d delete  ? help",
    }
}
