use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Hit};
use crate::util::unicode;

/// Width of one day cell, including the gap on its right
const CELL_W: usize = 10;

/// Rows used by the day selector (label, date, weather, separator)
pub const DAY_BAR_HEIGHT: u16 = 4;

/// Render the horizontal day selector. Scrolls so the selected day stays
/// visible when the days do not fit.
pub fn render_day_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let day_count = app.trip.day_count();
    let selected = app.itinerary.selected_day();

    let visible = (width / CELL_W).max(1);
    let first = if selected >= visible {
        selected + 1 - visible
    } else {
        0
    };

    let mut rows: [Vec<Span>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut hits = Vec::new();

    for (slot, idx) in (first..day_count.min(first + visible)).enumerate() {
        let day = &app.trip.days[idx];
        let is_selected = idx == selected;
        let cell_bg = if is_selected {
            app.theme.selection_bg
        } else {
            app.theme.surface
        };
        let label_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(cell_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(cell_bg)
        };
        let inner = CELL_W - 1;

        let label = format!(" {} {}", day.day_label, day.weekday);
        rows[0].push(Span::styled(unicode::pad_to_width(&label, inner), label_style));

        let date = format!(" {}", day.date);
        rows[1].push(Span::styled(
            unicode::pad_to_width(&date, inner),
            Style::default()
                .fg(if is_selected { app.theme.highlight } else { app.theme.dim })
                .bg(cell_bg)
                .add_modifier(Modifier::BOLD),
        ));

        let weather = format!(" {} {}", day.weather.icon.glyph(), day.weather.temp);
        rows[2].push(Span::styled(
            unicode::pad_to_width(&weather, inner),
            Style::default()
                .fg(app.theme.weather_color(day.weather.icon))
                .bg(cell_bg),
        ));

        for row in rows.iter_mut() {
            row.push(Span::styled(" ", Style::default().bg(bg)));
        }

        let x = area.x + (slot * CELL_W) as u16;
        hits.push((
            Rect::new(x, area.y, inner as u16, 3).intersection(area),
            Hit::Day(idx),
        ));
    }

    let mut lines: Vec<Line> = rows.into_iter().map(Line::from).collect();

    // Scroll markers and condition of the selected day on the separator row
    let mut sep_spans = Vec::new();
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    sep_spans.push(Span::styled(if first > 0 { "\u{2039} " } else { "  " }, dim));
    if let Some(day) = app.trip.day(selected) {
        sep_spans.push(Span::styled(day.weather.condition.clone(), dim));
    }
    if first + visible < day_count {
        sep_spans.push(Span::styled(" \u{203A}", dim));
    }
    lines.push(Line::from(sep_spans));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
    app.hitboxes.extend(hits);
}
