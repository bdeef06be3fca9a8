use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Item;
use crate::tui::app::{App, Hit};
use crate::util::unicode;

use super::day_bar::{self, DAY_BAR_HEIGHT};
use super::helpers::{pad_spans, scroll_to_cursor};

/// Max display lines of a note in the list
const NOTE_LINES: usize = 2;
/// Max display lines of the guide text on a highlight card
const GUIDE_LINES: usize = 3;

/// Render the itinerary: day selector on top, the selected day's items below
pub fn render_itinerary_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DAY_BAR_HEIGHT), Constraint::Min(1)])
        .split(area);

    day_bar::render_day_bar(frame, app, chunks[0]);
    render_item_list(frame, app, chunks[1]);
}

fn render_item_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let items = app.current_items();

    if items.is_empty() {
        let empty = Paragraph::new(" No plans for this day")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let time_w = items
        .iter()
        .map(|i| unicode::display_width(&i.time))
        .max()
        .unwrap_or(0)
        .max(5);

    // (item index, line) for every display row
    let mut rows: Vec<(Option<usize>, Line<'static>)> = Vec::new();
    let mut cursor_span = (0, 0);
    for (i, item) in items.iter().enumerate() {
        let is_cursor = i == app.item_cursor;
        let start = rows.len();
        for line in item_lines(app, item, is_cursor, time_w, width) {
            rows.push((Some(i), line));
        }
        if is_cursor {
            cursor_span = (start, rows.len());
        }
        rows.push((None, Line::from("")));
    }

    // Keep the whole cursor block on screen when it fits
    let height = area.height as usize;
    let mut scroll = scroll_to_cursor(app.item_scroll, cursor_span.1.saturating_sub(1), height);
    scroll = scroll.min(cursor_span.0);
    app.item_scroll = scroll;

    let mut lines = Vec::with_capacity(height);
    for (row, (item_idx, line)) in rows.into_iter().skip(scroll).take(height).enumerate() {
        if let Some(idx) = item_idx {
            app.hitboxes.push((
                Rect::new(area.x, area.y + row as u16, area.width, 1),
                Hit::Item(idx),
            ));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Display lines for one item: a plain row, or a card when the item has a
/// guide highlight
fn item_lines(app: &App, item: &Item, is_cursor: bool, time_w: usize, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let card = item.is_highlight();
    let bg = match (is_cursor, card) {
        (true, _) => theme.selection_bg,
        (false, true) => theme.card_bg,
        (false, false) => theme.background,
    };
    let base = Style::default().bg(bg);
    let cat_color = theme.category_color(item.category);
    let marker = if is_cursor { "\u{258E}" } else { " " };
    let marker_style = base.fg(theme.selection_border);
    let indent = 1 + time_w + 2 + 2;
    let text_w = width.saturating_sub(indent + 1).max(1);

    let mut lines = Vec::new();

    // Title row
    let mut spans = vec![
        Span::styled(marker.to_string(), marker_style),
        Span::styled(
            unicode::pad_to_width(&item.time, time_w),
            base.fg(theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", base),
    ];
    if card {
        spans.push(Span::styled("\u{2605} ", base.fg(theme.amber)));
        spans.push(Span::styled(
            "SPECIAL EXPERIENCE",
            base.fg(theme.amber).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(format!("{} ", item.category.glyph()), base.fg(cat_color)));
        spans.push(Span::styled(
            item.title.clone(),
            base.fg(theme.text_bright).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("  ", base));
        spans.push(Span::styled(format!("[{}]", item.category.label()), base.fg(cat_color)));
    }
    pad_spans(&mut spans, width, base);
    lines.push(Line::from(spans));

    let indented = |text: String, style: Style| {
        let mut spans = vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(" ".repeat(indent - 1), base),
            Span::styled(text, style),
        ];
        pad_spans(&mut spans, width, base);
        Line::from(spans)
    };

    if card {
        lines.push(indented(
            item.title.clone(),
            base.fg(theme.text_bright).add_modifier(Modifier::BOLD),
        ));
        if let Some(guide) = &item.guide_highlight {
            for l in unicode::clamp_lines(guide, text_w, GUIDE_LINES) {
                lines.push(indented(l, base.fg(theme.text).add_modifier(Modifier::ITALIC)));
            }
        }
    } else if let Some(note) = &item.note {
        for l in unicode::clamp_lines(note, text_w, NOTE_LINES) {
            lines.push(indented(l, base.fg(theme.dim)));
        }
    }

    if let Some(loc) = &item.location {
        lines.push(indented(
            unicode::truncate_to_width(&format!("@ {}", loc), text_w),
            base.fg(theme.dim),
        ));
    }

    if !item.tags.is_empty() {
        let mut spans = vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(" ".repeat(indent - 1), base),
        ];
        for (j, tag) in item.tags.iter().enumerate() {
            if j > 0 {
                spans.push(Span::styled(" ", base));
            }
            spans.push(tag_span(tag, theme.tag_color(tag), bg));
        }
        pad_spans(&mut spans, width, base);
        lines.push(Line::from(spans));
    }

    lines
}

fn tag_span(tag: &str, color: Color, bg: Color) -> Span<'static> {
    Span::styled(format!("#{}", tag), Style::default().fg(color).bg(bg))
}
