use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Item;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::{centered_rect, pad_spans, section_rule};

const MAP_LINK_TEXT: &str = "開啟 Google Maps 導航";
const STAFF_HEADING: &str = "Show to Staff / 站務員專用";

/// Render the detail overlay for the open item on top of the itinerary.
/// Records the overlay rectangle so clicks outside it can close it.
pub fn render_detail_overlay(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(item) = app.itinerary.open_item() else {
        app.detail_area = None;
        return;
    };
    let next = app.itinerary.next_item(&app.trip);

    let overlay = centered_rect(80, 90, area);
    frame.render_widget(Clear, overlay);

    let theme = &app.theme;
    let bg = theme.surface;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .style(Style::default().bg(bg))
        .title(Span::styled(
            " Esc close  1-9 open link ",
            Style::default().fg(theme.dim).bg(bg),
        ));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let footer_h = if next.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(footer_h)])
        .split(inner);

    let width = chunks[0].width as usize;
    let lines = detail_lines(theme, item, width);

    let height = chunks[0].height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let scroll = app.detail_scroll.min(max_scroll);

    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    frame.render_widget(
        Paragraph::new(visible).style(Style::default().bg(bg)),
        chunks[0],
    );

    if let Some(next) = next {
        render_next_stop(frame, theme, next, chunks[1]);
    }

    app.detail_scroll = scroll;
    app.detail_area = Some(overlay);
}

/// Body lines of the overlay. Staff instructions and the note keep their
/// line breaks; long lines wrap at the overlay edge.
fn detail_lines(theme: &Theme, item: &Item, width: usize) -> Vec<Line<'static>> {
    let bg = theme.surface;
    let base = Style::default().bg(bg);
    let text_w = width.saturating_sub(2).max(1);
    let heading = base.fg(theme.text_bright).add_modifier(Modifier::BOLD);
    let rule = base.fg(theme.dim);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let push_text = |lines: &mut Vec<Line<'static>>, text: &str, style: Style| {
        for l in unicode::wrap_to_width(text, text_w) {
            lines.push(Line::from(vec![Span::styled(" ", base), Span::styled(l, style)]));
        }
    };

    // Header
    let cat_color = theme.category_color(item.category);
    lines.push(Line::from(vec![
        Span::styled(" ", base),
        Span::styled(
            item.time.clone(),
            base.fg(theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", base),
        Span::styled(format!("{} {}", item.category.glyph(), item.category.label()), base.fg(cat_color)),
    ]));
    push_text(
        &mut lines,
        &item.title,
        base.fg(theme.text_bright).add_modifier(Modifier::BOLD),
    );

    if let Some(loc) = &item.location {
        push_text(&mut lines, &format!("@ {}", loc), base.fg(theme.text));
    }

    if !item.tags.is_empty() {
        let mut spans = vec![Span::styled(" ", base)];
        for (j, tag) in item.tags.iter().enumerate() {
            if j > 0 {
                spans.push(Span::styled(" ", base));
            }
            spans.push(Span::styled(format!("#{}", tag), base.fg(theme.tag_color(tag))));
        }
        lines.push(Line::from(spans));
    }

    // Links are numbered in display order: map, primary, additional
    let mut number = 0;
    if item.map_link.is_some() {
        number += 1;
        lines.push(Line::from(""));
        lines.push(link_line(theme, number, MAP_LINK_TEXT, width));
    }

    if let Some(guide) = &item.guide_highlight {
        lines.push(Line::from(""));
        lines.push(section_rule("Travel Guide", width, heading, rule));
        push_text(&mut lines, guide, base.fg(theme.text).add_modifier(Modifier::ITALIC));
    }

    if let Some(staff) = &item.staff_instructions {
        let staff_style = Style::default().bg(theme.staff_bg);
        lines.push(Line::from(""));
        lines.push(section_rule(
            STAFF_HEADING,
            width,
            base.fg(theme.amber).add_modifier(Modifier::BOLD),
            rule,
        ));
        for l in unicode::wrap_to_width(staff, text_w) {
            let mut spans = vec![
                Span::styled(" ", base),
                Span::styled(l, staff_style.fg(theme.text_bright)),
            ];
            pad_spans(&mut spans, width.saturating_sub(1), staff_style);
            lines.push(Line::from(spans));
        }
    }

    if let Some(note) = &item.note {
        lines.push(Line::from(""));
        lines.push(section_rule("Details", width, heading, rule));
        push_text(&mut lines, note, base.fg(theme.text));
    }

    let mut other_links = Vec::new();
    if item.primary_link.is_some() {
        other_links.push(item.primary_link_label().to_string());
    }
    other_links.extend(item.additional_links.iter().map(|l| l.label.clone()));
    if !other_links.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_rule("Links", width, heading, rule));
        for label in other_links {
            number += 1;
            lines.push(link_line(theme, number, &label, width));
        }
    }

    lines
}

fn link_line(theme: &Theme, number: usize, label: &str, width: usize) -> Line<'static> {
    let base = Style::default().bg(theme.surface);
    let key = if number <= 9 {
        format!("[{}]", number)
    } else {
        "[ ]".to_string()
    };
    let text = unicode::truncate_to_width(label, width.saturating_sub(8).max(1));
    Line::from(vec![
        Span::styled(" ", base),
        Span::styled(key, base.fg(theme.highlight).add_modifier(Modifier::BOLD)),
        Span::styled(" ", base),
        Span::styled(text, base.fg(theme.blue).add_modifier(Modifier::UNDERLINED)),
        Span::styled(" \u{2197}", base.fg(theme.dim)),
    ])
}

fn render_next_stop(frame: &mut Frame, theme: &Theme, next: &Item, area: Rect) {
    let bg = theme.surface;
    let base = Style::default().bg(bg);
    let width = area.width as usize;

    let rule = Line::from(Span::styled("\u{2500}".repeat(width), base.fg(theme.dim)));

    let mut head = vec![Span::styled(" NEXT STOP", base.fg(theme.dim))];
    let label_w = unicode::display_width(&next.time) + 1;
    pad_spans(&mut head, width.saturating_sub(label_w), base);
    head.push(Span::styled(next.time.clone(), base.fg(theme.highlight)));

    let title = unicode::truncate_to_width(&next.title, width.saturating_sub(4).max(1));
    let body = Line::from(vec![
        Span::styled(" ", base),
        Span::styled(title, base.fg(theme.text_bright).add_modifier(Modifier::BOLD)),
        Span::styled(" \u{2192}", base.fg(theme.dim)),
    ]);

    frame.render_widget(
        Paragraph::new(vec![rule, Line::from(head), body]).style(base),
        area,
    );
}
