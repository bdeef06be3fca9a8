use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::section_rule;

/// Render the reference panel: essentials, emergency contacts, flights and
/// hotels. Static content; only the scroll offset changes.
pub fn render_reference_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let trip = &app.trip;
    let bg = theme.background;
    let base = Style::default().bg(bg);
    let width = area.width as usize;
    let heading = base.fg(theme.text_bright).add_modifier(Modifier::BOLD);
    let rule = base.fg(theme.dim);
    let text_w = width.saturating_sub(6).max(1);

    let mut lines: Vec<Line<'static>> = Vec::new();

    if !trip.essentials.is_empty() {
        lines.push(section_rule("Essentials", width, heading, rule));
        for (i, e) in trip.essentials.iter().enumerate() {
            let key = if i < 9 {
                format!(" [{}] ", i + 1)
            } else {
                "     ".to_string()
            };
            let mut spans = vec![Span::styled(key, base.fg(theme.highlight).add_modifier(Modifier::BOLD))];
            if !e.badge.is_empty() {
                spans.push(Span::styled(format!("{} ", e.badge), base.fg(theme.rose)));
            }
            spans.push(Span::styled(e.title.clone(), base.fg(theme.text_bright)));
            lines.push(Line::from(spans));
            if !e.subtitle.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("     {}", unicode::truncate_to_width(&e.subtitle, text_w)),
                    base.fg(theme.dim),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    lines.push(section_rule("Emergency Contacts", width, heading, rule));
    let name_w = trip
        .contacts
        .iter()
        .map(|c| unicode::display_width(&c.name))
        .max()
        .unwrap_or(0)
        .min(width / 2);
    for c in &trip.contacts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", unicode::pad_to_width(&c.name, name_w)),
                base.fg(theme.text),
            ),
            Span::styled(
                c.phone.clone(),
                base.fg(theme.text_bright).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if !trip.flights.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_rule("Flights", width, heading, rule));
        for f in &trip.flights {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", f.code),
                    base.fg(theme.highlight).add_modifier(Modifier::BOLD),
                ),
                Span::styled(f.route.clone(), base.fg(theme.text_bright)),
                Span::styled(format!("  {} {}", f.date, f.time), base.fg(theme.text)),
            ]));
            if !f.detail.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", f.detail),
                    base.fg(theme.dim),
                )));
            }
        }
    }

    if !trip.hotels.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_rule("Hotels", width, heading, rule));
        for h in &trip.hotels {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", h.name), base.fg(theme.text_bright)),
                Span::styled(format!("  {}", h.dates), base.fg(theme.amber)),
            ]));
            for l in unicode::wrap_to_width(&h.address, text_w) {
                lines.push(Line::from(Span::styled(format!("    {}", l), base.fg(theme.dim))));
            }
            if !h.note.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", h.note),
                    base.fg(theme.text),
                )));
            }
        }
    }

    let height = area.height as usize;
    let scroll = app.reference_scroll.min(lines.len().saturating_sub(height));
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    frame.render_widget(Paragraph::new(visible).style(base), area);
    app.reference_scroll = scroll;
}
