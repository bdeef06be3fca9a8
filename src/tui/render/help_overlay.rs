use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, View};

use super::helpers::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    let detail_open = app.view == View::Itinerary && app.itinerary.open_item().is_some();
    if detail_open {
        lines.push(Line::from(Span::styled(" Item Detail", header_style)));
        add_binding(&mut lines, " 1-9", "Open link N", key_style, desc_style);
        add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Scroll", key_style, desc_style);
        add_binding(&mut lines, " Space/PgDn", "Page down", key_style, desc_style);
        add_binding(&mut lines, " Esc/q/Enter", "Close", key_style, desc_style);
        lines.push(Line::from(""));
    } else {
        match app.view {
            View::Itinerary => {
                lines.push(Line::from(Span::styled(" Itinerary", header_style)));
                add_binding(&mut lines, " 1-9", "Select day N", key_style, desc_style);
                add_binding(&mut lines, " \u{2190}\u{2192}/hl", "Previous/next day", key_style, desc_style);
                add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
                add_binding(&mut lines, " g/G", "Jump to first/last", key_style, desc_style);
                add_binding(&mut lines, " Enter", "Open item detail", key_style, desc_style);
                lines.push(Line::from(""));
            }
            View::Reference => {
                lines.push(Line::from(Span::styled(" Reference", header_style)));
                add_binding(&mut lines, " 1-9", "Open essential link N", key_style, desc_style);
                add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Scroll", key_style, desc_style);
                lines.push(Line::from(""));
            }
            View::Ledger => {
                lines.push(Line::from(Span::styled(" Expenses", header_style)));
                add_binding(&mut lines, " a/Enter", "Add expense", key_style, desc_style);
                add_binding(&mut lines, " Tab/S-Tab", "Next/previous field", key_style, desc_style);
                add_binding(&mut lines, " Esc", "Leave the form", key_style, desc_style);
                add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Select entry", key_style, desc_style);
                add_binding(&mut lines, " d/x", "Delete entry", key_style, desc_style);
                lines.push(Line::from(""));
            }
        }
    }

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " Tab", "Next view", key_style, desc_style);
    let views = if app.config.ledger.enabled {
        "Itinerary / Reference / Expenses"
    } else {
        "Itinerary / Reference"
    };
    let keys = if app.config.ledger.enabled { " i/r/e" } else { " i/r" };
    add_binding(&mut lines, keys, views, key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+Q", "Quit (immediate)", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 30, |frame, area| {
            render_help_overlay(frame, app, area);
        })
    }

    #[test]
    fn itinerary_bindings() {
        let app = sample_app();
        let output = render(&app);
        assert!(output.contains("Itinerary"));
        assert!(output.contains("Select day N"));
        assert!(output.contains("Toggle this help"));
    }

    #[test]
    fn detail_bindings_when_item_open() {
        let mut app = sample_app();
        app.open_item_at(1);
        let output = render(&app);
        assert!(output.contains("Item Detail"));
        assert!(output.contains("Open link N"));
        assert!(!output.contains("Select day N"));
    }

    #[test]
    fn ledger_bindings() {
        let mut app = sample_app();
        app.switch_view(View::Ledger);
        let output = render(&app);
        assert!(output.contains("Add expense"));
        assert!(output.contains("Delete entry"));
    }
}
