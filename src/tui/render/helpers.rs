use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad a line with styled spaces so its background fills `width` cells
pub(super) fn pad_spans(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// A section heading rule: `── Title ─────`
pub(super) fn section_rule(title: &str, width: usize, title_style: Style, rule_style: Style) -> Line<'static> {
    let lead = "\u{2500}\u{2500} ";
    let used = unicode::display_width(lead) + unicode::display_width(title) + 1;
    let tail = "\u{2500}".repeat(width.saturating_sub(used));
    Line::from(vec![
        Span::styled(lead, rule_style),
        Span::styled(title.to_string(), title_style),
        Span::styled(" ", rule_style),
        Span::styled(tail, rule_style),
    ])
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Scroll offset that keeps `cursor` inside a window of `height` rows
pub(super) fn scroll_to_cursor(scroll: usize, cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    if cursor < scroll {
        cursor
    } else if cursor >= scroll + height {
        cursor + 1 - height
    } else {
        scroll
    }
}
