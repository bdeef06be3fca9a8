use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FormField;
use crate::ops::ledger_ops::format_amount;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{pad_spans, scroll_to_cursor, section_rule};

const EMPTY_TEXT: &str = "尚無紀錄 (no expenses yet)";

/// Render the expense ledger: total, entry form, entries (newest first) and
/// per-payer subtotals
pub fn render_ledger_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let base = Style::default().bg(bg);
    let width = area.width as usize;
    let heading = base.fg(theme.text_bright).add_modifier(Modifier::BOLD);
    let rule = base.fg(theme.dim);
    let symbol = app.config.ledger.currency_symbol.as_str();
    let editing = app.mode == Mode::Form;

    let mut lines: Vec<Line> = Vec::new();

    // Total
    lines.push(Line::from(Span::styled(" TOTAL EXPENSES", base.fg(theme.dim))));
    lines.push(Line::from(vec![
        Span::styled(format!("   {} ", symbol), base.fg(theme.text)),
        Span::styled(
            format_amount(app.ledger.total()),
            base.fg(theme.text_bright).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    // Form
    lines.push(section_rule("Add expense", width, heading, rule));
    let fields = [
        (FormField::Description, "Item", "項目..."),
        (FormField::Amount, "Amount", "0"),
        (FormField::Payer, "Payer", ""),
    ];
    for (field, label, placeholder) in fields {
        let focused = editing && app.form_field == field;
        let value = app.form.field(field);
        let field_bg = if focused { theme.selection_bg } else { theme.surface };
        let field_style = Style::default().bg(field_bg);
        let input_w = width.saturating_sub(14).clamp(1, 40);
        let mut spans = vec![
            Span::styled(
                format!("  {:<8}", label),
                if focused {
                    base.fg(theme.highlight).add_modifier(Modifier::BOLD)
                } else {
                    base.fg(theme.text)
                },
            ),
            Span::styled(" ", field_style),
        ];
        if field == FormField::Amount {
            spans.push(Span::styled(format!("{} ", symbol), field_style.fg(theme.dim)));
        }
        if value.is_empty() && !focused {
            spans.push(Span::styled(placeholder.to_string(), field_style.fg(theme.dim)));
        } else {
            let shown = tail_to_width(value, input_w.saturating_sub(2));
            spans.push(Span::styled(shown, field_style.fg(theme.text_bright)));
        }
        if focused {
            spans.push(Span::styled("\u{258C}", field_style.fg(theme.highlight)));
        }
        let pad_to = 11 + input_w;
        pad_spans(&mut spans, pad_to, field_style);
        lines.push(Line::from(spans));
    }
    let hint = if editing {
        "  Enter add  Tab next field  Esc done"
    } else {
        "  a add  j/k select  d delete"
    };
    lines.push(Line::from(Span::styled(hint, base.fg(theme.dim))));
    lines.push(Line::from(""));

    // Entries
    lines.push(section_rule("Entries", width, heading, rule));
    let entries_start = lines.len();
    let entries = app.ledger.entries();
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {}", EMPTY_TEXT), base.fg(theme.dim))));
    }
    let amount_w = entries
        .iter()
        .map(|e| unicode::display_width(&format_amount(e.amount)))
        .max()
        .unwrap_or(0)
        + unicode::display_width(symbol);
    for (i, entry) in entries.iter().enumerate() {
        let selected = !editing && i == app.ledger_cursor;
        let row_bg = if selected { theme.selection_bg } else { bg };
        let row = Style::default().bg(row_bg);
        let initial: String = entry.payer.chars().next().map(String::from).unwrap_or_default();
        let amount = format!("{}{}", symbol, format_amount(entry.amount));
        let desc_w = width.saturating_sub(amount_w + 16).max(1);
        let mut spans = vec![
            Span::styled(if selected { " \u{258E}" } else { "  " }, row.fg(theme.selection_border)),
            Span::styled(format!("{} ", unicode::pad_to_width(&initial, 2)), row.fg(theme.amber)),
            Span::styled(
                unicode::pad_to_width(&entry.description, desc_w),
                row.fg(theme.text_bright),
            ),
            Span::styled(format!(" {:>5} ", entry.created_date), row.fg(theme.dim)),
        ];
        let amount_style = if entry.amount < 0.0 {
            row.fg(theme.green)
        } else {
            row.fg(theme.text_bright).add_modifier(Modifier::BOLD)
        };
        let pad = amount_w.saturating_sub(unicode::display_width(&amount));
        spans.push(Span::styled(format!("{}{}", " ".repeat(pad), amount), amount_style));
        pad_spans(&mut spans, width, row);
        lines.push(Line::from(spans));
    }

    // Per-payer subtotals
    let by_payer = app.ledger.totals_by_payer();
    if !by_payer.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_rule("By payer", width, heading, rule));
        for (payer, sum) in by_payer {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", payer), base.fg(theme.text)),
                Span::styled(
                    format!("{}{}", symbol, format_amount(sum)),
                    base.fg(theme.text_bright),
                ),
            ]));
        }
    }

    // Keep the selected entry visible
    let height = area.height as usize;
    let cursor_line = entries_start + app.ledger_cursor.min(entries.len().saturating_sub(1));
    let scroll = scroll_to_cursor(0, cursor_line, height);
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    frame.render_widget(Paragraph::new(visible).style(base), area);
}

/// The end of `s` that fits in `width` cells, so the typing position stays visible
fn tail_to_width(s: &str, width: usize) -> String {
    if unicode::display_width(s) <= width {
        return s.to_string();
    }
    let mut start = s.len();
    while let Some(prev) = unicode::prev_grapheme_boundary(s, start) {
        if unicode::display_width(&s[prev..]) > width {
            break;
        }
        start = prev;
    }
    s[start..].to_string()
}
