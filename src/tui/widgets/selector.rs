//! Catalog selection control: a placeholder row plus the catalog entries,
//! cycled in place with the arrow keys.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Cycles through `None` (the placeholder row) followed by every catalog
/// entry, wrapping in both directions.
///
/// The placeholder sits first, matching the selection control's layout, so
/// stepping backwards from the first entry lands on "nothing selected".
pub fn cycle_selection<T: Copy + PartialEq>(
    items: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    let len = items.len() + 1;
    let pos = match current {
        None => 0,
        Some(value) => items
            .iter()
            .position(|&item| item == value)
            .map_or(0, |i| i + 1),
    };
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    if next == 0 { None } else { Some(items[next - 1]) }
}

/// Renders one selection control row.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_selector(
    title: &str,
    placeholder: &str,
    selected: Option<&str>,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let value_style = if selected.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::styled(selected.unwrap_or(placeholder), value_style)];
    if focused {
        spans.push(Span::styled("  ◂ ▸", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
