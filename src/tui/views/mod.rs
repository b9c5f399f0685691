//! Screen rendering.

mod dashboard;
mod queries;
mod review;

pub use dashboard::render_dashboard;
pub use queries::render_queries;
pub use review::render_review;

use super::theme::{colors, Styles};
use super::viewmodel::FieldEditor;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Render an inline field editor with the active field highlighted.
pub(crate) fn render_editor(frame: &mut Frame, area: Rect, title: &str, editor: &FieldEditor) {
    let lines: Vec<Line> = editor
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let active = i == editor.active();
            let value_style = if active {
                Style::default().fg(colors().text).bg(colors().selection)
            } else {
                Styles::text()
            };
            let cursor = if active { "▏" } else { "" };
            Line::from(vec![
                Span::styled(format!(" {:>12}: ", field.label), Styles::label()),
                Span::styled(format!("{}{cursor}", field.value), value_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(title.to_string())
        .title_bottom(Line::styled(
            " [Ctrl+S] save  [Esc] cancel  [⇥] next field ",
            Styles::shortcut_desc(),
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
