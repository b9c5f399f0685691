//! Tuple review grid.

use crate::model::Stage;
use crate::tui::constants::MARKER_WIDTH;
use crate::tui::theme::{colors, Styles};
use crate::tui::view_states::ReviewScreen;
use crate::tui::views::render_editor;
use crate::tui::widgets::{render_empty_state, render_selection_counter, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn render_review(frame: &mut Frame, area: Rect, screen: &mut ReviewScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if screen.is_editing() {
            [Constraint::Min(5), Constraint::Length(screen.columns().len() as u16 + 2)]
        } else {
            [Constraint::Min(5), Constraint::Length(0)]
        })
        .split(area);

    if screen.tuples().is_empty() {
        let hint = match screen.stage() {
            Stage::Generated => "Generate tuples from the dashboard [1], or [⇥] to view approved",
            Stage::Approved => "Approve tuples on the generated stage [⇥]",
        };
        render_empty_state(
            frame,
            chunks[0],
            &format!("No {} tuples", screen.stage()),
            Some(hint),
        );
        return;
    }

    let visible = chunks[0].height.saturating_sub(3) as usize;
    screen.list.scroll_into_view(visible);
    let columns = screen.columns().to_vec();
    let col_width = if columns.is_empty() {
        10
    } else {
        ((chunks[0].width.saturating_sub(MARKER_WIDTH + 2)) as usize / columns.len()).max(4)
    };

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(columns.iter().map(|c| Cell::from(c.clone())))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(colors().primary).bold());

    let scheme = colors();
    let rows: Vec<Row> = screen
        .tuples()
        .iter()
        .enumerate()
        .skip(screen.list.scroll_offset)
        .take(visible)
        .map(|(i, tuple)| {
            let marked = screen.selection().contains(i);
            let marker = Cell::from(if marked { "[x]" } else { "[ ]" })
                .style(Style::default().fg(if marked { scheme.marked } else { scheme.text_muted }));
            let cells = std::iter::once(marker).chain(columns.iter().map(|c| {
                Cell::from(truncate_str(tuple.get(c).unwrap_or("-"), col_width))
            }));
            let row = Row::new(cells.collect::<Vec<_>>());
            if i == screen.list.selected {
                row.style(Styles::selected())
            } else {
                row.style(Styles::text())
            }
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(MARKER_WIDTH))
        .chain(columns.iter().map(|_| Constraint::Fill(1)))
        .collect();

    let title = Line::from(vec![
        Span::styled(format!(" {} tuples ", screen.stage()), Styles::header_title()),
        render_selection_counter(screen.selection().len(), screen.tuples().len()),
    ]);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if screen.is_editing() {
                Styles::border()
            } else {
                Styles::border_focused()
            }),
    );
    frame.render_widget(table, chunks[0]);

    if let Some(edit) = screen.edit() {
        let title = format!(" Edit tuple {} ", edit.index + 1);
        render_editor(frame, chunks[1], &title, &edit.editor);
    }
}
