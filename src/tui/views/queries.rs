//! Query review list.

use crate::tui::theme::{query_status_badge, Styles};
use crate::tui::view_states::QueriesScreen;
use crate::tui::views::render_editor;
use crate::tui::widgets::{render_empty_state, render_selection_counter, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

pub fn render_queries(frame: &mut Frame, area: Rect, screen: &mut QueriesScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(if screen.is_editing() { 3 } else { 0 }),
        ])
        .split(area);

    if screen.queries().is_empty() {
        render_empty_state(
            frame,
            chunks[0],
            &format!("No {} queries", screen.stage()),
            Some("Approve tuples, then press [G] to generate queries"),
        );
        return;
    }

    // Two lines per query: text, then the source tuple.
    let visible = (chunks[0].height.saturating_sub(2) / 2) as usize;
    screen.list.scroll_into_view(visible);
    let text_width = chunks[0].width.saturating_sub(20) as usize;

    let items: Vec<ListItem> = screen
        .queries()
        .iter()
        .enumerate()
        .skip(screen.list.scroll_offset)
        .take(visible)
        .map(|(i, query)| {
            let marker = if screen.selection().contains(i) { "[x] " } else { "[ ] " };
            let lines = vec![
                Line::from(vec![
                    Span::raw(marker),
                    query_status_badge(query.status),
                    Span::raw(" "),
                    Span::styled(truncate_str(&query.text, text_width), Styles::text()),
                ]),
                Line::styled(
                    format!("      {}", truncate_str(&query.tuple_summary(), text_width)),
                    Styles::text_muted(),
                ),
            ];
            let item = ListItem::new(lines);
            if i == screen.list.selected {
                item.style(Styles::selected())
            } else {
                item
            }
        })
        .collect();

    let title = Line::from(vec![
        Span::styled(format!(" {} queries ", screen.stage()), Styles::header_title()),
        render_selection_counter(screen.selection().len(), screen.queries().len()),
        Span::styled(
            format!(" {} pending ", screen.pending_count()),
            Styles::warning(),
        ),
    ]);

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(list, chunks[0]);

    if let Some(edit) = screen.edit() {
        let title = format!(" Edit query {} ", edit.id);
        render_editor(frame, chunks[1], &title, &edit.editor);
    }
}
