//! Project status card, provider selector, generation and export panel.

use crate::tui::theme::{colors, Styles};
use crate::tui::view_states::DashboardScreen;
use crate::tui::widgets::render_empty_state;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_dashboard(frame: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_status_card(frame, chunks[0], screen);
    render_generation_panel(frame, chunks[1], screen);
}

fn stat_line(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<20}"), Styles::label()),
        Span::styled(value.to_string(), Styles::value()),
    ])
}

fn render_status_card(frame: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let Some(details) = screen.details() else {
        render_empty_state(frame, area, "Project not loaded", Some("Press [R] to retry"));
        return;
    };
    let status = details.data_status;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("  Domain: ", Styles::label()),
            Span::styled(details.domain.clone(), Styles::value()),
        ]),
        Line::from(""),
        stat_line("Generated tuples", status.generated_tuples),
        stat_line("Approved tuples", status.approved_tuples),
        stat_line("Generated queries", status.generated_queries),
        stat_line("Approved queries", status.approved_queries),
        Line::from(""),
        Line::styled("  Dimensions", Styles::header_title()),
    ];
    for dim in &details.dimensions {
        lines.push(Line::from(vec![
            Span::styled(format!("  • {}", dim.name), Styles::text()),
            Span::styled(format!(" ({} values)", dim.values.len()), Styles::text_muted()),
        ]));
    }
    if let Some(at) = screen.refreshed_at() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  Refreshed {}", at.format("%H:%M:%S")),
            Styles::text_muted(),
        ));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", details.name))
            .title_style(Styles::header_title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(card, area);
}

fn render_generation_panel(frame: &mut Frame, area: Rect, screen: &DashboardScreen) {
    let scheme = colors();
    let providers = screen.providers();

    let provider_line = if providers.is_degraded() {
        Line::styled("  unavailable (provider list failed to load)", Styles::error())
    } else if let Some(current) = providers.current() {
        let mut spans = vec![Span::raw("  ")];
        for option in providers.options() {
            let style = if option == current {
                Style::default().fg(scheme.badge_fg).bg(scheme.accent).bold()
            } else {
                Styles::text_muted()
            };
            spans.push(Span::styled(format!(" {option} "), style));
        }
        Line::from(spans)
    } else {
        Line::styled("  none configured", Styles::warning())
    };

    let mut lines = vec![
        Line::styled("  Provider  [←/→]", Styles::label()),
        provider_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tuples per run  [ [ / ] ]  ", Styles::label()),
            Span::styled(screen.tuple_count().to_string(), Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("  Queries per tuple          ", Styles::label()),
            Span::styled(screen.queries_per_tuple().to_string(), Styles::value()),
        ]),
    ];

    if let Some(export) = screen.last_export() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Last export: ", Styles::label()),
            Span::styled(export.path.clone(), Styles::success()),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Generate & export ")
            .title_style(Styles::header_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}
