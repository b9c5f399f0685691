//! Terminal setup, main loop, and frame layout.

use super::app::{App, ScreenKind};
use super::events::{Event, EventHandler};
use super::theme::{colors, render_footer_hints, Styles};
use super::traits::{footer_hints, help_entries, ScreenState};
use super::viewmodel::NoticeLevel;
use super::views;
use super::widgets::{check_terminal_size, render_popup, render_size_warning};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout, Stdout};

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(out))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!("failed to leave alternate screen: {}", e);
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Run the review UI until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let events = EventHandler::new(tick_rate_ms);

    while !app.should_quit() {
        guard.terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
            }
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }
    }

    Ok(())
}

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if let Err(required) = check_terminal_size(area.width, area.height) {
        render_size_warning(frame, area, required);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.active {
        ScreenKind::Dashboard => views::render_dashboard(frame, chunks[1], &app.dashboard),
        ScreenKind::Tuples => views::render_review(frame, chunks[1], &mut app.review),
        ScreenKind::Queries => views::render_queries(frame, chunks[1], &mut app.queries),
    }

    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.show_help {
        render_help_overlay(frame, area, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let mut spans = vec![
        Span::styled(" qgen-review ", Styles::header_title()),
        Span::styled(format!("{} ", app.project()), Styles::value()),
        Span::styled("│ ", Styles::border()),
    ];
    for (i, screen) in ScreenKind::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::border()));
        }
        let selected = *screen == app.active;
        spans.push(Span::styled(
            format!("[{}]", screen.key()),
            if selected {
                Style::default().fg(scheme.accent).bold()
            } else {
                Styles::text_muted()
            },
        ));
        spans.push(Span::styled(
            format!(" {} ", screen.title()),
            if selected {
                Style::default().fg(scheme.badge_fg).bg(scheme.accent).bold()
            } else {
                Styles::text_muted()
            },
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border()),
    );
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let loading = app.is_loading();
    let level = app.status.level();
    let line = match app.status.message() {
        Some(message) => {
            let style = match level {
                NoticeLevel::Info => Styles::text(),
                NoticeLevel::Success => Styles::success(),
                NoticeLevel::Error => Styles::error(),
            };
            Line::from(Span::styled(format!(" {message}"), style))
        }
        None if loading => Line::from(Span::styled(" Working...", Styles::warning())),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = match app.active {
        ScreenKind::Dashboard => footer_hints(&app.dashboard.shortcuts()),
        ScreenKind::Tuples => footer_hints(&app.review.shortcuts()),
        ScreenKind::Queries => footer_hints(&app.queries.shortcuts()),
    };
    hints.extend(footer_hints(&app.global_shortcuts()));

    let mut spans = vec![Span::raw(" ")];
    spans.extend(render_footer_hints(&hints));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn help_section(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    entries: Vec<(String, &'static str, bool)>,
) {
    lines.push(Line::styled(title.to_string(), Styles::header_title()));
    for (label, description, enabled) in entries {
        let key_style = if enabled {
            Styles::shortcut_key()
        } else {
            Styles::text_muted()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<10}"), key_style),
            Span::styled(description, Styles::text()),
        ]));
    }
    lines.push(Line::from(""));
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    let screen_entries = match app.active {
        ScreenKind::Dashboard => help_entries(&app.dashboard.shortcuts()),
        ScreenKind::Tuples => help_entries(&app.review.shortcuts()),
        ScreenKind::Queries => help_entries(&app.queries.shortcuts()),
    };
    help_section(&mut lines, app.active.title(), screen_entries);
    help_section(&mut lines, "Global", help_entries(&app.global_shortcuts()));
    lines.push(Line::styled(
        "Dimmed keys are unavailable right now. Press any key to close.",
        Styles::text_muted(),
    ));

    render_popup(frame, area, "Keyboard shortcuts", lines, 60, 80);
}
