//! Small rendering helpers shared by the screens.

use super::theme::colors;
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
) {
    let border_color = colors().border_focused;
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// A rectangle centered in `area` taking the given percentages.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Truncate a string to `max_width` display columns, adding `...` when cut.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Counter badge for multi-select lists.
pub fn render_selection_counter(selected: usize, total: usize) -> Span<'static> {
    if selected > 0 {
        Span::styled(
            format!(" {selected}/{total} selected "),
            Style::default()
                .fg(colors().badge_fg)
                .bg(colors().accent)
                .bold(),
        )
    } else {
        Span::styled(
            format!(" 0/{total} "),
            Style::default().fg(colors().text_muted),
        )
    }
}

// ============================================================================
// Minimum Size Check
// ============================================================================

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Tell the user to enlarge the terminal.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required: (u16, u16)) {
    let scheme = colors();
    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(scheme.warning).bold()),
        Line::styled(
            format!("{}x{} of {}x{}", area.width, area.height, required.0, required.1),
            Style::default().fg(scheme.text_muted),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.warning)),
        ),
        area,
    );
}
