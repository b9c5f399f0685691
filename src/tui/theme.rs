//! Centralized theme and color scheme for the TUI.

use crate::model::QueryStatus;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the review UI.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Review status
    pub pending: Color,
    pub approved: Color,
    pub rejected: Color,
    pub skipped: Color,

    // UI elements
    pub primary: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub marked: Color,

    // Notices
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    /// Text on bright badge backgrounds
    pub badge_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    pub const fn dark() -> Self {
        Self {
            pending: Color::Yellow,
            approved: Color::Green,
            rejected: Color::Red,
            skipped: Color::DarkGray,

            primary: Color::Cyan,
            accent: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
            marked: Color::Magenta,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg: Color::Black,
        }
    }

    pub const fn light() -> Self {
        Self {
            pending: Color::Rgb(180, 140, 0),
            approved: Color::Rgb(0, 128, 0),
            rejected: Color::Rgb(200, 0, 0),
            skipped: Color::Rgb(100, 100, 100),

            primary: Color::Rgb(0, 100, 160),
            accent: Color::Rgb(180, 100, 0),
            border: Color::Rgb(160, 160, 160),
            border_focused: Color::Rgb(0, 100, 160),
            background_alt: Color::Rgb(230, 230, 235),
            text: Color::Black,
            text_muted: Color::Rgb(90, 90, 90),
            selection: Color::Rgb(200, 210, 230),
            marked: Color::Rgb(140, 0, 140),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg: Color::White,
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            pending: Color::LightYellow,
            approved: Color::LightGreen,
            rejected: Color::LightRed,
            skipped: Color::Gray,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(50, 50, 80),
            marked: Color::LightMagenta,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg: Color::Black,
        }
    }

    /// Color for a query's review status.
    #[must_use]
    pub const fn query_status(&self, status: QueryStatus) -> Color {
        match status {
            QueryStatus::Pending => self.pending,
            QueryStatus::Approved => self.approved,
            QueryStatus::Rejected => self.rejected,
            QueryStatus::Skipped => self.skipped,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// A named color scheme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Next theme in the rotation.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme (dark -> light -> high-contrast -> dark).
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Colors of the current theme.
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Cursor row
    pub fn selected() -> Style {
        Style::default().bg(colors().selection).fg(colors().text).bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

/// Badge for a query status, e.g. ` PENDING `.
pub fn query_status_badge(status: QueryStatus) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", status.as_str().to_uppercase()),
        Style::default()
            .fg(scheme.badge_fg)
            .bg(scheme.query_status(status))
            .bold(),
    )
}

/// Render footer hints as `[key]description` spans.
pub fn render_footer_hints(hints: &[(String, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }
    spans
}
