//! Status-bar notices.
//!
//! A notice tells the user how the last action went ("Approved 2 tuples",
//! "Failed to save tuples: 500 ..."). Notices clear themselves after a
//! configurable delay.

use std::time::{Duration, Instant};

/// Severity of a notice, used for coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

/// Manages a temporary status notice with optional auto-clear.
///
/// # Example
///
/// ```ignore
/// use crate::tui::viewmodel::StatusMessage;
///
/// let mut status = StatusMessage::new();
///
/// status.success("Exported to data/exports/dataset.csv");
/// assert!(status.message().is_some());
///
/// status.clear();
/// assert!(status.message().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    level: NoticeLevel,
    set_at: Option<Instant>,
    /// Auto-clear duration (None = no auto-clear)
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status manager whose notices expire after `duration`.
    #[must_use]
    pub fn with_auto_clear(duration: Duration) -> Self {
        Self {
            auto_clear_after: Some(duration),
            ..Self::default()
        }
    }

    /// Set an informational notice.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.set_with_level(msg, NoticeLevel::Info);
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.set_with_level(msg, NoticeLevel::Success);
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.set_with_level(msg, NoticeLevel::Error);
    }

    fn set_with_level(&mut self, msg: impl Into<String>, level: NoticeLevel) {
        self.message = Some(msg.into());
        self.level = level;
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.level = NoticeLevel::Info;
        self.set_at = None;
    }

    /// Drop the notice if it has outlived the auto-clear duration.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Current notice, after applying auto-clear.
    pub fn message(&mut self) -> Option<&str> {
        self.expire();
        self.message.as_deref()
    }

    /// Current notice without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        self.level
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}
