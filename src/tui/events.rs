//! Terminal event polling.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Poll interval elapsed without input
    Tick,
    Resize(u16, u16),
}

/// Polls crossterm for input, producing a tick when idle.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event.
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}
