//! Screen state machines.
//!
//! Each screen (dashboard, tuple review, query review) implements
//! [`ScreenState`]: it owns its data and a [`ShortcutDispatcher`], publishes
//! a declaration set computed from its current state, and applies the
//! actions that set binds. The [`App`](super::App) only decides which screen
//! is listening and routes key events through [`route_key`].
//!
//! # Event Flow
//!
//! 1. App offers the key to its global dispatcher
//! 2. If unconsumed, the active screen's dispatcher gets it
//! 3. A matched shortcut runs [`ScreenState::apply`]
//! 4. Anything left unconsumed goes to [`ScreenState::handle_unbound_key`],
//!    the focused widget's own handling (typing into an editor)

use crate::api::Backend;
use crate::shortcuts::{find_conflicts, Focus, Shortcut, ShortcutDispatcher, ShortcutIssue};
use crossterm::event::KeyEvent;
use std::fmt::Debug;

use super::viewmodel::StatusMessage;

/// Result of routing a key event to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The screen handled the event
    Consumed,
    /// Nobody wanted the event
    Ignored,
}

/// What a screen can reach while handling an action.
pub struct ScreenContext<'a> {
    pub backend: &'a dyn Backend,
    /// Project under review
    pub project: &'a str,
    pub status: &'a mut StatusMessage,
}

/// A screen with its own shortcut declaration set.
pub trait ScreenState {
    /// Actions bound by this screen's shortcuts.
    type Action: Copy + Debug;

    /// Title for the tab bar.
    fn title(&self) -> &'static str;

    /// Declaration set for the current state.
    ///
    /// Recomputed on every call so `enabled` flags track state changes.
    fn shortcuts(&self) -> Vec<Shortcut<Self::Action>>;

    /// What has input focus inside the screen.
    fn focus(&self) -> Focus {
        Focus::None
    }

    fn dispatcher(&self) -> &ShortcutDispatcher;

    fn dispatcher_mut(&mut self) -> &mut ShortcutDispatcher;

    /// Run a bound action.
    fn apply(&mut self, action: Self::Action, ctx: &mut ScreenContext<'_>);

    /// Default handling for keys no shortcut consumed.
    fn handle_unbound_key(&mut self, _key: KeyEvent, _ctx: &mut ScreenContext<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Called when the screen becomes visible.
    fn on_enter(&mut self, _ctx: &mut ScreenContext<'_>) {}

    /// Whether a backend request is in flight.
    fn is_loading(&self) -> bool;
}

/// Offer a key to a screen: its shortcuts first, then its own handling.
pub fn route_key<S: ScreenState>(
    screen: &mut S,
    key: KeyEvent,
    ctx: &mut ScreenContext<'_>,
) -> EventResult {
    let shortcuts = screen.shortcuts();
    let mut chosen = None;
    let outcome = screen
        .dispatcher()
        .dispatch(&key, screen.focus(), &shortcuts, |action| {
            chosen = Some(*action);
        });

    if let Some(action) = chosen {
        screen.apply(action, ctx);
    }
    if outcome.consumed() {
        return EventResult::Consumed;
    }
    if !screen.dispatcher().is_listening() {
        return EventResult::Ignored;
    }
    screen.handle_unbound_key(key, ctx)
}

/// Log overlapping or malformed shortcuts in a screen's current set.
pub fn log_conflicts<S: ScreenState>(screen: &S) {
    let shortcuts = screen.shortcuts();
    for issue in find_conflicts(&shortcuts) {
        match issue {
            ShortcutIssue::Malformed { index, label } => {
                tracing::debug!("{}: malformed shortcut #{} ({})", screen.title(), index, label);
            }
            ShortcutIssue::Shadowed {
                first,
                shadowed,
                label,
            } => {
                tracing::debug!(
                    "{}: shortcut #{} ({}) is shadowed by #{}",
                    screen.title(),
                    shadowed,
                    label,
                    first
                );
            }
        }
    }
}

/// `(label, description)` pairs of enabled primary shortcuts, for the footer.
pub fn footer_hints<A>(shortcuts: &[Shortcut<A>]) -> Vec<(String, &'static str)> {
    shortcuts
        .iter()
        .filter(|s| s.enabled && s.primary)
        .map(|s| (s.label(), s.description))
        .collect()
}

/// `(label, description, enabled)` for every described shortcut, for help.
pub fn help_entries<A>(shortcuts: &[Shortcut<A>]) -> Vec<(String, &'static str, bool)> {
    shortcuts
        .iter()
        .filter(|s| !s.description.is_empty())
        .map(|s| (s.label(), s.description, s.enabled))
        .collect()
}
