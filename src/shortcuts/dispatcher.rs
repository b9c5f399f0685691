//! Listener registration and shortcut dispatch.
//!
//! Every screen owns a [`ShortcutDispatcher`]. While enabled, the
//! dispatcher holds a [`ListenerGuard`] in the shared [`ListenerRegistry`];
//! disabling it or dropping it (screen teardown) releases the registration.
//! The registry is what the app consults to know who is listening.

use super::descriptor::Shortcut;
use super::focus::Focus;
use super::keys::{command_modifier_held, pressed_keys};
use crossterm::event::{KeyEvent, KeyEventKind};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    active: Vec<(u64, &'static str)>,
}

/// Shared set of active key listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the guard drops.
    #[must_use]
    pub fn subscribe(&self, owner: &'static str) -> ListenerGuard {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.active.push((id, owner));
            id
        };
        tracing::trace!("key listener {} attached for {}", id, owner);
        ListenerGuard {
            id,
            owner,
            listeners: Rc::clone(&self.inner),
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owners of registered listeners, in registration order.
    #[must_use]
    pub fn owners(&self) -> Vec<&'static str> {
        self.inner.borrow().active.iter().map(|(_, o)| *o).collect()
    }
}

/// A live listener registration.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    owner: &'static str,
    listeners: Rc<RefCell<Listeners>>,
}

impl ListenerGuard {
    #[must_use]
    pub fn owner(&self) -> &'static str {
        self.owner
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners
            .borrow_mut()
            .active
            .retain(|(id, _)| *id != self.id);
        tracing::trace!("key listener {} detached for {}", self.id, self.owner);
    }
}

/// Outcome of offering a key event to a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Dispatcher is not listening
    Inactive,
    /// Plain keystroke while a text input has focus
    Suppressed,
    /// No enabled descriptor matched (key releases land here too)
    Unmatched,
    /// One action ran
    Invoked {
        /// The focused widget must not handle the event
        consumed: bool,
    },
}

impl Dispatch {
    /// Whether the focused widget should skip its own handling.
    #[must_use]
    pub const fn consumed(&self) -> bool {
        matches!(self, Self::Invoked { consumed: true })
    }

    #[must_use]
    pub const fn invoked(&self) -> bool {
        matches!(self, Self::Invoked { .. })
    }
}

/// Routes key events to the first enabled matching shortcut.
#[derive(Debug)]
pub struct ShortcutDispatcher {
    owner: &'static str,
    registry: ListenerRegistry,
    guard: Option<ListenerGuard>,
}

impl ShortcutDispatcher {
    /// Create a dispatcher. It starts disabled.
    #[must_use]
    pub fn new(registry: &ListenerRegistry, owner: &'static str) -> Self {
        Self {
            owner,
            registry: registry.clone(),
            guard: None,
        }
    }

    /// Create a dispatcher that is listening right away.
    #[must_use]
    pub fn active(registry: &ListenerRegistry, owner: &'static str) -> Self {
        let mut dispatcher = Self::new(registry, owner);
        dispatcher.set_enabled(true);
        dispatcher
    }

    /// Attach or detach the listener. Idempotent.
    pub fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.guard.is_some()) {
            (true, false) => self.guard = Some(self.registry.subscribe(self.owner)),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Offer a key event.
    ///
    /// Walks `shortcuts` in order and invokes `invoke` with the action of
    /// the first enabled descriptor whose combination matches. At most one
    /// action runs per event.
    pub fn dispatch<A>(
        &self,
        event: &KeyEvent,
        focus: Focus,
        shortcuts: &[Shortcut<A>],
        invoke: impl FnOnce(&A),
    ) -> Dispatch {
        if !self.is_listening() {
            return Dispatch::Inactive;
        }
        if event.kind == KeyEventKind::Release {
            return Dispatch::Unmatched;
        }
        if focus.accepts_text() && !command_modifier_held(event) {
            return Dispatch::Suppressed;
        }

        let pressed = pressed_keys(event);
        let Some(shortcut) = shortcuts
            .iter()
            .filter(|s| s.enabled)
            .find(|s| s.matches(&pressed))
        else {
            return Dispatch::Unmatched;
        };

        tracing::debug!(
            "{}: shortcut {} -> {}",
            self.owner,
            shortcut.label(),
            shortcut.description
        );
        invoke(&shortcut.action);
        Dispatch::Invoked {
            consumed: shortcut.suppress_default,
        }
    }
}
