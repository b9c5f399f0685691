//! Keyboard-shortcut registry and dispatch.
//!
//! Screens declare their shortcuts as plain data: a list of [`Shortcut`]
//! descriptors rebuilt from state on every render. A [`ShortcutDispatcher`]
//! turns key events into at most one action per event:
//!
//! 1. nothing happens unless the dispatcher is listening;
//! 2. plain keystrokes are left alone while a free-text input has focus;
//! 3. the first enabled descriptor whose combination [`matches`] wins.
//!
//! ```ignore
//! use qgen_review::shortcuts::{keys::CONTROL, Focus, Shortcut, ShortcutDispatcher};
//!
//! let set = vec![
//!     Shortcut::new(&["E"], Action::Edit).when(!editing),
//!     Shortcut::new(&[CONTROL, "S"], Action::Save).when(editing),
//! ];
//! let outcome = dispatcher.dispatch(&key, focus, &set, |action| screen.apply(*action));
//! if !outcome.consumed() {
//!     screen.handle_unbound_key(key);
//! }
//! ```

mod descriptor;
mod dispatcher;
mod focus;
pub mod keys;
mod matcher;

pub use descriptor::{find_conflicts, Shortcut, ShortcutIssue};
pub use dispatcher::{Dispatch, ListenerGuard, ListenerRegistry, ShortcutDispatcher};
pub use focus::{Focus, InputKind};
pub use keys::pressed_keys;
pub use matcher::{matches, matches_pressed};
