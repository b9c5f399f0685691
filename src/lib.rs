//! **A terminal client for reviewing qgen datasets.**
//!
//! `qgen-review` talks to the qgen web backend, which generates evaluation
//! datasets in two steps: dimension *tuples* first, then natural-language
//! *queries* for each approved tuple. A reviewer approves, rejects, and
//! edits both before export.
//!
//! ## Core Concepts & Modules
//!
//! - **[`shortcuts`]**: Keyboard-shortcut matching and dispatch. Key events
//!   are turned into symbol sets (`⌘`, `Ctrl`, `⌥`, `⇧`, then the main key)
//!   and compared against declared combinations. A [`ShortcutDispatcher`]
//!   holds a scoped listener in a [`ListenerRegistry`] and invokes the first
//!   enabled descriptor that matches.
//! - **[`model`]**: Wire types for projects, tuples, and queries.
//! - **[`api`]**: The [`Backend`] trait and its blocking HTTP implementation.
//! - **[`tui`]**: The interactive dashboard, tuple review, and query review
//!   screens.
//! - **[`config`]**: YAML configuration discovery, validation, and schema.
//!
//! ## Matching a key combination
//!
//! ```
//! use qgen_review::shortcuts::matches_pressed;
//!
//! let pressed = ["⌘".to_string(), "A".to_string()];
//! assert!(matches_pressed(&pressed, &["⌘", "a"]));
//! assert!(!matches_pressed(&pressed, &["⌘", "⇧", "a"]));
//! ```
//!
//! ## Dispatching
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use qgen_review::shortcuts::{Dispatch, Focus, ListenerRegistry, Shortcut, ShortcutDispatcher};
//!
//! let registry = ListenerRegistry::new();
//! let dispatcher = ShortcutDispatcher::active(&registry, "demo");
//! let shortcuts = vec![Shortcut::new(&["A"], 1).describe("Approve")];
//!
//! let mut hits = Vec::new();
//! let outcome = dispatcher.dispatch(
//!     &KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
//!     Focus::None,
//!     &shortcuts,
//!     |action| hits.push(*action),
//! );
//! assert_eq!(outcome, Dispatch::Invoked { consumed: true });
//! assert_eq!(hits, vec![1]);
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::module_name_repetitions
)]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod shortcuts;
pub mod tui;

pub use api::{Backend, HttpBackend, HttpBackendConfig};
pub use config::{AppConfig, ConfigError, TuiPreferences, Validatable};
pub use error::{ApiErrorKind, ErrorContext, QgenError, Result};
pub use model::{Query, QueryStatus, Stage, Tuple};
pub use shortcuts::{
    find_conflicts, matches, matches_pressed, pressed_keys, Dispatch, Focus, ListenerRegistry,
    Shortcut, ShortcutDispatcher,
};
pub use tui::{App, AppOptions};
