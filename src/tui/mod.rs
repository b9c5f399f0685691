//! Interactive review UI.
//!
//! Three screens share one terminal: a dashboard (status card, provider
//! selector, generation and export), a tuple review grid, and a query
//! review list. Each screen owns a shortcut declaration set and a
//! dispatcher; only the visible screen's dispatcher is listening, next to
//! an always-active global one.

mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
pub mod traits;
mod ui;
pub mod view_states;
pub mod viewmodel;
mod views;
pub mod widgets;

pub use app::{App, AppOptions, GlobalAction, ScreenKind};
pub use events::{Event, EventHandler};
pub use theme::{colors, set_theme, toggle_theme, Theme};
pub use traits::{EventResult, ScreenContext, ScreenState};
pub use ui::{render, run_tui};
