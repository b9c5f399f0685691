//! Application state and key routing.

use super::theme::{self, Theme};
use super::traits::{log_conflicts, route_key, EventResult, ScreenContext, ScreenState};
use super::view_states::{DashboardScreen, QueriesScreen, ReviewScreen};
use super::viewmodel::StatusMessage;
use crate::api::Backend;
use crate::config::{AppConfig, StartScreen, TuiPreferences};
use crate::model::Stage;
use crate::shortcuts::keys::{CONTROL, ESC};
use crate::shortcuts::{Focus, ListenerRegistry, Shortcut, ShortcutDispatcher};
use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::Duration;

/// The screens of the review UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Dashboard,
    Tuples,
    Queries,
}

impl ScreenKind {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Tuples, Self::Queries];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tuples => "Tuples",
            Self::Queries => "Queries",
        }
    }

    /// Key that switches to this screen.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "1",
            Self::Tuples => "2",
            Self::Queries => "3",
        }
    }
}

impl From<StartScreen> for ScreenKind {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Dashboard => Self::Dashboard,
            StartScreen::Tuples => Self::Tuples,
            StartScreen::Queries => Self::Queries,
        }
    }
}

/// Actions available on every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    Show(ScreenKind),
    ToggleTheme,
    ToggleHelp,
    CloseHelp,
}

/// Options for building an [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub start: ScreenKind,
    pub stage: Stage,
    pub tuple_count: usize,
    pub queries_per_tuple: usize,
    pub notice_duration: Duration,
}

impl AppOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            start: config.review.start_screen.into(),
            stage: config.review.default_stage,
            tuple_count: config.review.tuple_count,
            queries_per_tuple: config.review.queries_per_tuple,
            notice_duration: Duration::from_secs(config.tui.notice_secs),
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Main application state
pub struct App {
    pub(crate) project: String,
    backend: Box<dyn Backend>,
    registry: ListenerRegistry,
    global: ShortcutDispatcher,
    pub(crate) active: ScreenKind,
    pub(crate) dashboard: DashboardScreen,
    pub(crate) review: ReviewScreen,
    pub(crate) queries: QueriesScreen,
    pub(crate) status: StatusMessage,
    pub(crate) show_help: bool,
    pub(crate) should_quit: bool,
    pub(crate) tick: u64,
}

impl App {
    /// Build the app and load the start screen.
    pub fn new(project: impl Into<String>, backend: Box<dyn Backend>, options: &AppOptions) -> Self {
        let registry = ListenerRegistry::new();
        let mut app = Self {
            project: project.into(),
            backend,
            global: ShortcutDispatcher::active(&registry, "global"),
            active: options.start,
            dashboard: DashboardScreen::new(
                &registry,
                options.tuple_count,
                options.queries_per_tuple,
            ),
            review: ReviewScreen::new(&registry, options.stage),
            queries: QueriesScreen::new(&registry, options.stage, options.queries_per_tuple),
            registry,
            status: StatusMessage::with_auto_clear(options.notice_duration),
            show_help: false,
            should_quit: false,
            tick: 0,
        };
        app.activate(options.start);
        app
    }

    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[must_use]
    pub const fn status(&self) -> &StatusMessage {
        &self.status
    }

    #[must_use]
    pub const fn dashboard(&self) -> &DashboardScreen {
        &self.dashboard
    }

    #[must_use]
    pub const fn review(&self) -> &ReviewScreen {
        &self.review
    }

    #[must_use]
    pub const fn queries(&self) -> &QueriesScreen {
        &self.queries
    }

    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    #[must_use]
    pub const fn active(&self) -> ScreenKind {
        self.active
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Owners of the currently registered key listeners.
    #[must_use]
    pub fn listeners(&self) -> Vec<&'static str> {
        self.registry.owners()
    }

    /// Make `screen` the only screen listening for keys, then load it.
    pub fn activate(&mut self, screen: ScreenKind) {
        self.active = screen;
        self.dashboard
            .dispatcher_mut()
            .set_enabled(screen == ScreenKind::Dashboard);
        self.review
            .dispatcher_mut()
            .set_enabled(screen == ScreenKind::Tuples);
        self.queries
            .dispatcher_mut()
            .set_enabled(screen == ScreenKind::Queries);

        let mut ctx = ScreenContext {
            backend: self.backend.as_ref(),
            project: &self.project,
            status: &mut self.status,
        };
        match screen {
            ScreenKind::Dashboard => {
                self.dashboard.on_enter(&mut ctx);
                log_conflicts(&self.dashboard);
            }
            ScreenKind::Tuples => {
                self.review.on_enter(&mut ctx);
                log_conflicts(&self.review);
            }
            ScreenKind::Queries => {
                self.queries.on_enter(&mut ctx);
                log_conflicts(&self.queries);
            }
        }
        tracing::debug!("active screen: {}", screen.title());
    }

    /// Focus reported by the active screen.
    #[must_use]
    pub fn focus(&self) -> Focus {
        match self.active {
            ScreenKind::Dashboard => self.dashboard.focus(),
            ScreenKind::Tuples => self.review.focus(),
            ScreenKind::Queries => self.queries.focus(),
        }
    }

    /// Whether the active screen has a request in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        match self.active {
            ScreenKind::Dashboard => self.dashboard.is_loading(),
            ScreenKind::Tuples => self.review.is_loading(),
            ScreenKind::Queries => self.queries.is_loading(),
        }
    }

    /// Shortcuts available on every screen.
    #[must_use]
    pub fn global_shortcuts(&self) -> Vec<Shortcut<GlobalAction>> {
        let mut shortcuts = vec![
            Shortcut::new(&["Q"], GlobalAction::Quit)
                .describe("Quit")
                .primary(),
            Shortcut::new(&[CONTROL, "C"], GlobalAction::Quit),
            Shortcut::new(&["F1"], GlobalAction::ToggleHelp)
                .describe("Help")
                .primary(),
            Shortcut::new(&[ESC], GlobalAction::CloseHelp).when(self.show_help),
            Shortcut::new(&["T"], GlobalAction::ToggleTheme).describe("Cycle theme"),
        ];
        for screen in ScreenKind::ALL {
            let keys: &'static [&'static str] = match screen {
                ScreenKind::Dashboard => &["1"],
                ScreenKind::Tuples => &["2"],
                ScreenKind::Queries => &["3"],
            };
            shortcuts.push(
                Shortcut::new(keys, GlobalAction::Show(screen))
                    .describe(screen.title())
                    .when(screen != self.active),
            );
        }
        shortcuts
    }

    fn apply_global(&mut self, action: GlobalAction) {
        match action {
            GlobalAction::Quit => self.should_quit = true,
            GlobalAction::Show(screen) => {
                self.show_help = false;
                self.activate(screen);
            }
            GlobalAction::ToggleTheme => {
                let name = theme::toggle_theme();
                self.status.set(format!("Theme: {name}"));
                let prefs = TuiPreferences {
                    theme: name.to_string(),
                };
                if let Err(e) = prefs.save() {
                    tracing::warn!("failed to save theme preference: {}", e);
                }
            }
            GlobalAction::ToggleHelp => self.show_help = !self.show_help,
            GlobalAction::CloseHelp => self.show_help = false,
        }
    }

    /// Route a key event: global shortcuts, then the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let shortcuts = self.global_shortcuts();
        let mut chosen = None;
        let outcome = self
            .global
            .dispatch(&key, self.focus(), &shortcuts, |action| {
                chosen = Some(*action);
            });
        if let Some(action) = chosen {
            self.apply_global(action);
        }
        if outcome.consumed() {
            return EventResult::Consumed;
        }
        if self.show_help {
            self.show_help = false;
            return EventResult::Consumed;
        }

        let mut ctx = ScreenContext {
            backend: self.backend.as_ref(),
            project: &self.project,
            status: &mut self.status,
        };
        match self.active {
            ScreenKind::Dashboard => route_key(&mut self.dashboard, key, &mut ctx),
            ScreenKind::Tuples => route_key(&mut self.review, key, &mut ctx),
            ScreenKind::Queries => route_key(&mut self.queries, key, &mut ctx),
        }
    }

    /// Advance animations and expire notices.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
    }

    /// Apply a theme by name, falling back to the saved preference.
    pub fn apply_theme(name: &str) {
        let theme = if name.is_empty() {
            Theme::from_name(&TuiPreferences::load().theme)
        } else {
            Theme::from_name(name)
        };
        theme::set_theme(theme);
    }
}
