//! Dashboard screen state: project status card, provider selector,
//! generation and export.

use crate::api::Backend;
use crate::model::{
    ExportFormat, ExportResponse, GenerateQueriesRequest, GenerateTuplesRequest, ProjectDetails,
    Stage,
};
use crate::shortcuts::keys::{LEFT, RIGHT, SHIFT};
use crate::shortcuts::{ListenerRegistry, Shortcut, ShortcutDispatcher};
use crate::tui::constants::{MAX_TUPLE_COUNT, MIN_TUPLE_COUNT, TUPLE_COUNT_STEP};
use crate::tui::traits::{ScreenContext, ScreenState};
use crate::tui::viewmodel::LoadingFlag;
use chrono::{DateTime, Local};

// ============================================================================
// Provider Selector
// ============================================================================

/// LLM provider picker fed by `GET /api/providers`.
#[derive(Debug, Clone, Default)]
pub struct ProviderSelector {
    options: Vec<String>,
    selected: usize,
    degraded: bool,
}

impl ProviderSelector {
    /// Load the provider list, preselecting the auto-detected one.
    ///
    /// A failed request leaves an empty, degraded selector.
    pub fn load(&mut self, backend: &dyn Backend) {
        match backend.providers() {
            Ok(info) => {
                self.selected = info
                    .auto_detected
                    .as_ref()
                    .and_then(|auto| info.available.iter().position(|p| p == auto))
                    .unwrap_or(0);
                self.options = info.available;
                self.degraded = false;
            }
            Err(e) => {
                tracing::warn!("failed to load providers: {}", e);
                self.options.clear();
                self.selected = 0;
                self.degraded = true;
            }
        }
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// Whether the provider list could not be loaded.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Refresh,
    PrevProvider,
    NextProvider,
    FewerTuples,
    MoreTuples,
    GenerateTuples,
    GenerateQueries,
    ExportCsv,
    ExportJson,
}

pub struct DashboardScreen {
    dispatcher: ShortcutDispatcher,
    details: Option<ProjectDetails>,
    refreshed_at: Option<DateTime<Local>>,
    providers: ProviderSelector,
    tuple_count: usize,
    queries_per_tuple: usize,
    loading: LoadingFlag,
    last_export: Option<ExportResponse>,
}

impl DashboardScreen {
    pub fn new(registry: &ListenerRegistry, tuple_count: usize, queries_per_tuple: usize) -> Self {
        Self {
            dispatcher: ShortcutDispatcher::new(registry, "dashboard"),
            details: None,
            refreshed_at: None,
            providers: ProviderSelector::default(),
            tuple_count: tuple_count.clamp(MIN_TUPLE_COUNT, MAX_TUPLE_COUNT),
            queries_per_tuple,
            loading: LoadingFlag::new(),
            last_export: None,
        }
    }

    #[must_use]
    pub const fn details(&self) -> Option<&ProjectDetails> {
        self.details.as_ref()
    }

    #[must_use]
    pub const fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    #[must_use]
    pub const fn providers(&self) -> &ProviderSelector {
        &self.providers
    }

    #[must_use]
    pub const fn tuple_count(&self) -> usize {
        self.tuple_count
    }

    #[must_use]
    pub const fn queries_per_tuple(&self) -> usize {
        self.queries_per_tuple
    }

    #[must_use]
    pub const fn last_export(&self) -> Option<&ExportResponse> {
        self.last_export.as_ref()
    }

    /// Reload the status card and the provider list.
    pub fn refresh(&mut self, ctx: &mut ScreenContext<'_>) {
        let _loading = self.loading.begin();
        match ctx.backend.project(ctx.project) {
            Ok(details) => {
                self.details = Some(details);
                self.refreshed_at = Some(Local::now());
            }
            Err(e) => {
                tracing::warn!("failed to load project {}: {}", ctx.project, e);
                ctx.status.error(e.notice_text());
            }
        }
        self.providers.load(ctx.backend);
    }

    fn provider(&self) -> Option<String> {
        self.providers.current().map(str::to_string)
    }

    fn generate_tuples(&mut self, ctx: &mut ScreenContext<'_>) {
        let request = GenerateTuplesRequest {
            count: self.tuple_count,
            provider: self.provider(),
        };
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.generate_tuples(ctx.project, &request)
        };
        match result {
            Ok(response) => {
                tracing::info!("{}: {}", ctx.project, response.message);
                ctx.status.success(response.message);
                self.refresh(ctx);
            }
            Err(e) => {
                tracing::warn!("tuple generation failed: {}", e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn generate_queries(&mut self, ctx: &mut ScreenContext<'_>) {
        let request = GenerateQueriesRequest {
            queries_per_tuple: self.queries_per_tuple,
            provider: self.provider(),
        };
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.generate_queries(ctx.project, &request)
        };
        match result {
            Ok(response) => {
                tracing::info!("{}: {}", ctx.project, response.message);
                ctx.status.success(response.message);
                self.refresh(ctx);
            }
            Err(e) => {
                tracing::warn!("query generation failed: {}", e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn export(&mut self, format: ExportFormat, ctx: &mut ScreenContext<'_>) {
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.export(ctx.project, format, Stage::Approved)
        };
        match result {
            Ok(response) => {
                ctx.status.success(format!("Exported to {}", response.path));
                self.last_export = Some(response);
            }
            Err(e) => {
                tracing::warn!("{} export failed: {}", format, e);
                ctx.status.error(e.notice_text());
            }
        }
    }
}

impl ScreenState for DashboardScreen {
    type Action = DashboardAction;

    fn title(&self) -> &'static str {
        "Dashboard"
    }

    fn shortcuts(&self) -> Vec<Shortcut<DashboardAction>> {
        let loading = self.loading.is_loading();
        let can_generate = !loading && self.providers.current().is_some();
        let has_providers = self.providers.options().len() > 1;

        vec![
            Shortcut::new(&["R"], DashboardAction::Refresh)
                .describe("Refresh")
                .primary()
                .when(!loading),
            Shortcut::new(&[LEFT], DashboardAction::PrevProvider)
                .describe("Previous provider")
                .when(has_providers),
            Shortcut::new(&[RIGHT], DashboardAction::NextProvider)
                .describe("Next provider")
                .when(has_providers),
            Shortcut::new(&["["], DashboardAction::FewerTuples)
                .describe("Fewer tuples")
                .when(self.tuple_count > MIN_TUPLE_COUNT),
            Shortcut::new(&["]"], DashboardAction::MoreTuples)
                .describe("More tuples")
                .when(self.tuple_count < MAX_TUPLE_COUNT),
            Shortcut::new(&["G"], DashboardAction::GenerateTuples)
                .describe("Generate tuples")
                .primary()
                .when(can_generate),
            Shortcut::new(&[SHIFT, "G"], DashboardAction::GenerateQueries)
                .describe("Generate queries")
                .primary()
                .when(can_generate),
            Shortcut::new(&["C"], DashboardAction::ExportCsv)
                .describe("Export CSV")
                .primary()
                .when(!loading),
            Shortcut::new(&[SHIFT, "J"], DashboardAction::ExportJson)
                .describe("Export JSON")
                .when(!loading),
        ]
    }

    fn dispatcher(&self) -> &ShortcutDispatcher {
        &self.dispatcher
    }

    fn dispatcher_mut(&mut self) -> &mut ShortcutDispatcher {
        &mut self.dispatcher
    }

    fn apply(&mut self, action: DashboardAction, ctx: &mut ScreenContext<'_>) {
        match action {
            DashboardAction::Refresh => self.refresh(ctx),
            DashboardAction::PrevProvider => self.providers.prev(),
            DashboardAction::NextProvider => self.providers.next(),
            DashboardAction::FewerTuples => {
                self.tuple_count = self
                    .tuple_count
                    .saturating_sub(TUPLE_COUNT_STEP)
                    .max(MIN_TUPLE_COUNT);
            }
            DashboardAction::MoreTuples => {
                self.tuple_count = (self.tuple_count + TUPLE_COUNT_STEP).min(MAX_TUPLE_COUNT);
            }
            DashboardAction::GenerateTuples => self.generate_tuples(ctx),
            DashboardAction::GenerateQueries => self.generate_queries(ctx),
            DashboardAction::ExportCsv => self.export(ExportFormat::Csv, ctx),
            DashboardAction::ExportJson => self.export(ExportFormat::Json, ctx),
        }
    }

    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        self.refresh(ctx);
    }

    fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }
}
