//! Query review screen state.

use crate::model::{GenerateQueriesRequest, Query, QueryStatus, QueryUpdate, Stage};
use crate::shortcuts::keys::{CONTROL, DOWN, SHIFT, SPACE, TAB, UP};
use crate::shortcuts::{Focus, ListenerRegistry, Shortcut, ShortcutDispatcher};
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, ScreenContext, ScreenState};
use crate::tui::viewmodel::{EditorOutcome, FieldEditor, LoadingFlag, Selection};
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    ToggleSelection,
    SelectAll,
    SelectNone,
    ApproveSelected,
    ApproveAllPending,
    RejectCurrent,
    StartEdit,
    SaveEdit,
    Generate,
    Reload,
    SwitchStage,
}

/// An open edit of one query's text.
#[derive(Debug, Clone)]
pub struct QueryEdit {
    pub id: usize,
    pub status: QueryStatus,
    pub editor: FieldEditor,
}

pub struct QueriesScreen {
    dispatcher: ShortcutDispatcher,
    stage: Stage,
    queries: Vec<Query>,
    pub(crate) list: ListState,
    selection: Selection,
    loading: LoadingFlag,
    edit: Option<QueryEdit>,
    queries_per_tuple: usize,
}

impl QueriesScreen {
    pub fn new(registry: &ListenerRegistry, stage: Stage, queries_per_tuple: usize) -> Self {
        Self {
            dispatcher: ShortcutDispatcher::new(registry, "query-review"),
            stage,
            queries: Vec::new(),
            list: ListState::new(),
            selection: Selection::new(),
            loading: LoadingFlag::new(),
            edit: None,
            queries_per_tuple,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn edit(&self) -> Option<&QueryEdit> {
        self.edit.as_ref()
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queries.iter().filter(|q| q.is_pending()).count()
    }

    fn current(&self) -> Option<&Query> {
        self.queries.get(self.list.selected)
    }

    pub fn reload(&mut self, ctx: &mut ScreenContext<'_>) {
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.queries(ctx.project, self.stage)
        };
        match result {
            Ok(queries) => {
                tracing::debug!("loaded {} {} queries", queries.len(), self.stage);
                self.queries = queries;
                self.list.resize(self.queries.len());
                self.selection.clamp(self.queries.len());
            }
            Err(e) => {
                tracing::warn!("failed to load {} queries: {}", self.stage, e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn approve(&mut self, ids: Vec<usize>, ctx: &mut ScreenContext<'_>) {
        if ids.is_empty() {
            return;
        }
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.approve_queries(ctx.project, &ids)
        };
        match result {
            Ok(message) => {
                tracing::info!("{}: {}", ctx.project, message);
                ctx.status.success(format!("Approved {} queries", ids.len()));
                self.reload(ctx);
                self.selection.select_none();
            }
            Err(e) => {
                tracing::warn!("approving {} queries failed: {}", ids.len(), e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    /// Send `update` for the query being edited, or the one under the cursor.
    fn update_current(
        &mut self,
        update: QueryUpdate,
        done: &str,
        ctx: &mut ScreenContext<'_>,
    ) -> bool {
        let target = self.edit.as_ref().map(|e| e.id);
        let Some(id) = target.or_else(|| self.current().map(|q| q.id)) else {
            return false;
        };
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.update_query(ctx.project, id, &update)
        };
        match result {
            Ok(_) => {
                ctx.status.success(format!("{done} query {id}"));
                self.reload(ctx);
                true
            }
            Err(e) => {
                tracing::warn!("updating query {} failed: {}", id, e);
                ctx.status.error(e.notice_text());
                false
            }
        }
    }

    /// Query ids index the generated list on the backend, so only that
    /// stage can be edited in place.
    fn start_edit(&mut self) {
        if self.stage != Stage::Generated {
            return;
        }
        let edit = self.current().map(|query| QueryEdit {
            id: query.id,
            status: query.status,
            editor: FieldEditor::new([("text", query.text.as_str())]),
        });
        if edit.is_some() {
            self.edit = edit;
        }
    }

    fn save_edit(&mut self, ctx: &mut ScreenContext<'_>) {
        let Some(edit) = &self.edit else {
            return;
        };
        let text = edit
            .editor
            .values()
            .next()
            .map(|(_, v)| v.to_string())
            .unwrap_or_default();
        let update = QueryUpdate {
            status: edit.status,
            text: Some(text),
        };
        if self.update_current(update, "Saved", ctx) {
            self.edit = None;
        }
    }

    fn generate(&mut self, ctx: &mut ScreenContext<'_>) {
        let request = GenerateQueriesRequest {
            queries_per_tuple: self.queries_per_tuple,
            provider: None,
        };
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.generate_queries(ctx.project, &request)
        };
        match result {
            Ok(response) => {
                tracing::info!("{}: {}", ctx.project, response.message);
                ctx.status.success(response.message);
                self.reload(ctx);
            }
            Err(e) => {
                tracing::warn!("query generation failed: {}", e);
                ctx.status.error(e.notice_text());
            }
        }
    }
}

impl ScreenState for QueriesScreen {
    type Action = QueryAction;

    fn title(&self) -> &'static str {
        "Queries"
    }

    fn shortcuts(&self) -> Vec<Shortcut<QueryAction>> {
        let editing = self.is_editing();
        let loading = self.loading.is_loading();
        let has_rows = !self.queries.is_empty();
        let generated = self.stage == Stage::Generated;
        let reviewable = !editing && !loading && generated;

        vec![
            Shortcut::new(&[UP], QueryAction::CursorUp)
                .describe("Previous query")
                .when(!editing),
            Shortcut::new(&["K"], QueryAction::CursorUp).when(!editing),
            Shortcut::new(&[DOWN], QueryAction::CursorDown)
                .describe("Next query")
                .when(!editing),
            Shortcut::new(&["J"], QueryAction::CursorDown).when(!editing),
            Shortcut::new(&["PageUp"], QueryAction::PageUp).when(!editing),
            Shortcut::new(&["PageDown"], QueryAction::PageDown).when(!editing),
            Shortcut::new(&[SPACE], QueryAction::ToggleSelection)
                .describe("Toggle selection")
                .primary()
                .when(!editing && has_rows),
            Shortcut::new(&["A"], QueryAction::SelectAll)
                .describe("Select all")
                .when(!editing && has_rows),
            Shortcut::new(&["N"], QueryAction::SelectNone)
                .describe("Select none")
                .when(!editing && !self.selection.is_empty()),
            Shortcut::new(&["Y"], QueryAction::ApproveSelected)
                .describe("Approve selected")
                .primary()
                .when(reviewable && !self.selection.is_empty()),
            Shortcut::new(&[SHIFT, "A"], QueryAction::ApproveAllPending)
                .describe("Approve all pending")
                .primary()
                .when(!editing && !loading && self.pending_count() > 0),
            Shortcut::new(&["X"], QueryAction::RejectCurrent)
                .describe("Reject query")
                .primary()
                .when(reviewable && has_rows),
            Shortcut::new(&["E"], QueryAction::StartEdit)
                .describe("Edit query")
                .primary()
                .when(!editing && has_rows && generated),
            Shortcut::new(&[CONTROL, "S"], QueryAction::SaveEdit)
                .describe("Save edit")
                .primary()
                .when(editing && !loading && generated),
            Shortcut::new(&["G"], QueryAction::Generate)
                .describe("Generate queries")
                .when(!editing && !loading),
            Shortcut::new(&["R"], QueryAction::Reload)
                .describe("Reload")
                .when(!editing && !loading),
            Shortcut::new(&[TAB], QueryAction::SwitchStage)
                .describe("Switch stage")
                .when(!editing && !loading),
        ]
    }

    fn focus(&self) -> Focus {
        if self.is_editing() {
            Focus::TextArea
        } else {
            Focus::None
        }
    }

    fn dispatcher(&self) -> &ShortcutDispatcher {
        &self.dispatcher
    }

    fn dispatcher_mut(&mut self) -> &mut ShortcutDispatcher {
        &mut self.dispatcher
    }

    fn apply(&mut self, action: QueryAction, ctx: &mut ScreenContext<'_>) {
        match action {
            QueryAction::CursorUp => self.list.select_prev(),
            QueryAction::CursorDown => self.list.select_next(),
            QueryAction::PageUp => self.list.page_up(),
            QueryAction::PageDown => self.list.page_down(),
            QueryAction::ToggleSelection => {
                if self.list.selected < self.queries.len() {
                    self.selection.toggle(self.list.selected);
                }
            }
            QueryAction::SelectAll => self.selection.select_all(self.queries.len()),
            QueryAction::SelectNone => self.selection.select_none(),
            QueryAction::ApproveSelected => {
                let ids = self
                    .selection
                    .indices()
                    .filter_map(|i| self.queries.get(i).map(|q| q.id))
                    .collect();
                self.approve(ids, ctx);
            }
            QueryAction::ApproveAllPending => {
                let ids = self
                    .queries
                    .iter()
                    .filter(|q| q.is_pending())
                    .map(|q| q.id)
                    .collect();
                self.approve(ids, ctx);
            }
            QueryAction::RejectCurrent => {
                let update = QueryUpdate {
                    status: QueryStatus::Rejected,
                    text: None,
                };
                self.update_current(update, "Rejected", ctx);
            }
            QueryAction::StartEdit => self.start_edit(),
            QueryAction::SaveEdit => self.save_edit(ctx),
            QueryAction::Generate => self.generate(ctx),
            QueryAction::Reload => self.reload(ctx),
            QueryAction::SwitchStage => {
                self.stage = self.stage.toggled();
                self.selection.select_none();
                self.list.reset();
                self.reload(ctx);
            }
        }
    }

    fn handle_unbound_key(&mut self, key: KeyEvent, _ctx: &mut ScreenContext<'_>) -> EventResult {
        let Some(edit) = self.edit.as_mut() else {
            return EventResult::Ignored;
        };
        match edit.editor.handle_key(key) {
            EditorOutcome::Handled => EventResult::Consumed,
            EditorOutcome::Cancelled => {
                self.edit = None;
                EventResult::Consumed
            }
            EditorOutcome::Ignored => EventResult::Ignored,
        }
    }

    fn on_enter(&mut self, ctx: &mut ScreenContext<'_>) {
        if !self.is_editing() {
            self.reload(ctx);
        }
    }

    fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }
}
