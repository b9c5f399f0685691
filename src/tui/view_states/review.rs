//! Tuple review screen state.
//!
//! Shows the tuples of one stage as a grid with a cursor and a multi-select
//! set. Bulk approve posts the selected tuples to the approved stage; bulk
//! reject rewrites the generated stage without them.

use crate::model::{dimension_columns, Stage, Tuple};
use crate::shortcuts::keys::{CONTROL, DOWN, SHIFT, SPACE, TAB, UP};
use crate::shortcuts::{Focus, InputKind, ListenerRegistry, Shortcut, ShortcutDispatcher};
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::traits::{EventResult, ScreenContext, ScreenState};
use crate::tui::viewmodel::{EditorOutcome, FieldEditor, LoadingFlag, Selection};
use crossterm::event::KeyEvent;

/// Actions bound on the tuple review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    ToggleSelection,
    SelectAll,
    SelectNone,
    ApproveSelected,
    ApproveAllPending,
    RejectSelected,
    StartEdit,
    SaveEdit,
    Reload,
    SwitchStage,
}

/// An open edit of one tuple.
#[derive(Debug, Clone)]
pub struct TupleEdit {
    /// Row being edited
    pub index: usize,
    pub editor: FieldEditor,
}

pub struct ReviewScreen {
    dispatcher: ShortcutDispatcher,
    stage: Stage,
    tuples: Vec<Tuple>,
    columns: Vec<String>,
    pub(crate) list: ListState,
    selection: Selection,
    loading: LoadingFlag,
    edit: Option<TupleEdit>,
}

impl ReviewScreen {
    pub fn new(registry: &ListenerRegistry, stage: Stage) -> Self {
        Self {
            dispatcher: ShortcutDispatcher::new(registry, "tuple-review"),
            stage,
            tuples: Vec::new(),
            columns: Vec::new(),
            list: ListState::new(),
            selection: Selection::new(),
            loading: LoadingFlag::new(),
            edit: None,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Dimension names shown as grid columns.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn edit(&self) -> Option<&TupleEdit> {
        self.edit.as_ref()
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Tuples still awaiting review. Only the generated stage has any.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        match self.stage {
            Stage::Generated => self.tuples.len(),
            Stage::Approved => 0,
        }
    }

    fn set_tuples(&mut self, tuples: Vec<Tuple>) {
        self.columns = dimension_columns(&tuples);
        self.tuples = tuples;
        self.list.resize(self.tuples.len());
        self.selection.clamp(self.tuples.len());
    }

    /// Fetch the current stage from the backend.
    pub fn reload(&mut self, ctx: &mut ScreenContext<'_>) {
        let result = {
            let _loading = self.loading.begin();
            ctx.backend.tuples(ctx.project, self.stage)
        };
        match result {
            Ok(tuples) => {
                tracing::debug!("loaded {} {} tuples", tuples.len(), self.stage);
                self.set_tuples(tuples);
            }
            Err(e) => {
                tracing::warn!("failed to load {} tuples: {}", self.stage, e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn approve_selected(&mut self, ctx: &mut ScreenContext<'_>) {
        let chosen: Vec<Tuple> = self
            .selection
            .indices()
            .filter_map(|i| self.tuples.get(i).cloned())
            .collect();
        if chosen.is_empty() {
            return;
        }

        let result = {
            let _loading = self.loading.begin();
            ctx.backend
                .save_tuples(ctx.project, Stage::Approved, &chosen)
        };
        match result {
            Ok(message) => {
                tracing::info!("{}: {}", ctx.project, message);
                ctx.status
                    .success(format!("Approved {} tuples", chosen.len()));
                self.reload(ctx);
                self.selection.select_none();
            }
            Err(e) => {
                tracing::warn!("approving {} tuples failed: {}", chosen.len(), e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn reject_selected(&mut self, ctx: &mut ScreenContext<'_>) {
        if self.selection.is_empty() {
            return;
        }
        let kept: Vec<Tuple> = self
            .tuples
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.selection.contains(*i))
            .map(|(_, t)| t.clone())
            .collect();
        let rejected = self.tuples.len() - kept.len();

        let result = {
            let _loading = self.loading.begin();
            ctx.backend.save_tuples(ctx.project, Stage::Generated, &kept)
        };
        match result {
            Ok(message) => {
                tracing::info!("{}: {}", ctx.project, message);
                ctx.status.success(format!("Rejected {rejected} tuples"));
                self.reload(ctx);
                self.selection.select_none();
            }
            Err(e) => {
                tracing::warn!("rejecting {} tuples failed: {}", rejected, e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn start_edit(&mut self) {
        let index = self.list.selected;
        let Some(tuple) = self.tuples.get(index) else {
            return;
        };
        let fields: Vec<(String, String)> = self
            .columns
            .iter()
            .map(|c| (c.clone(), tuple.get(c).unwrap_or_default().to_string()))
            .collect();
        self.edit = Some(TupleEdit {
            index,
            editor: FieldEditor::new(fields),
        });
    }

    fn save_edit(&mut self, ctx: &mut ScreenContext<'_>) {
        let Some(edit) = &self.edit else {
            return;
        };
        let index = edit.index;
        if index >= self.tuples.len() {
            self.edit = None;
            return;
        }
        // Columns come from every tuple; a blank field the tuple never had stays absent.
        let original = &self.tuples[index];
        let edited = Tuple::from_pairs(
            edit.editor
                .values()
                .filter(|(dimension, value)| !value.is_empty() || original.get(dimension).is_some()),
        );
        self.tuples[index] = edited;

        let result = {
            let _loading = self.loading.begin();
            ctx.backend.save_tuples(ctx.project, self.stage, &self.tuples)
        };
        match result {
            Ok(_) => {
                ctx.status.success(format!("Saved tuple {}", index + 1));
                self.edit = None;
                self.reload(ctx);
            }
            Err(e) => {
                tracing::warn!("saving tuple {} failed: {}", index, e);
                ctx.status.error(e.notice_text());
            }
        }
    }

    fn switch_stage(&mut self, ctx: &mut ScreenContext<'_>) {
        self.stage = self.stage.toggled();
        self.selection.select_none();
        self.list.reset();
        self.reload(ctx);
    }
}

impl ScreenState for ReviewScreen {
    type Action = ReviewAction;

    fn title(&self) -> &'static str {
        "Tuples"
    }

    fn shortcuts(&self) -> Vec<Shortcut<ReviewAction>> {
        let editing = self.is_editing();
        let loading = self.loading.is_loading();
        let has_rows = !self.tuples.is_empty();
        let can_decide = !editing
            && !loading
            && self.stage == Stage::Generated
            && !self.selection.is_empty();

        vec![
            Shortcut::new(&[UP], ReviewAction::CursorUp)
                .describe("Previous tuple")
                .when(!editing),
            Shortcut::new(&["K"], ReviewAction::CursorUp).when(!editing),
            Shortcut::new(&[DOWN], ReviewAction::CursorDown)
                .describe("Next tuple")
                .when(!editing),
            Shortcut::new(&["J"], ReviewAction::CursorDown).when(!editing),
            Shortcut::new(&["PageUp"], ReviewAction::PageUp).when(!editing),
            Shortcut::new(&["PageDown"], ReviewAction::PageDown).when(!editing),
            Shortcut::new(&[SPACE], ReviewAction::ToggleSelection)
                .describe("Toggle selection")
                .primary()
                .when(!editing && has_rows),
            Shortcut::new(&["A"], ReviewAction::SelectAll)
                .describe("Select all")
                .when(!editing && has_rows),
            Shortcut::new(&["N"], ReviewAction::SelectNone)
                .describe("Select none")
                .when(!editing && !self.selection.is_empty()),
            Shortcut::new(&["Y"], ReviewAction::ApproveSelected)
                .describe("Approve selected")
                .primary()
                .when(can_decide),
            Shortcut::new(&[SHIFT, "A"], ReviewAction::ApproveAllPending)
                .describe("Approve all pending")
                .primary()
                .when(!editing && !loading && self.pending_count() > 0),
            Shortcut::new(&["X"], ReviewAction::RejectSelected)
                .describe("Reject selected")
                .primary()
                .when(can_decide),
            Shortcut::new(&["E"], ReviewAction::StartEdit)
                .describe("Edit tuple")
                .primary()
                .when(!editing && has_rows),
            Shortcut::new(&[CONTROL, "S"], ReviewAction::SaveEdit)
                .describe("Save edit")
                .primary()
                .when(editing && !loading),
            Shortcut::new(&["R"], ReviewAction::Reload)
                .describe("Reload")
                .when(!editing && !loading),
            Shortcut::new(&[TAB], ReviewAction::SwitchStage)
                .describe("Switch stage")
                .primary()
                .when(!editing && !loading),
        ]
    }

    fn focus(&self) -> Focus {
        if self.is_editing() {
            Focus::Input(InputKind::Text)
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

    fn apply(&mut self, action: ReviewAction, ctx: &mut ScreenContext<'_>) {
        match action {
            ReviewAction::CursorUp => self.list.select_prev(),
            ReviewAction::CursorDown => self.list.select_next(),
            ReviewAction::PageUp => self.list.page_up(),
            ReviewAction::PageDown => self.list.page_down(),
            ReviewAction::ToggleSelection => {
                if self.list.selected < self.tuples.len() {
                    self.selection.toggle(self.list.selected);
                }
            }
            ReviewAction::SelectAll => self.selection.select_all(self.tuples.len()),
            ReviewAction::SelectNone => self.selection.select_none(),
            ReviewAction::ApproveSelected => self.approve_selected(ctx),
            ReviewAction::ApproveAllPending => {
                self.selection.select_all(self.tuples.len());
                self.approve_selected(ctx);
            }
            ReviewAction::RejectSelected => self.reject_selected(ctx),
            ReviewAction::StartEdit => self.start_edit(),
            ReviewAction::SaveEdit => self.save_edit(ctx),
            ReviewAction::Reload => self.reload(ctx),
            ReviewAction::SwitchStage => self.switch_stage(ctx),
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
