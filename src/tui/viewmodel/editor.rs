//! Inline field editor used by the review screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What an editor did with a key it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Key changed the buffer or moved the field cursor
    Handled,
    /// User abandoned the edit
    Cancelled,
    /// Not an editing key
    Ignored,
}

/// A labelled text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// Edits a list of labelled single-line fields.
///
/// Handles its own typing, `⌫`, field movement (`⇥`, `↵`, `↑`, `↓`) and
/// `Esc`. Saving is a shortcut owned by the screen.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    fields: Vec<Field>,
    active: usize,
}

impl FieldEditor {
    pub fn new<L, V>(fields: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(label, value)| Field {
                    label: label.into(),
                    value: value.into(),
                })
                .collect(),
            active: 0,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Field values as `(label, value)` pairs in order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str()))
    }

    fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = self
                .active
                .checked_sub(1)
                .unwrap_or(self.fields.len() - 1);
        }
    }

    /// Default key handling for the editor.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorOutcome {
        let command = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        match key.code {
            KeyCode::Esc => EditorOutcome::Cancelled,
            KeyCode::Tab | KeyCode::Enter | KeyCode::Down => {
                self.next_field();
                EditorOutcome::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_field();
                EditorOutcome::Handled
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.value.pop();
                }
                EditorOutcome::Handled
            }
            KeyCode::Char(c) if !command => {
                if let Some(field) = self.fields.get_mut(self.active) {
                    field.value.push(c);
                }
                EditorOutcome::Handled
            }
            _ => EditorOutcome::Ignored,
        }
    }
}
