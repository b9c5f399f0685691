//! Multi-select state for review lists.

use std::collections::BTreeSet;

/// Set of selected row indices, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`. Toggling twice restores the previous set.
    pub fn toggle(&mut self, index: usize) {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    /// Select every row of a list with `len` rows.
    pub fn select_all(&mut self, len: usize) {
        self.indices = (0..len).collect();
    }

    pub fn select_none(&mut self) {
        self.indices.clear();
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Drop indices that no longer exist after the list shrank to `len`.
    pub fn clamp(&mut self, len: usize) {
        self.indices.retain(|&i| i < len);
    }
}
