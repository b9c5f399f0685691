//! Cursor navigation shared by the list screens.

use super::constants::PAGE_SIZE;

/// Trait for list-based navigation state.
pub trait ListNavigation {
    fn selected(&self) -> usize;

    fn set_selected(&mut self, idx: usize);

    fn total(&self) -> usize;

    /// Move the cursor to the next row.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total - 1 {
            self.set_selected(selected + 1);
        }
    }

    /// Move the cursor to the previous row.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Keep the cursor inside the list after it changed size.
    fn clamp_selection(&mut self) {
        let total = self.total();
        if total == 0 {
            self.set_selected(0);
        } else if self.selected() >= total {
            self.set_selected(total - 1);
        }
    }

    /// Jump a page up.
    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(PAGE_SIZE));
    }

    fn page_down(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected((self.selected() + PAGE_SIZE).min(total - 1));
        }
    }
}

/// Cursor position and scroll offset for a list.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
    pub scroll_offset: usize,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the row count, keeping the cursor in bounds.
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        self.clamp_selection();
    }

    /// Reset to the top of the list.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Adjust the scroll offset so the cursor stays within `visible` rows.
    pub fn scroll_into_view(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_bounds() {
        let mut state = ListState::new();
        state.resize(3);
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        state.page_up();
        assert_eq!(state.selected, 0);
        state.page_down();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_resize_clamps_cursor() {
        let mut state = ListState::new();
        state.resize(10);
        state.selected = 9;
        state.resize(4);
        assert_eq!(state.selected, 3);
        state.resize(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut state = ListState::new();
        state.resize(50);
        state.selected = 12;
        state.scroll_into_view(5);
        assert_eq!(state.scroll_offset, 8);
        state.selected = 2;
        state.scroll_into_view(5);
        assert_eq!(state.scroll_offset, 2);
    }
}
