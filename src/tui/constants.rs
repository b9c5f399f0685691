//! Named constants for TUI layout and navigation.

/// Number of rows to move per page-up/page-down.
pub(crate) const PAGE_SIZE: usize = 10;

/// Step for the dashboard's tuple-count adjuster.
pub(crate) const TUPLE_COUNT_STEP: usize = 5;

/// Bounds for the tuple count requested per generation run.
pub(crate) const MIN_TUPLE_COUNT: usize = 1;
pub(crate) const MAX_TUPLE_COUNT: usize = 500;

/// Width of the selection marker column in review lists.
pub(crate) const MARKER_WIDTH: u16 = 4;
