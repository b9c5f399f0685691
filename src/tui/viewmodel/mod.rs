//! Screen-independent view models.
//!
//! Small state holders shared by the review screens:
//! - [`StatusMessage`] for status-bar notices
//! - [`Selection`] for multi-select lists
//! - [`LoadingFlag`] for in-flight backend requests
//! - [`FieldEditor`] for inline edits

mod editor;
mod loading;
mod selection;
mod status;

pub use editor::{EditorOutcome, Field, FieldEditor};
pub use loading::{LoadingFlag, LoadingGuard};
pub use selection::Selection;
pub use status::{NoticeLevel, StatusMessage};
