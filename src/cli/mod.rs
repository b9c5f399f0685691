//! CLI command handlers.
//!
//! Handlers take a [`Backend`](crate::api::Backend) and an output writer so
//! they can be exercised without a live server or a terminal.

mod inspect;
mod review;

pub use inspect::{run_projects, run_providers, run_status, run_tuples};
pub use review::{run_review, ReviewArgs};

use clap::ValueEnum;

/// Output format for the non-interactive commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
