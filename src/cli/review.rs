//! Review command handler.
//!
//! Implements the `review` subcommand, which opens the interactive UI on a
//! single project.

use crate::api::Backend;
use crate::config::{AppConfig, StartScreen};
use crate::model::Stage;
use crate::tui::{run_tui, App, AppOptions};
use anyhow::{Context, Result};

/// Command-line overrides for the review UI.
#[derive(Debug, Clone, Default)]
pub struct ReviewArgs {
    pub project: String,
    pub screen: Option<StartScreen>,
    pub stage: Option<Stage>,
}

impl ReviewArgs {
    /// Merge with config defaults.
    #[must_use]
    pub fn options(&self, config: &AppConfig) -> AppOptions {
        let mut options = AppOptions::from_config(config);
        if let Some(screen) = self.screen {
            options.start = screen.into();
        }
        if let Some(stage) = self.stage {
            options.stage = stage;
        }
        options
    }
}

/// Run the review UI until the user quits.
pub fn run_review(config: &AppConfig, backend: Box<dyn Backend>, args: &ReviewArgs) -> Result<()> {
    App::apply_theme(&config.tui.theme);

    let options = args.options(config);
    tracing::info!(
        "opening review of '{}' on {:?} ({} stage)",
        args.project,
        options.start,
        options.stage
    );

    let mut app = App::new(args.project.clone(), backend, &options);
    run_tui(&mut app, config.tui.tick_rate_ms).context("terminal UI failed")?;
    Ok(())
}
