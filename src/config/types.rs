//! Configuration type definitions.

use crate::api::HttpBackendConfig;
use crate::model::Stage;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Top-level Configuration
// ============================================================================

/// Full application configuration, as read from `.qgen-review.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection settings
    pub api: ApiConfig,
    /// Review defaults
    pub review: ReviewConfig,
    /// Terminal UI settings
    pub tui: TuiConfig,
}

impl AppConfig {
    /// HTTP client settings derived from this config.
    #[must_use]
    pub fn http_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }
}

// ============================================================================
// Backend Configuration
// ============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL of the qgen web backend
    pub base_url: String,
    /// Request timeout in seconds. Generation runs an LLM per request.
    #[schemars(range(min = 1, max = 3600))]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

// ============================================================================
// Review Configuration
// ============================================================================

/// Screen shown when the review UI starts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    /// Project status card, providers, generation and export
    #[default]
    Dashboard,
    /// Tuple review grid
    Tuples,
    /// Query review list
    Queries,
}

/// Defaults for review and generation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReviewConfig {
    /// Stage the review grids open on
    pub default_stage: Stage,
    /// Screen the UI opens on
    pub start_screen: StartScreen,
    /// Tuples requested per generation run
    #[schemars(range(min = 1, max = 500))]
    pub tuple_count: usize,
    /// Queries generated for each approved tuple
    #[schemars(range(min = 1, max = 20))]
    pub queries_per_tuple: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            default_stage: Stage::Generated,
            start_screen: StartScreen::Dashboard,
            tuple_count: 20,
            queries_per_tuple: 3,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qgen-review").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast". Empty uses the saved preference.
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 2000))]
    pub tick_rate_ms: u64,
    /// Seconds a status notice stays visible
    #[schemars(range(min = 1, max = 60))]
    pub notice_secs: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: String::new(),
            tick_rate_ms: 250,
            notice_secs: 5,
        }
    }
}
