//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".qgen-review.yaml",
    ".qgen-review.yml",
    "qgen-review.yaml",
    "qgen-review.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/qgen-review/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = cwd
        .as_deref()
        .and_then(find_git_root)
        .and_then(|root| find_config_in_dir(&root))
    {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir().and_then(|d| find_config_in_dir(&d.join("qgen-review")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Walk up from `start` to the first directory containing `.git`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from a discovered file, falling back to defaults.
///
/// Returns the config together with the path it was read from. A file that
/// exists but fails to parse is reported and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

impl AppConfig {
    /// Apply command-line overrides on top of file values.
    pub fn merge_cli(&mut self, api_url: Option<&str>) {
        if let Some(url) = api_url {
            self.api.base_url = url.to_string();
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example configuration file.
#[must_use]
pub fn generate_example_config() -> String {
    r#"# qgen-review configuration
# Place this file at .qgen-review.yaml in your project root or ~/.config/qgen-review/

api:
  # Root URL of the qgen web backend (the QGEN_API_URL env var or --api-url override it)
  base_url: http://localhost:8000
  # Generation calls an LLM per request, keep this generous
  timeout_secs: 120

review:
  # Stage the review grids open on: generated or approved
  default_stage: generated
  # Screen shown on start: dashboard, tuples, or queries
  start_screen: dashboard
  # Tuples requested per generation run (1-500)
  tuple_count: 20
  # Queries generated per approved tuple (1-20)
  queries_per_tuple: 3

tui:
  # Theme: dark, light, high-contrast (leave empty to use the saved preference)
  theme: ""
  # Event poll interval in milliseconds
  tick_rate_ms: 250
  # Seconds a status notice stays visible
  notice_secs: 5
"#
    .to_string()
}
