//! Configuration validation for qgen-review.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{ApiConfig, AppConfig, ReviewConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn range_error(field: &str, value: impl std::fmt::Display, min: u64, max: u64) -> ConfigError {
    ConfigError {
        field: field.to_string(),
        message: format!("must be between {min} and {max}, got {value}"),
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.review.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigError {
                field: "api.base_url".to_string(),
                message: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
            }),
            Err(e) => errors.push(ConfigError {
                field: "api.base_url".to_string(),
                message: format!("Invalid URL '{}': {e}", self.base_url),
            }),
        }

        if !(1..=3600).contains(&self.timeout_secs) {
            errors.push(range_error("api.timeout_secs", self.timeout_secs, 1, 3600));
        }

        errors
    }
}

impl Validatable for ReviewConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(1..=500).contains(&self.tuple_count) {
            errors.push(range_error("review.tuple_count", self.tuple_count, 1, 500));
        }
        if !(1..=20).contains(&self.queries_per_tuple) {
            errors.push(range_error(
                "review.queries_per_tuple",
                self.queries_per_tuple,
                1,
                20,
            ));
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let valid_themes = ["", "dark", "light", "high-contrast"];
        if !valid_themes.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: dark, light, high-contrast",
                    self.theme
                ),
            });
        }
        if !(16..=2000).contains(&self.tick_rate_ms) {
            errors.push(range_error("tui.tick_rate_ms", self.tick_rate_ms, 16, 2000));
        }
        if !(1..=60).contains(&self.notice_secs) {
            errors.push(range_error("tui.notice_secs", self.notice_secs, 1, 60));
        }
        errors
    }
}
