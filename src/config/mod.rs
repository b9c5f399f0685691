//! Configuration for qgen-review.
//!
//! Settings come from three places, later ones winning:
//! - built-in defaults
//! - a discovered `.qgen-review.yaml` file
//! - command-line flags and `QGEN_API_URL`
//!
//! ```yaml
//! api:
//!   base_url: http://localhost:8000
//! review:
//!   default_stage: generated
//!   tuple_count: 20
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};
pub use types::{ApiConfig, AppConfig, ReviewConfig, StartScreen, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `.qgen-review.yaml` format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        tracing::warn!("schema serialization failed: {}", e);
        String::from("{}")
    })
}
