//! Configuration loading and validation through the public API.

use qgen_review::config::{
    generate_example_config, generate_json_schema, load_config_file, load_or_default,
    ConfigFileError, StartScreen, Validatable,
};
use qgen_review::model::Stage;
use qgen_review::tui::{AppOptions, ScreenKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_keys() {
    let file = write_yaml(
        "review:\n  default_stage: approved\n  start_screen: queries\ntui:\n  theme: light\n",
    );
    let config = load_config_file(file.path()).unwrap();

    assert_eq!(config.review.default_stage, Stage::Approved);
    assert_eq!(config.review.start_screen, StartScreen::Queries);
    assert_eq!(config.review.tuple_count, 20);
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.tui.theme, "light");
    assert!(config.is_valid());

    let options = AppOptions::from_config(&config);
    assert_eq!(options.start, ScreenKind::Queries);
    assert_eq!(options.stage, Stage::Approved);
}

#[test]
fn test_explicit_path_wins_and_is_reported() {
    let file = write_yaml("api:\n  base_url: https://qgen.example.com\n");
    let (config, loaded_from) = load_or_default(Some(file.path()));
    assert_eq!(config.api.base_url, "https://qgen.example.com");
    assert_eq!(loaded_from.as_deref(), Some(file.path()));
}

#[test]
fn test_cli_url_overrides_file() {
    let file = write_yaml("api:\n  base_url: https://qgen.example.com\n");
    let mut config = load_config_file(file.path()).unwrap();
    config.merge_cli(Some("http://127.0.0.1:9000"));
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");

    config.merge_cli(None);
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
}

#[test]
fn test_invalid_values_are_all_reported() {
    let file = write_yaml(
        "api:\n  base_url: ftp://files\n  timeout_secs: 0\nreview:\n  tuple_count: 0\n  queries_per_tuple: 50\n",
    );
    let config = load_config_file(file.path()).unwrap();
    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();

    assert!(fields.contains(&"api.base_url".to_string()));
    assert!(fields.contains(&"api.timeout_secs".to_string()));
    assert!(fields.contains(&"review.tuple_count".to_string()));
    assert!(fields.contains(&"review.queries_per_tuple".to_string()));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let file = write_yaml("review: [unterminated\n");
    assert!(matches!(
        load_config_file(file.path()),
        Err(ConfigFileError::Parse(_))
    ));
}

#[test]
fn test_example_config_parses_and_validates() {
    let file = write_yaml(&generate_example_config());
    let config = load_config_file(file.path()).unwrap();
    assert!(config.is_valid(), "{:?}", config.validate());
}

#[test]
fn test_schema_names_sections() {
    let schema: serde_json::Value = serde_json::from_str(&generate_json_schema()).unwrap();
    let properties = &schema["properties"];
    assert!(properties.get("api").is_some());
    assert!(properties.get("review").is_some());
    assert!(properties.get("tui").is_some());
}
