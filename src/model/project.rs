//! Project, provider, and generic response types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dimension of the tuple space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub description: String,
    pub values: Vec<String>,
}

/// Entry of `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub path: String,
    pub domain: String,
    pub dimensions_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectSummary>,
}

/// Record counts per stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStatus {
    pub generated_tuples: usize,
    pub approved_tuples: usize,
    pub generated_queries: usize,
    pub approved_queries: usize,
}

/// Response body of `GET /api/projects/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub example_queries: Vec<String>,
    #[serde(default)]
    pub data_status: DataStatus,
}

/// Response body of `GET /api/providers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersInfo {
    #[serde(default)]
    pub available: Vec<String>,
    pub auto_detected: Option<String>,
}

/// Export file format accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement of a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: usize,
}

/// Acknowledgement of an export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    #[serde(default)]
    pub message: String,
    pub path: String,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_details_tolerates_missing_sections() {
        let details: ProjectDetails =
            serde_json::from_str(r#"{"name": "support", "domain": "saas"}"#).unwrap();
        assert!(details.dimensions.is_empty());
        assert_eq!(details.data_status, DataStatus::default());
    }

    #[test]
    fn test_providers_info() {
        let info: ProvidersInfo =
            serde_json::from_str(r#"{"available": ["openai", "azure"], "auto_detected": null}"#)
                .unwrap();
        assert_eq!(info.available.len(), 2);
        assert!(info.auto_detected.is_none());
    }
}
