//! Generated queries and their review status.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Skipped,
}

impl QueryStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated query with the tuple it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Position in the backend's stage file
    pub id: usize,
    pub text: String,
    #[serde(default)]
    pub status: QueryStatus,
    #[serde(default)]
    pub tuple_data: IndexMap<String, String>,
}

impl Query {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    /// Compact `k: v, ...` rendering of the source tuple.
    #[must_use]
    pub fn tuple_summary(&self) -> String {
        self.tuple_data
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Response body of `GET /queries/{stage}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryList {
    pub queries: Vec<Query>,
    #[serde(default)]
    pub count: usize,
}

/// Request body of `PUT /queries/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUpdate {
    pub status: QueryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Request body of `POST /generate/queries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQueriesRequest {
    pub queries_per_tuple: usize,
    pub provider: Option<String>,
}
