//! Dimension tuples and review stages.

use clap::ValueEnum;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle bucket a tuple or query lives in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Freshly generated, awaiting review
    #[default]
    Generated,
    /// Accepted by a reviewer
    Approved,
}

impl Stage {
    /// Path segment used by the backend.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Approved => "approved",
        }
    }

    /// The other stage.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Generated => Self::Approved,
            Self::Approved => Self::Generated,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generated" => Ok(Self::Generated),
            "approved" => Ok(Self::Approved),
            other => Err(format!("unknown stage '{other}' (expected generated or approved)")),
        }
    }
}

/// A combination of dimension values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuple {
    /// Dimension name → selected value, in dimension order
    pub values: IndexMap<String, String>,
}

impl Tuple {
    /// Build a tuple from `(dimension, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value for a dimension, if present.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.values.get(dimension).map(String::as_str)
    }

    /// Dimension names in order.
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .values
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        write!(f, "({})", items.join(", "))
    }
}

/// Response body of `GET /tuples/{stage}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TupleList {
    pub tuples: Vec<Tuple>,
    #[serde(default)]
    pub count: usize,
}

/// Request body of `POST /tuples/{stage}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTuplesRequest {
    pub tuples: Vec<Tuple>,
}

/// Request body of `POST /generate/tuples`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTuplesRequest {
    pub count: usize,
    pub provider: Option<String>,
}

/// Collect the union of dimension names across tuples, first-seen order.
#[must_use]
pub fn dimension_columns(tuples: &[Tuple]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for tuple in tuples {
        for name in tuple.dimensions() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}
