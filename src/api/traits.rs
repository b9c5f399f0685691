//! Backend trait.

use crate::error::Result;
use crate::model::{
    ExportFormat, ExportResponse, GenerateQueriesRequest, GenerateTuplesRequest,
    GenerationResponse, ProjectDetails, ProjectSummary, ProvidersInfo, Query, QueryUpdate, Stage,
    Tuple,
};

/// Operations the review client needs from the qgen backend.
///
/// Every call is a single blocking request. Implementations do not retry;
/// a failure is terminal for the user action that triggered it.
pub trait Backend {
    /// `GET /api/providers`
    fn providers(&self) -> Result<ProvidersInfo>;

    /// `GET /api/projects`, most recently modified first.
    fn projects(&self, limit: Option<usize>) -> Result<Vec<ProjectSummary>>;

    /// `GET /api/projects/{name}`
    fn project(&self, project: &str) -> Result<ProjectDetails>;

    /// `GET /api/projects/{name}/tuples/{stage}`
    fn tuples(&self, project: &str, stage: Stage) -> Result<Vec<Tuple>>;

    /// `POST /api/projects/{name}/tuples/{stage}`. Replaces the stage contents.
    fn save_tuples(&self, project: &str, stage: Stage, tuples: &[Tuple]) -> Result<String>;

    /// `POST /api/projects/{name}/generate/tuples`
    fn generate_tuples(
        &self,
        project: &str,
        request: &GenerateTuplesRequest,
    ) -> Result<GenerationResponse>;

    /// `GET /api/projects/{name}/queries/{stage}`
    fn queries(&self, project: &str, stage: Stage) -> Result<Vec<Query>>;

    /// `PUT /api/projects/{name}/queries/{id}`
    fn update_query(&self, project: &str, id: usize, update: &QueryUpdate) -> Result<String>;

    /// `POST /api/projects/{name}/queries/approve`
    fn approve_queries(&self, project: &str, ids: &[usize]) -> Result<String>;

    /// `POST /api/projects/{name}/generate/queries`
    fn generate_queries(
        &self,
        project: &str,
        request: &GenerateQueriesRequest,
    ) -> Result<GenerationResponse>;

    /// `GET /api/projects/{name}/export/{format}?stage=...`
    fn export(&self, project: &str, format: ExportFormat, stage: Stage)
        -> Result<ExportResponse>;
}
