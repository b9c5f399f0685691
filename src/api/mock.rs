//! In-memory backend double for unit tests.

use super::traits::Backend;
use crate::error::{QgenError, Result};
use crate::model::{
    DataStatus, ExportFormat, ExportResponse, GenerateQueriesRequest, GenerateTuplesRequest,
    GenerationResponse, ProjectDetails, ProjectSummary, ProvidersInfo, Query, QueryStatus,
    QueryUpdate, Stage, Tuple,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// A recorded write call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SaveTuples(Stage, Vec<Tuple>),
    GenerateTuples(usize, Option<String>),
    UpdateQuery(usize, QueryUpdate),
    ApproveQueries(Vec<usize>),
    GenerateQueries(usize, Option<String>),
    Export(ExportFormat, Stage),
}

#[derive(Default)]
pub(crate) struct MockBackend {
    pub tuples: RefCell<HashMap<Stage, Vec<Tuple>>>,
    pub queries: RefCell<HashMap<Stage, Vec<Query>>>,
    pub providers: Option<ProvidersInfo>,
    pub fail_writes: bool,
    pub calls: RefCell<Vec<Call>>,
    pub reads: RefCell<usize>,
}

impl MockBackend {
    pub fn with_tuples(stage: Stage, tuples: Vec<Tuple>) -> Self {
        let backend = Self::default();
        backend.tuples.borrow_mut().insert(stage, tuples);
        backend
    }

    pub fn with_queries(stage: Stage, queries: Vec<Query>) -> Self {
        let backend = Self::default();
        backend.queries.borrow_mut().insert(stage, queries);
        backend
    }

    fn write(&self, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_writes {
            Err(QgenError::status("POST /api/mock", 500, "backend unavailable"))
        } else {
            Ok(())
        }
    }
}

pub(crate) fn tuple(topic: &str) -> Tuple {
    Tuple::from_pairs([("topic", topic), ("persona", "admin")])
}

pub(crate) fn query(id: usize, text: &str, status: QueryStatus) -> Query {
    Query {
        id,
        text: text.to_string(),
        status,
        tuple_data: tuple("billing").values,
    }
}

impl Backend for MockBackend {
    fn providers(&self) -> Result<ProvidersInfo> {
        self.providers
            .clone()
            .ok_or_else(|| QgenError::status("GET /api/providers", 503, "down"))
    }

    fn projects(&self, _limit: Option<usize>) -> Result<Vec<ProjectSummary>> {
        Ok(Vec::new())
    }

    fn project(&self, project: &str) -> Result<ProjectDetails> {
        *self.reads.borrow_mut() += 1;
        let tuples = self.tuples.borrow();
        let queries = self.queries.borrow();
        let count = |m: &HashMap<Stage, usize>, s: Stage| m.get(&s).copied().unwrap_or(0);
        let t: HashMap<Stage, usize> = tuples.iter().map(|(k, v)| (*k, v.len())).collect();
        let q: HashMap<Stage, usize> = queries.iter().map(|(k, v)| (*k, v.len())).collect();
        Ok(ProjectDetails {
            name: project.to_string(),
            domain: "support".to_string(),
            dimensions: Vec::new(),
            example_queries: Vec::new(),
            data_status: DataStatus {
                generated_tuples: count(&t, Stage::Generated),
                approved_tuples: count(&t, Stage::Approved),
                generated_queries: count(&q, Stage::Generated),
                approved_queries: count(&q, Stage::Approved),
            },
        })
    }

    fn tuples(&self, _project: &str, stage: Stage) -> Result<Vec<Tuple>> {
        *self.reads.borrow_mut() += 1;
        Ok(self.tuples.borrow().get(&stage).cloned().unwrap_or_default())
    }

    fn save_tuples(&self, _project: &str, stage: Stage, tuples: &[Tuple]) -> Result<String> {
        self.write(Call::SaveTuples(stage, tuples.to_vec()))?;
        self.tuples.borrow_mut().insert(stage, tuples.to_vec());
        Ok(format!("Saved {} tuples to {stage}", tuples.len()))
    }

    fn generate_tuples(
        &self,
        _project: &str,
        request: &GenerateTuplesRequest,
    ) -> Result<GenerationResponse> {
        self.write(Call::GenerateTuples(request.count, request.provider.clone()))?;
        Ok(GenerationResponse {
            message: format!("Generated {} tuples", request.count),
            count: request.count,
        })
    }

    fn queries(&self, _project: &str, stage: Stage) -> Result<Vec<Query>> {
        *self.reads.borrow_mut() += 1;
        Ok(self.queries.borrow().get(&stage).cloned().unwrap_or_default())
    }

    fn update_query(&self, _project: &str, id: usize, update: &QueryUpdate) -> Result<String> {
        self.write(Call::UpdateQuery(id, update.clone()))?;
        if let Some(list) = self.queries.borrow_mut().get_mut(&Stage::Generated) {
            if let Some(q) = list.iter_mut().find(|q| q.id == id) {
                q.status = update.status;
                if let Some(text) = &update.text {
                    q.text.clone_from(text);
                }
            }
        }
        Ok("Query updated successfully".to_string())
    }

    fn approve_queries(&self, _project: &str, ids: &[usize]) -> Result<String> {
        self.write(Call::ApproveQueries(ids.to_vec()))?;
        if let Some(list) = self.queries.borrow_mut().get_mut(&Stage::Generated) {
            for q in list.iter_mut().filter(|q| ids.contains(&q.id)) {
                q.status = QueryStatus::Approved;
            }
        }
        Ok(format!("Approved {} queries", ids.len()))
    }

    fn generate_queries(
        &self,
        _project: &str,
        request: &GenerateQueriesRequest,
    ) -> Result<GenerationResponse> {
        self.write(Call::GenerateQueries(
            request.queries_per_tuple,
            request.provider.clone(),
        ))?;
        Ok(GenerationResponse {
            message: "Generated 3 queries".to_string(),
            count: 3,
        })
    }

    fn export(
        &self,
        _project: &str,
        format: ExportFormat,
        stage: Stage,
    ) -> Result<ExportResponse> {
        self.write(Call::Export(format, stage))?;
        Ok(ExportResponse {
            message: "Exported".to_string(),
            path: format!("data/exports/dataset.{format}"),
            format,
        })
    }
}
