//! Shared helpers for integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qgen_review::error::{QgenError, Result};
use qgen_review::model::{
    DataStatus, ExportFormat, ExportResponse, GenerateQueriesRequest, GenerateTuplesRequest,
    GenerationResponse, ProjectDetails, ProjectSummary, ProvidersInfo, Query, QueryStatus,
    QueryUpdate, Stage, Tuple,
};
use qgen_review::Backend;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A write the backend received.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    SaveTuples(Stage, Vec<Tuple>),
    GenerateTuples(usize, Option<String>),
    UpdateQuery(usize, QueryUpdate),
    ApproveQueries(Vec<usize>),
    GenerateQueries(usize, Option<String>),
    Export(ExportFormat, Stage),
}

#[derive(Default)]
struct Store {
    tuples: HashMap<Stage, Vec<Tuple>>,
    queries: HashMap<Stage, Vec<Query>>,
    providers: Option<ProvidersInfo>,
    fail_writes: bool,
    writes: Vec<Recorded>,
}

/// In-memory backend that behaves like the real one closely enough for
/// review flows: tuple saves replace a stage, query approval moves queries.
///
/// Clones share state, so a test can hand one clone to the app and inspect
/// the other.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    store: Rc<RefCell<Store>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuples(self, stage: Stage, tuples: Vec<Tuple>) -> Self {
        self.store.borrow_mut().tuples.insert(stage, tuples);
        self
    }

    pub fn with_queries(self, stage: Stage, queries: Vec<Query>) -> Self {
        self.store.borrow_mut().queries.insert(stage, queries);
        self
    }

    pub fn with_providers(self, available: &[&str], auto: Option<&str>) -> Self {
        self.store.borrow_mut().providers = Some(ProvidersInfo {
            available: available.iter().map(|s| (*s).to_string()).collect(),
            auto_detected: auto.map(str::to_string),
        });
        self
    }

    pub fn failing_writes(self) -> Self {
        self.store.borrow_mut().fail_writes = true;
        self
    }

    pub fn writes(&self) -> Vec<Recorded> {
        self.store.borrow().writes.clone()
    }

    pub fn stored_tuples(&self, stage: Stage) -> Vec<Tuple> {
        self.store
            .borrow()
            .tuples
            .get(&stage)
            .cloned()
            .unwrap_or_default()
    }

    pub fn stored_queries(&self, stage: Stage) -> Vec<Query> {
        self.store
            .borrow()
            .queries
            .get(&stage)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, write: Recorded) -> Result<()> {
        let mut store = self.store.borrow_mut();
        store.writes.push(write);
        if store.fail_writes {
            Err(QgenError::status("POST /api/test", 502, "upstream timed out"))
        } else {
            Ok(())
        }
    }
}

impl Backend for RecordingBackend {
    fn providers(&self) -> Result<ProvidersInfo> {
        self.store
            .borrow()
            .providers
            .clone()
            .ok_or_else(|| QgenError::status("GET /api/providers", 500, "no provider config"))
    }

    fn projects(&self, limit: Option<usize>) -> Result<Vec<ProjectSummary>> {
        let all = vec![ProjectSummary {
            name: "support-bot".to_string(),
            path: "projects/support-bot".to_string(),
            domain: "customer support".to_string(),
            dimensions_count: 2,
        }];
        Ok(all.into_iter().take(limit.unwrap_or(usize::MAX)).collect())
    }

    fn project(&self, project: &str) -> Result<ProjectDetails> {
        let store = self.store.borrow();
        let tuples = |s: Stage| store.tuples.get(&s).map_or(0, Vec::len);
        let queries = |s: Stage| store.queries.get(&s).map_or(0, Vec::len);
        Ok(ProjectDetails {
            name: project.to_string(),
            domain: "customer support".to_string(),
            dimensions: Vec::new(),
            example_queries: Vec::new(),
            data_status: DataStatus {
                generated_tuples: tuples(Stage::Generated),
                approved_tuples: tuples(Stage::Approved),
                generated_queries: queries(Stage::Generated),
                approved_queries: queries(Stage::Approved),
            },
        })
    }

    fn tuples(&self, _project: &str, stage: Stage) -> Result<Vec<Tuple>> {
        Ok(self.stored_tuples(stage))
    }

    fn save_tuples(&self, _project: &str, stage: Stage, tuples: &[Tuple]) -> Result<String> {
        self.record(Recorded::SaveTuples(stage, tuples.to_vec()))?;
        self.store
            .borrow_mut()
            .tuples
            .insert(stage, tuples.to_vec());
        Ok(format!("Saved {} tuples", tuples.len()))
    }

    fn generate_tuples(
        &self,
        _project: &str,
        request: &GenerateTuplesRequest,
    ) -> Result<GenerationResponse> {
        self.record(Recorded::GenerateTuples(
            request.count,
            request.provider.clone(),
        ))?;
        Ok(GenerationResponse {
            message: format!("Generated {} tuples", request.count),
            count: request.count,
        })
    }

    fn queries(&self, _project: &str, stage: Stage) -> Result<Vec<Query>> {
        Ok(self.stored_queries(stage))
    }

    fn update_query(&self, _project: &str, id: usize, update: &QueryUpdate) -> Result<String> {
        self.record(Recorded::UpdateQuery(id, update.clone()))?;
        let mut store = self.store.borrow_mut();
        if let Some(query) = store
            .queries
            .get_mut(&Stage::Generated)
            .and_then(|qs| qs.iter_mut().find(|q| q.id == id))
        {
            query.status = update.status;
            if let Some(text) = &update.text {
                query.text.clone_from(text);
            }
        }
        Ok(format!("Updated query {id}"))
    }

    fn approve_queries(&self, _project: &str, ids: &[usize]) -> Result<String> {
        self.record(Recorded::ApproveQueries(ids.to_vec()))?;
        let mut store = self.store.borrow_mut();
        let mut approved = Vec::new();
        if let Some(generated) = store.queries.get_mut(&Stage::Generated) {
            for query in generated.iter_mut().filter(|q| ids.contains(&q.id)) {
                query.status = QueryStatus::Approved;
                approved.push(query.clone());
            }
        }
        store
            .queries
            .entry(Stage::Approved)
            .or_default()
            .extend(approved);
        Ok(format!("Approved {} queries", ids.len()))
    }

    fn generate_queries(
        &self,
        _project: &str,
        request: &GenerateQueriesRequest,
    ) -> Result<GenerationResponse> {
        self.record(Recorded::GenerateQueries(
            request.queries_per_tuple,
            request.provider.clone(),
        ))?;
        Ok(GenerationResponse {
            message: "Generated queries".to_string(),
            count: 0,
        })
    }

    fn export(
        &self,
        project: &str,
        format: ExportFormat,
        stage: Stage,
    ) -> Result<ExportResponse> {
        self.record(Recorded::Export(format, stage))?;
        Ok(ExportResponse {
            message: "Exported".to_string(),
            path: format!("projects/{project}/exports/{stage}.{format}"),
            format,
        })
    }
}

pub fn tuple(topic: &str, persona: &str) -> Tuple {
    Tuple::from_pairs([("topic", topic), ("persona", persona)])
}

pub fn query(id: usize, text: &str) -> Query {
    Query {
        id,
        text: text.to_string(),
        status: QueryStatus::Pending,
        tuple_data: tuple("billing", "admin").values,
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn shift(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), KeyModifiers::SHIFT)
}
