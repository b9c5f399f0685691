//! Blocking HTTP client for the qgen backend.

use super::traits::Backend;
use crate::error::{ApiErrorKind, QgenError, Result};
use crate::model::{
    ExportFormat, ExportResponse, GenerateQueriesRequest, GenerateTuplesRequest,
    GenerationResponse, MessageResponse, ProjectDetails, ProjectList, ProjectSummary,
    ProvidersInfo, Query, QueryList, QueryUpdate, SaveTuplesRequest, Stage, Tuple, TupleList,
};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Backend root, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Request timeout. Generation calls run an LLM, so keep this generous.
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// [`Backend`] over HTTP.
pub struct HttpBackend {
    client: Client,
    base: Url,
}

/// Helper to convert reqwest errors to backend errors
fn network_error(context: &str, err: reqwest::Error) -> QgenError {
    QgenError::api(context, ApiErrorKind::Network(err.to_string()))
}

/// Pull the `detail` field FastAPI puts on error bodies, falling back to the raw body.
fn error_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_string();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => trimmed.to_string(),
        },
        _ => trimmed.to_string(),
    }
}

impl HttpBackend {
    /// Create a new client.
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            QgenError::api(
                "parsing backend URL",
                ApiErrorKind::InvalidUrl(format!("{}: {e}", config.base_url)),
            )
        })?;
        if base.cannot_be_a_base() {
            return Err(QgenError::api(
                "parsing backend URL",
                ApiErrorKind::InvalidUrl(config.base_url),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, base })
    }

    /// Build an endpoint URL from path segments. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                QgenError::api(
                    "building endpoint",
                    ApiErrorKind::InvalidUrl(self.base.to_string()),
                )
            })?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn project_endpoint(&self, project: &str, rest: &[&str]) -> Result<Url> {
        let mut segments = Vec::with_capacity(rest.len() + 2);
        segments.push("projects");
        segments.push(project);
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, context: &str) -> Result<T> {
        let response = request
            .send()
            .map_err(|e| network_error(context, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::debug!("{} failed with status {}", context, status.as_u16());
            return Err(QgenError::status(
                context,
                status.as_u16(),
                error_detail(&body),
            ));
        }

        response.json::<T>().map_err(|e| {
            QgenError::api(context, ApiErrorKind::InvalidResponse(e.to_string()))
        })
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let context = format!("GET {}", url.path());
        tracing::debug!("{}", context);
        self.send(self.client.get(url), &context)
    }

    fn post<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let context = format!("POST {}", url.path());
        tracing::debug!("{}", context);
        self.send(self.client.post(url).json(body), &context)
    }

    fn put<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let context = format!("PUT {}", url.path());
        tracing::debug!("{}", context);
        self.send(self.client.put(url).json(body), &context)
    }
}

impl Backend for HttpBackend {
    fn providers(&self) -> Result<ProvidersInfo> {
        self.get(self.endpoint(&["providers"])?)
    }

    fn projects(&self, limit: Option<usize>) -> Result<Vec<ProjectSummary>> {
        let mut url = self.endpoint(&["projects"])?;
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        let list: ProjectList = self.get(url)?;
        Ok(list.projects)
    }

    fn project(&self, project: &str) -> Result<ProjectDetails> {
        self.get(self.project_endpoint(project, &[])?)
    }

    fn tuples(&self, project: &str, stage: Stage) -> Result<Vec<Tuple>> {
        let list: TupleList = self.get(self.project_endpoint(project, &["tuples", stage.as_str()])?)?;
        Ok(list.tuples)
    }

    fn save_tuples(&self, project: &str, stage: Stage, tuples: &[Tuple]) -> Result<String> {
        let body = SaveTuplesRequest {
            tuples: tuples.to_vec(),
        };
        let ack: MessageResponse =
            self.post(self.project_endpoint(project, &["tuples", stage.as_str()])?, &body)?;
        Ok(ack.message)
    }

    fn generate_tuples(
        &self,
        project: &str,
        request: &GenerateTuplesRequest,
    ) -> Result<GenerationResponse> {
        self.post(
            self.project_endpoint(project, &["generate", "tuples"])?,
            request,
        )
    }

    fn queries(&self, project: &str, stage: Stage) -> Result<Vec<Query>> {
        let list: QueryList =
            self.get(self.project_endpoint(project, &["queries", stage.as_str()])?)?;
        Ok(list.queries)
    }

    fn update_query(&self, project: &str, id: usize, update: &QueryUpdate) -> Result<String> {
        let id = id.to_string();
        let ack: MessageResponse =
            self.put(self.project_endpoint(project, &["queries", &id])?, update)?;
        Ok(ack.message)
    }

    fn approve_queries(&self, project: &str, ids: &[usize]) -> Result<String> {
        let ack: MessageResponse =
            self.post(self.project_endpoint(project, &["queries", "approve"])?, ids)?;
        Ok(ack.message)
    }

    fn generate_queries(
        &self,
        project: &str,
        request: &GenerateQueriesRequest,
    ) -> Result<GenerationResponse> {
        self.post(
            self.project_endpoint(project, &["generate", "queries"])?,
            request,
        )
    }

    fn export(
        &self,
        project: &str,
        format: ExportFormat,
        stage: Stage,
    ) -> Result<ExportResponse> {
        let mut url = self.project_endpoint(project, &["export", format.as_str()])?;
        url.query_pairs_mut().append_pair("stage", stage.as_str());
        self.get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(HttpBackendConfig {
            base_url: base.to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_from_root() {
        let b = backend("http://localhost:8000");
        let url = b.endpoint(&["providers"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/providers");
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let b = backend("https://example.org/qgen/");
        let url = b.project_endpoint("support", &["tuples", "generated"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/qgen/api/projects/support/tuples/generated"
        );
    }

    #[test]
    fn test_project_name_is_percent_encoded() {
        let b = backend("http://localhost:8000");
        let url = b.project_endpoint("my project/v2", &[]).unwrap();
        assert_eq!(url.path(), "/api/projects/my%20project%2Fv2");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpBackend::new(HttpBackendConfig {
            base_url: "not a url".to_string(),
            timeout: Duration::from_secs(1),
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(error_detail(r#"{"detail": "Project not found"}"#), "Project not found");
        assert_eq!(
            error_detail(r#"{"detail": {"validation_errors": ["x"]}}"#),
            r#"{"validation_errors":["x"]}"#
        );
        assert_eq!(error_detail("Internal Server Error"), "Internal Server Error");
        assert_eq!(error_detail("  "), "no response body");
    }
}
