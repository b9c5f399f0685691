//! Read-only commands: projects, providers, status, tuples.

use super::OutputFormat;
use crate::api::Backend;
use crate::model::{dimension_columns, Stage};
use anyhow::{Context, Result};
use std::io::Write;

/// List projects, most recently modified first.
pub fn run_projects(backend: &dyn Backend, limit: Option<usize>, out: &mut impl Write) -> Result<()> {
    let projects = backend.projects(limit).context("failed to list projects")?;
    if projects.is_empty() {
        writeln!(out, "No projects found")?;
        return Ok(());
    }

    let width = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for project in &projects {
        writeln!(
            out,
            "{:<width$}  {:<24}  {} dimensions",
            project.name, project.domain, project.dimensions_count
        )?;
    }
    Ok(())
}

/// Show configured LLM providers.
pub fn run_providers(backend: &dyn Backend, out: &mut impl Write) -> Result<()> {
    let info = backend.providers().context("failed to load providers")?;
    if info.available.is_empty() {
        writeln!(out, "No providers configured")?;
        return Ok(());
    }
    for provider in &info.available {
        let marker = if info.auto_detected.as_deref() == Some(provider.as_str()) {
            " (auto-detected)"
        } else {
            ""
        };
        writeln!(out, "{provider}{marker}")?;
    }
    Ok(())
}

/// Print a project's status card.
pub fn run_status(
    backend: &dyn Backend,
    project: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let details = backend
        .project(project)
        .with_context(|| format!("failed to load project '{project}'"))?;

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &details)?;
        writeln!(out)?;
        return Ok(());
    }

    let status = details.data_status;
    writeln!(out, "{} ({})", details.name, details.domain)?;
    writeln!(out, "  Generated tuples:  {}", status.generated_tuples)?;
    writeln!(out, "  Approved tuples:   {}", status.approved_tuples)?;
    writeln!(out, "  Generated queries: {}", status.generated_queries)?;
    writeln!(out, "  Approved queries:  {}", status.approved_queries)?;
    if !details.dimensions.is_empty() {
        writeln!(out, "  Dimensions:")?;
        for dim in &details.dimensions {
            writeln!(out, "    {} ({} values)", dim.name, dim.values.len())?;
        }
    }
    Ok(())
}

/// Dump the tuples stored in one stage.
pub fn run_tuples(
    backend: &dyn Backend,
    project: &str,
    stage: Stage,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let tuples = backend
        .tuples(project, stage)
        .with_context(|| format!("failed to load {stage} tuples for '{project}'"))?;
    tracing::debug!("loaded {} {} tuples", tuples.len(), stage);

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &tuples)?;
        writeln!(out)?;
        return Ok(());
    }

    if tuples.is_empty() {
        writeln!(out, "No {stage} tuples")?;
        return Ok(());
    }

    let columns = dimension_columns(&tuples);
    writeln!(out, "{}", columns.join("\t"))?;
    for tuple in &tuples {
        let row: Vec<&str> = columns
            .iter()
            .map(|c| tuple.get(c).unwrap_or(""))
            .collect();
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}
