//! Workflow records and summary views.

use crate::step::{StepId, WorkflowStep};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_version() -> String {
    "1.0.0".to_string()
}

/// A named, ordered collection of steps describing a repeatable creation
/// procedure.
///
/// Step order is the declaration/tie-break order for execution. The record
/// round-trips losslessly through JSON; `created_at` is stamped once at
/// construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Display name, not used for identity.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Ordered step sequence.
    pub steps: Vec<WorkflowStep>,
    /// Informational semantic-version-like string.
    #[serde(default = "default_version")]
    pub version: String,
    /// Construction timestamp (ISO-8601 on the wire).
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Free-form metadata, opaque to the engine.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Workflow {
    /// Creates a workflow, stamping `created_at` now.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<WorkflowStep>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            steps,
            version: default_version(),
            created_at: Utc::now(),
            metadata: Map::new(),
        }
    }

    /// Returns the step with the given id, if present.
    pub fn step(&self, id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id.as_str() == id)
    }

    /// Returns `true` if a step with the given id exists.
    pub fn has_step(&self, id: &str) -> bool {
        self.step(id).is_some()
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if every declared dependency references an existing
    /// step id.
    pub fn dependencies_resolve(&self) -> bool {
        self.steps
            .iter()
            .flat_map(|s| s.dependencies.iter())
            .all(|dep: &StepId| self.has_step(dep.as_str()))
    }

    /// Produces the summary view used by store listings.
    pub fn summary(&self) -> WorkflowSummary {
        WorkflowSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            steps: self.steps.len(),
        }
    }
}

/// Summary of a stored workflow, as returned by listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowSummary {
    /// Workflow name.
    pub name: String,
    /// Workflow description.
    pub description: String,
    /// Construction timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of steps.
    pub steps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;
    use serde_json::json;

    fn sample_workflow() -> Workflow {
        Workflow::new(
            "Basic MCP Server",
            "Create a basic MCP server",
            vec![
                WorkflowStep::new("collect_info", StepKind::Input)
                    .with_config("required", json!(["name", "description"])),
                WorkflowStep::new("select_template", StepKind::TemplateSelection)
                    .with_config("template", json!("python:basic"))
                    .depends_on("collect_info"),
            ],
        )
    }

    #[test]
    fn test_json_round_trip() {
        let workflow = sample_workflow();
        let encoded = serde_json::to_string_pretty(&workflow).unwrap();
        let decoded: Workflow = serde_json::from_str(&encoded).unwrap();
        assert_eq!(workflow, decoded);
    }

    #[test]
    fn test_wire_defaults() {
        let decoded: Workflow = serde_json::from_value(json!({
            "name": "n",
            "description": "d",
            "steps": [],
        }))
        .unwrap();
        assert_eq!(decoded.version, "1.0.0");
        assert!(decoded.metadata.is_empty());
    }

    #[test]
    fn test_step_lookup() {
        let workflow = sample_workflow();
        assert!(workflow.has_step("collect_info"));
        assert!(!workflow.has_step("missing"));
        assert_eq!(workflow.step_count(), 2);
    }

    #[test]
    fn test_dependencies_resolve() {
        let mut workflow = sample_workflow();
        assert!(workflow.dependencies_resolve());

        workflow.steps[1].dependencies.push("ghost".into());
        assert!(!workflow.dependencies_resolve());
    }

    #[test]
    fn test_summary() {
        let workflow = sample_workflow();
        let summary = workflow.summary();
        assert_eq!(summary.name, "Basic MCP Server");
        assert_eq!(summary.steps, 2);
        assert_eq!(summary.created_at, workflow.created_at);
    }
}
