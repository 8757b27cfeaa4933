//! Workflow step data model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Type-safe step identifier wrapper.
///
/// Unique within its owning [`Workflow`](crate::Workflow); uniqueness is the
/// responsibility of the caller assembling the step collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Creates a new StepId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StepId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StepId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of work a step performs.
///
/// Serialized as the plain string tag the persisted record uses (`input`,
/// `ai_guidance`, `template_selection`, `generation`). Unrecognized tags
/// round-trip losslessly through [`StepKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepKind {
    /// Pull a value from the externally supplied inputs.
    Input,
    /// Deterministic guidance stub.
    AiGuidance,
    /// Select a template key from the step configuration.
    TemplateSelection,
    /// Marker step for project generation.
    Generation,
    /// Any tag the engine does not interpret specially.
    Other(String),
}

impl StepKind {
    /// Returns the wire tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            StepKind::Input => "input",
            StepKind::AiGuidance => "ai_guidance",
            StepKind::TemplateSelection => "template_selection",
            StepKind::Generation => "generation",
            StepKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for StepKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "input" => StepKind::Input,
            "ai_guidance" => StepKind::AiGuidance,
            "template_selection" => StepKind::TemplateSelection,
            "generation" => StepKind::Generation,
            _ => StepKind::Other(tag),
        }
    }
}

impl From<StepKind> for String {
    fn from(kind: StepKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One unit of work within a workflow.
///
/// The wire field for [`kind`](WorkflowStep::kind) is `type`, matching the
/// persisted record format. `config` and `dependencies` default to empty when
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Identifier, unique within the owning workflow.
    pub id: StepId,
    /// Step kind tag.
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// Configuration interpreted according to the kind.
    #[serde(default)]
    pub config: Map<String, Value>,
    /// Ids of steps that must complete before this one runs.
    #[serde(default)]
    pub dependencies: Vec<StepId>,
}

impl WorkflowStep {
    /// Creates a step with empty configuration and no dependencies.
    pub fn new(id: impl Into<StepId>, kind: StepKind) -> Self {
        Self {
            id: id.into(),
            kind,
            config: Map::new(),
            dependencies: Vec::new(),
        }
    }

    /// Adds a configuration entry.
    pub fn with_config(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }

    /// Declares a dependency on another step.
    pub fn depends_on(mut self, id: impl Into<StepId>) -> Self {
        self.dependencies.push(id.into());
        self
    }
}
