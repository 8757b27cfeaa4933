//! Error taxonomy for the scaffolding engine.

use crate::step::StepId;
use thiserror::Error;

fn join_step_ids(steps: &[StepId]) -> String {
    steps
        .iter()
        .map(StepId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors surfaced by validation, execution, and persistence.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ForgeError {
    /// The requested server name could not be repaired into an identifier.
    #[error("invalid server specification: {0}")]
    InvalidSpecification(String),

    /// No template is registered under the requested language/category key.
    #[error("template '{template_type}' not found for language '{language}'")]
    TemplateNotFound {
        /// Target language of the lookup.
        language: String,
        /// Template category of the lookup.
        template_type: String,
    },

    /// The workflow id is not present in the store.
    #[error("workflow not found: {0}")]
    WorkflowNotFound(String),

    /// Steps whose dependency sets can never be satisfied (cycle, dangling
    /// id, or a misspelled reference).
    #[error("unsatisfiable dependencies for steps: {}", join_step_ids(.steps))]
    UnsatisfiableDependency {
        /// Ids of the steps left unexecuted.
        steps: Vec<StepId>,
    },

    /// A persisted workflow record failed to parse.
    #[error("corrupt workflow record at {path}: {details}")]
    Corrupt {
        /// Path of the offending record.
        path: String,
        /// Parser diagnostics.
        details: String,
    },

    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(String),

    /// An underlying filesystem operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_not_found_display() {
        let error = ForgeError::WorkflowNotFound("abc123".to_string());
        assert_eq!(error.to_string(), "workflow not found: abc123");
    }

    #[test]
    fn test_unsatisfiable_dependency_display() {
        let error = ForgeError::UnsatisfiableDependency {
            steps: vec![StepId::new("b"), StepId::new("c")],
        };
        assert_eq!(
            error.to_string(),
            "unsatisfiable dependencies for steps: b, c"
        );
    }

    #[test]
    fn test_template_not_found_display() {
        let error = ForgeError::TemplateNotFound {
            language: "python".to_string(),
            template_type: "quantum".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "template 'quantum' not found for language 'python'"
        );
    }
}
