//! Dependency-gated step execution.
//!
//! Steps move `Pending -> Ready -> Executed` within one run. A step is ready
//! when every id in its dependency set has executed. Scheduling is a
//! ready-queue fixpoint: the remaining steps are rescanned in declared order
//! after every execution, so a step may be declared before its dependency.
//! Steps that never become ready (cycles, dangling or misspelled ids) fail
//! the run with [`ForgeError::UnsatisfiableDependency`] naming them.

use mcpforge_core::{ForgeError, StepId, StepKind, Workflow, WorkflowStep};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Externally supplied inputs, keyed by step id.
pub type ExternalInputs = HashMap<String, Value>;

/// Per-run results, keyed by step id. Ephemeral; discarded once consumed.
pub type ExecutionResults = HashMap<StepId, Value>;

/// Executes every step of the workflow, threading prior results forward.
///
/// Declaration order is the tie-break among simultaneously ready steps. The
/// workflow itself is never mutated and no I/O happens inside the run.
pub fn execute(workflow: &Workflow, inputs: &ExternalInputs) -> Result<ExecutionResults, ForgeError> {
    let mut results = ExecutionResults::new();
    let mut completed: HashSet<StepId> = HashSet::new();
    let mut remaining: Vec<&WorkflowStep> = workflow.steps.iter().collect();

    while !remaining.is_empty() {
        let ready = remaining.iter().position(|step| {
            step.dependencies
                .iter()
                .all(|dep| completed.contains(dep.as_str()))
        });

        match ready {
            Some(index) => {
                let step = remaining.remove(index);
                info!(step = %step.id, kind = %step.kind, "executing step");
                let value = dispatch(step, inputs, &results);
                completed.insert(step.id.clone());
                results.insert(step.id.clone(), value);
            }
            None => {
                let leftover: Vec<StepId> = remaining.iter().map(|s| s.id.clone()).collect();
                warn!(
                    workflow = %workflow.name,
                    steps = ?leftover.iter().map(StepId::as_str).collect::<Vec<_>>(),
                    "steps with unsatisfiable dependencies"
                );
                return Err(ForgeError::UnsatisfiableDependency { steps: leftover });
            }
        }
    }

    Ok(results)
}

/// Pure per-step dispatch over the closed kind set.
///
/// Never fails: unrecognized kinds yield a generic marker. `prior` carries
/// the results of already-executed steps; no current kind consumes it, but it
/// is part of the dispatch contract.
fn dispatch(step: &WorkflowStep, inputs: &ExternalInputs, _prior: &ExecutionResults) -> Value {
    match &step.kind {
        StepKind::Input => inputs
            .get(step.id.as_str())
            .or_else(|| step.config.get("default"))
            .cloned()
            .unwrap_or(Value::Null),
        StepKind::TemplateSelection => step
            .config
            .get("template")
            .cloned()
            .unwrap_or_else(|| Value::String("basic".to_string())),
        StepKind::AiGuidance => Value::String("AI guidance placeholder".to_string()),
        StepKind::Generation => Value::String("Generation complete".to_string()),
        StepKind::Other(_) => Value::String(format!("Step {} executed", step.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workflow_of(steps: Vec<WorkflowStep>) -> Workflow {
        Workflow::new("test", "test workflow", steps)
    }

    #[test]
    fn test_declared_order_chain() {
        let workflow = workflow_of(vec![
            WorkflowStep::new("a", StepKind::Input),
            WorkflowStep::new("b", StepKind::AiGuidance).depends_on("a"),
            WorkflowStep::new("c", StepKind::Generation).depends_on("b"),
        ]);

        let results = execute(&workflow, &ExternalInputs::new()).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.contains_key("a"));
        assert!(results.contains_key("b"));
        assert!(results.contains_key("c"));
    }

    #[test]
    fn test_forward_reference_executes() {
        // b is declared before the step it depends on; the fixpoint scan
        // still reaches both.
        let workflow = workflow_of(vec![
            WorkflowStep::new("b", StepKind::Generation).depends_on("a"),
            WorkflowStep::new("a", StepKind::Input),
        ]);

        let results = execute(&workflow, &ExternalInputs::new()).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.contains_key("b"));
    }

    #[test]
    fn test_dangling_dependency_reported() {
        let workflow = workflow_of(vec![
            WorkflowStep::new("a", StepKind::Input),
            WorkflowStep::new("b", StepKind::Generation).depends_on("nope"),
        ]);

        let err = execute(&workflow, &ExternalInputs::new()).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::UnsatisfiableDependency { ref steps } if *steps == vec![StepId::new("b")]
        ));
    }

    #[test]
    fn test_cycle_reported() {
        let workflow = workflow_of(vec![
            WorkflowStep::new("a", StepKind::Input).depends_on("b"),
            WorkflowStep::new("b", StepKind::Input).depends_on("a"),
        ]);

        let err = execute(&workflow, &ExternalInputs::new()).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::UnsatisfiableDependency { ref steps } if steps.len() == 2
        ));
    }

    #[test]
    fn test_input_step_prefers_external_input() {
        let workflow = workflow_of(vec![WorkflowStep::new("name", StepKind::Input)
            .with_config("default", json!("fallback"))]);

        let mut inputs = ExternalInputs::new();
        inputs.insert("name".to_string(), json!("supplied"));

        let results = execute(&workflow, &inputs).unwrap();
        assert_eq!(results["name"], json!("supplied"));
    }

    #[test]
    fn test_input_step_falls_back_to_default() {
        let workflow = workflow_of(vec![WorkflowStep::new("name", StepKind::Input)
            .with_config("default", json!("fallback"))]);

        let results = execute(&workflow, &ExternalInputs::new()).unwrap();
        assert_eq!(results["name"], json!("fallback"));
    }

    #[test]
    fn test_input_step_without_default_is_null() {
        let workflow = workflow_of(vec![WorkflowStep::new("name", StepKind::Input)]);
        let results = execute(&workflow, &ExternalInputs::new()).unwrap();
        assert_eq!(results["name"], Value::Null);
    }

    #[test]
    fn test_template_selection_default() {
        let workflow = workflow_of(vec![WorkflowStep::new(
            "pick",
            StepKind::TemplateSelection,
        )]);
        let results = execute(&workflow, &ExternalInputs::new()).unwrap();
        assert_eq!(results["pick"], json!("basic"));
    }

    #[test]
    fn test_unknown_kind_never_fails() {
        let workflow = workflow_of(vec![WorkflowStep::new(
            "deploy",
            StepKind::Other("deploy".to_string()),
        )]);
        let results = execute(&workflow, &ExternalInputs::new()).unwrap();
        assert_eq!(results["deploy"], json!("Step deploy executed"));
    }
}
