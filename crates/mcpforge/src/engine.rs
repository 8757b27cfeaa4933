//! Workflow engine: store plus dependency-gated execution.

use crate::executor::{self, ExecutionResults, ExternalInputs};
use crate::store::WorkflowStore;
use mcpforge_core::{ForgeError, Workflow, WorkflowStep, WorkflowSummary};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Manages named workflows and runs them on demand.
pub struct WorkflowEngine {
    store: WorkflowStore,
}

impl WorkflowEngine {
    /// Creates an engine persisting workflows under the given directory.
    pub fn new(workflow_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: WorkflowStore::new(workflow_dir),
        }
    }

    /// Loads persisted workflows and seeds the example on first run.
    pub async fn initialize(&mut self) -> Result<(), ForgeError> {
        self.store.initialize().await
    }

    /// Saves a workflow and returns its store-assigned id.
    pub async fn save_workflow(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<WorkflowStep>,
    ) -> Result<String, ForgeError> {
        self.store.save(name, description, steps).await
    }

    /// Returns the workflow with the given id, if present.
    pub fn get_workflow(&self, id: &str) -> Option<&Workflow> {
        self.store.get(id)
    }

    /// Summary view over all stored workflows.
    pub fn list_workflows(&self) -> BTreeMap<String, WorkflowSummary> {
        self.store.list()
    }

    /// Executes the workflow with the given id against the supplied inputs.
    ///
    /// Fails with [`ForgeError::WorkflowNotFound`] for an unknown id and
    /// with [`ForgeError::UnsatisfiableDependency`] when steps can never
    /// become ready.
    pub async fn execute(
        &self,
        id: &str,
        inputs: &ExternalInputs,
    ) -> Result<ExecutionResults, ForgeError> {
        let workflow = self
            .store
            .get(id)
            .ok_or_else(|| ForgeError::WorkflowNotFound(id.to_string()))?;
        executor::execute(workflow, inputs)
    }

    /// Drops in-memory state; persisted records are untouched.
    pub fn cleanup(&mut self) {
        self.store.cleanup();
    }
}

impl std::fmt::Debug for WorkflowEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowEngine")
            .field("store", &self.store)
            .finish()
    }
}
