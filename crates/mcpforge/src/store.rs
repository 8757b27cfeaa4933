//! Durable workflow storage, one JSON record per workflow.

use mcpforge_core::{ForgeError, StepKind, Workflow, WorkflowStep, WorkflowSummary};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

/// Id of the workflow seeded into an empty store.
pub const EXAMPLE_WORKFLOW_ID: &str = "example_basic";

/// In-memory workflow catalog backed by a directory of JSON records.
///
/// The store itself is not thread-safe: mutations take `&mut self`, and a
/// concurrent host must serialize access behind its own mutex or actor
/// boundary.
pub struct WorkflowStore {
    dir: PathBuf,
    workflows: HashMap<String, Workflow>,
}

impl WorkflowStore {
    /// Creates a store rooted at the given directory. Nothing is read until
    /// [`initialize`](Self::initialize).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            workflows: HashMap::new(),
        }
    }

    /// Loads every persisted record, skipping corrupt files, then seeds the
    /// fixed example workflow if the store is still empty.
    pub async fn initialize(&mut self) -> Result<(), ForgeError> {
        fs::create_dir_all(&self.dir).await?;
        self.load_all().await?;

        if self.workflows.is_empty() {
            let example = example_workflow();
            self.persist(EXAMPLE_WORKFLOW_ID, &example).await?;
            self.workflows
                .insert(EXAMPLE_WORKFLOW_ID.to_string(), example);
        }

        info!(count = self.workflows.len(), "workflow store initialized");
        Ok(())
    }

    /// Saves a new workflow, assigning a fresh short id. The record is
    /// durably written before the id is returned.
    pub async fn save(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<WorkflowStep>,
    ) -> Result<String, ForgeError> {
        let id = short_id();
        let workflow = Workflow::new(name, description, steps);

        self.persist(&id, &workflow).await?;
        info!(%id, name = %workflow.name, "saved workflow");
        self.workflows.insert(id.clone(), workflow);
        Ok(id)
    }

    /// Returns the workflow with the given id, if loaded.
    pub fn get(&self, id: &str) -> Option<&Workflow> {
        self.workflows.get(id)
    }

    /// Summary view over every loaded workflow, ordered by id.
    pub fn list(&self) -> BTreeMap<String, WorkflowSummary> {
        self.workflows
            .iter()
            .map(|(id, workflow)| (id.clone(), workflow.summary()))
            .collect()
    }

    /// Number of loaded workflows.
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Returns `true` if no workflows are loaded.
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }

    /// Drops the in-memory mapping. Records on disk are untouched.
    pub fn cleanup(&mut self) {
        self.workflows.clear();
        info!("workflow store cleaned up");
    }

    async fn load_all(&mut self) -> Result<(), ForgeError> {
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match read_record(&path).await {
                Ok(workflow) => {
                    self.workflows.insert(id.to_string(), workflow);
                }
                Err(e) => {
                    // One corrupt record must not block the rest of the load.
                    warn!(path = %path.display(), error = %e, "skipping corrupt workflow record");
                }
            }
        }

        Ok(())
    }

    async fn persist(&self, id: &str, workflow: &Workflow) -> Result<(), ForgeError> {
        let content = serde_json::to_string_pretty(workflow)?;
        fs::write(self.dir.join(format!("{id}.json")), content).await?;
        Ok(())
    }
}

impl std::fmt::Debug for WorkflowStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowStore")
            .field("dir", &self.dir)
            .field("workflows", &self.workflows.keys().collect::<Vec<_>>())
            .finish()
    }
}

async fn read_record(path: &Path) -> Result<Workflow, ForgeError> {
    let content = fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| ForgeError::Corrupt {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// The three-step example seeded on first run: collect input, select a
/// template, generate.
fn example_workflow() -> Workflow {
    Workflow::new(
        "Basic MCP Server",
        "Create a basic MCP server with tools and resources",
        vec![
            WorkflowStep::new("collect_info", StepKind::Input)
                .with_config("fields", json!(["name", "description", "features"]))
                .with_config("required", json!(["name", "description"])),
            WorkflowStep::new("select_template", StepKind::TemplateSelection)
                .with_config("template", json!("python:basic"))
                .depends_on("collect_info"),
            WorkflowStep::new("generate_server", StepKind::Generation)
                .with_config("language", json!("python"))
                .depends_on("collect_info")
                .depends_on("select_template"),
        ],
    )
}
