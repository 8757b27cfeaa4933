//! Operation surface exposed to the outer process.
//!
//! Every operation catches failures at the boundary and converts them into a
//! formatted status string; callers receive results, never errors. The
//! [`ForgeContext`] is passed explicitly to each call site; there is no
//! process-wide component registry.

use crate::config::Settings;
use crate::engine::WorkflowEngine;
use crate::executor::ExternalInputs;
use crate::generator::ServerGenerator;
use crate::guidance::GuidanceLibrary;
use mcpforge_core::{ForgeError, WorkflowStep};
use std::path::PathBuf;
use tracing::{error, info};

/// Shared components handed to each operation.
///
/// Mutating operations take `&mut self`; a concurrent host must serialize
/// access to the context.
#[derive(Debug)]
pub struct ForgeContext {
    /// Engine settings.
    pub settings: Settings,
    /// Workflow store and executor.
    pub engine: WorkflowEngine,
    /// Template catalog and project emission.
    pub generator: ServerGenerator,
    /// Built-in guidance content.
    pub guidance: GuidanceLibrary,
}

impl ForgeContext {
    /// Assembles a context from settings. Nothing touches disk until
    /// [`initialize`](Self::initialize).
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: WorkflowEngine::new(settings.workflow_dir.clone()),
            generator: ServerGenerator::new(settings.clone()),
            guidance: GuidanceLibrary::new(),
            settings,
        }
    }

    /// Creates configured directories, discovers templates, and loads
    /// persisted workflows.
    pub async fn initialize(&mut self) -> Result<(), ForgeError> {
        self.settings.ensure_dirs().await?;
        self.generator.initialize().await?;
        self.engine.initialize().await?;
        info!("mcpforge initialization complete");
        Ok(())
    }

    /// Drops in-memory state; storage on disk is untouched.
    pub fn cleanup(&mut self) {
        self.engine.cleanup();
        self.generator.cleanup();
        info!("mcpforge shut down");
    }
}

/// Creates a new MCP server project from a template.
pub async fn create_server(
    ctx: &ForgeContext,
    name: &str,
    description: &str,
    language: &str,
    template_type: &str,
    features: Vec<String>,
    output_dir: Option<PathBuf>,
) -> String {
    match ctx
        .generator
        .create_server(name, description, language, template_type, features, output_dir)
        .await
    {
        Ok(status) => {
            info!(%name, "create_server finished");
            status
        }
        Err(e) => {
            error!(%name, error = %e, "create_server failed");
            format!("❌ Error creating server: {e}")
        }
    }
}

/// Lists available templates, optionally filtered by language.
pub fn list_templates(ctx: &ForgeContext, language: Option<&str>) -> String {
    let templates = ctx.generator.catalog().list(language);
    if templates.is_empty() {
        return "No templates available".to_string();
    }

    let mut result = String::from("📋 Available Templates:\n\n");
    for (language, entries) in &templates {
        result.push_str(&format!("**{}:**\n", language.to_uppercase()));
        for template in entries {
            result.push_str(&format!("  • {}: {}\n", template.name, template.description));
        }
        result.push('\n');
    }
    result
}

/// Saves a creation workflow for reuse and reports its assigned id.
pub async fn save_workflow(
    ctx: &mut ForgeContext,
    name: &str,
    description: &str,
    steps: Vec<WorkflowStep>,
) -> String {
    match ctx.engine.save_workflow(name, description, steps).await {
        Ok(id) => format!("✅ Workflow '{name}' saved successfully (ID: {id})"),
        Err(e) => {
            error!(%name, error = %e, "save_workflow failed");
            format!("❌ Error saving workflow: {e}")
        }
    }
}

/// Lists stored workflows with summary information.
pub fn list_workflows(ctx: &ForgeContext) -> String {
    let workflows = ctx.engine.list_workflows();
    if workflows.is_empty() {
        return "No workflows saved".to_string();
    }

    let mut result = String::from("📋 Saved Workflows:\n\n");
    for (id, summary) in &workflows {
        result.push_str(&format!(
            "  • {id}: {} ({} steps) — {}\n",
            summary.name, summary.steps, summary.description
        ));
    }
    result
}

/// Executes a stored workflow and reports its step results.
pub async fn execute_workflow(ctx: &ForgeContext, id: &str, inputs: &ExternalInputs) -> String {
    match ctx.engine.execute(id, inputs).await {
        Ok(results) => {
            let mut ids: Vec<&str> = results.keys().map(|k| k.as_str()).collect();
            ids.sort_unstable();
            format!(
                "✅ Workflow '{id}' executed: {} steps completed ({})",
                results.len(),
                ids.join(", "),
            )
        }
        Err(e) => {
            error!(%id, error = %e, "execute_workflow failed");
            format!("❌ Error executing workflow: {e}")
        }
    }
}

/// Returns guidance for an MCP development topic.
pub fn get_guidance(ctx: &ForgeContext, topic: &str, server_type: &str) -> String {
    let content = ctx.guidance.get(topic);
    format!("🧠 AI Guidance - {topic} (for {server_type} servers):\n\n{content}")
}
