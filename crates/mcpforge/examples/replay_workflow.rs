//! Save and replay a creation workflow.
//!
//! Demonstrates the dependency-gated executor: the store seeds an example
//! workflow on first run, a custom workflow is saved alongside it, and both
//! are executed with external inputs.

use mcpforge::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), ForgeError> {
    tracing_subscriber::fmt::init();

    let root = std::env::temp_dir().join("mcpforge_workflow_demo");
    let mut engine = WorkflowEngine::new(root.join("workflows"));
    engine.initialize().await?;

    // The example workflow is seeded on first run.
    let mut inputs = ExternalInputs::new();
    inputs.insert(
        "collect_info".to_string(),
        json!({"name": "weather", "description": "Weather data"}),
    );
    let results = engine.execute(EXAMPLE_WORKFLOW_ID, &inputs).await?;
    println!("example workflow results:");
    for (id, value) in &results {
        println!("  {id} -> {value}");
    }

    // Steps may be declared in any order; the executor resolves dependencies.
    let id = engine
        .save_workflow(
            "Docs then code",
            "Generate after guidance, regardless of declaration order",
            vec![
                WorkflowStep::new("generate", StepKind::Generation).depends_on("guide"),
                WorkflowStep::new("guide", StepKind::AiGuidance),
            ],
        )
        .await?;

    let results = engine.execute(&id, &ExternalInputs::new()).await?;
    println!("custom workflow ({id}) results:");
    for (step_id, value) in &results {
        println!("  {step_id} -> {value}");
    }

    Ok(())
}
