//! MCP server scaffolding engine with reusable creation workflows.
//!
//! Given a name, description, target language, template category, and a set
//! of capability flags, mcpforge materializes a skeleton MCP server project
//! on disk from a library of parameterized templates. Named sequences of
//! generation steps can be saved as workflows and replayed through a
//! dependency-gated step executor.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcpforge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ForgeError> {
//!     let mut ctx = ForgeContext::new(Settings::from_env());
//!     ctx.initialize().await?;
//!
//!     let status = ops::create_server(
//!         &ctx,
//!         "weather server",
//!         "Fetches weather data",
//!         "python",
//!         "basic",
//!         vec!["tools".to_string()],
//!         None,
//!     )
//!     .await;
//!     println!("{status}");
//!     Ok(())
//! }
//! ```

mod catalog;
mod config;
mod engine;
mod executor;
mod generator;
mod guidance;
mod ops;
mod store;

// Re-export core types
pub use mcpforge_core::*;

pub use catalog::{Template, TemplateCatalog, TemplateInfo, TemplateMetadata};
pub use config::Settings;
pub use engine::WorkflowEngine;
pub use executor::{execute, ExecutionResults, ExternalInputs};
pub use generator::{ServerGenerator, CLIENT_CONFIG_FILE};
pub use guidance::GuidanceLibrary;
pub use ops::ForgeContext;
pub use store::{WorkflowStore, EXAMPLE_WORKFLOW_ID};

/// Operation surface exposed to the outer process.
pub mod operations {
    pub use crate::ops::{
        create_server, execute_workflow, get_guidance, list_templates, list_workflows,
        save_workflow,
    };
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::operations as ops;
    pub use crate::{
        execute, ExecutionResults, ExternalInputs, ForgeContext, ForgeError, ServerSpec, Settings,
        StepId, StepKind, TemplateCatalog, Workflow, WorkflowEngine, WorkflowStep, WorkflowStore,
        WorkflowSummary, EXAMPLE_WORKFLOW_ID,
    };
}
