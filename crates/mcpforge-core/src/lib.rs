//! Core types for the mcpforge scaffolding engine.
//!
//! This crate provides the data model and pure validation logic without
//! runtime dependencies. The engine crate (`mcpforge`) builds the executor,
//! store, and generation orchestrator on top of it.
//!
//! # Core Types
//!
//! - [`WorkflowStep`] - one unit of work, tagged by [`StepKind`], carrying
//!   configuration and a dependency set
//! - [`Workflow`] - a named, ordered collection of steps
//! - [`ServerSpec`] - a validated server generation request
//! - [`ForgeError`] - error taxonomy for validation, execution, and
//!   persistence

mod error;
mod spec;
mod step;
mod workflow;

pub use error::ForgeError;
pub use spec::{normalize_identifier, ServerSpec};
pub use step::{StepId, StepKind, WorkflowStep};
pub use workflow::{Workflow, WorkflowSummary};
