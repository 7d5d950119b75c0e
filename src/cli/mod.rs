//! Command-line workflow

pub mod orchestration;

pub use orchestration::{run_workflow, select_operation, WorkflowArgs, WorkflowResult};
