//! CLI command handlers for colorgrid.
//!
//! This module provides headless, scriptable access to the planner and
//! renderers for automation, testing, and batch use.

pub mod common;
pub mod config;
pub mod generate;
pub mod plan;
pub mod preview;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ColorArgs, GridArgs};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use plan::PlanArgs;
pub use preview::PreviewArgs;
