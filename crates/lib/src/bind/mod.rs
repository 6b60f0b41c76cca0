//! Folder binding: types, command lines and the orchestrator that runs them.

pub mod command;
pub mod execute;
pub mod types;

pub use execute::{BindContext, BindOrchestrator, BindSettings};
pub use types::{BindReport, FolderBinding, FolderOutcome, FolderStatus, PlannedFolder, RunState};
