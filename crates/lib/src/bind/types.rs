//! Bind types.
//!
//! A [`FolderBinding`] is one requested remapping of a guest directory. A run
//! over a list of bindings produces a [`BindReport`] with one
//! [`FolderOutcome`] per folder that was attempted.

use serde::{Deserialize, Serialize};

use crate::options::{EffectiveOptions, OptionMap};
use crate::remote::RemoteCommand;

/// One requested remapping.
///
/// In config files the paths may be spelled `path`/`bindpath`. Every other
/// key of the entry is an option override for this folder, so the paths
/// themselves never reach the option map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderBinding {
  /// Existing directory on the guest.
  #[serde(alias = "path")]
  pub source: String,
  /// Mount point on the guest, created if absent.
  #[serde(alias = "bindpath")]
  pub target: String,
  #[serde(flatten)]
  pub options: OptionMap,
}

impl FolderBinding {
  pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
      options: OptionMap::new(),
    }
  }

  pub fn with_option(mut self, name: &str, value: impl Into<crate::options::OptionValue>) -> Self {
    self.options.insert(name.to_string(), value.into());
    self
  }
}

/// Phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
  NotStarted,
  Probing,
  /// The bind utility was missing; no folder was attempted.
  Aborted,
  Binding,
  Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FolderStatus {
  /// The mount command succeeded. `command` is the line that was issued.
  Bound { command: String },
  Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderOutcome {
  pub source: String,
  pub target: String,
  #[serde(flatten)]
  pub status: FolderStatus,
}

impl FolderOutcome {
  pub fn is_bound(&self) -> bool {
    matches!(self.status, FolderStatus::Bound { .. })
  }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindReport {
  pub state: RunState,
  pub folders: Vec<FolderOutcome>,
}

impl BindReport {
  pub fn bound_count(&self) -> usize {
    self.folders.iter().filter(|f| f.is_bound()).count()
  }

  pub fn failed_count(&self) -> usize {
    self.folders.len() - self.bound_count()
  }

  /// True when the run finished and every folder was bound.
  pub fn is_clean(&self) -> bool {
    self.state == RunState::Done && self.failed_count() == 0
  }
}

/// Commands a run would issue for one folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedFolder {
  pub source: String,
  pub target: String,
  pub options: EffectiveOptions,
  pub commands: Vec<RemoteCommand>,
}
