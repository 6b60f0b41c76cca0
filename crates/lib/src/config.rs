//! YAML configuration file.
//!
//! ```yaml
//! ssh:
//!   host: 127.0.0.1
//!   port: 2222
//!   user: vagrant
//! bindfs:
//!   default_options:
//!     perms: "u=rwX:g=rwD:o=rD"
//!   folders:
//!     - path: /vagrant/data
//!       bindpath: /mnt/data
//!       owner: alice
//! messages:
//!   binding: "Relocating shared folders..."
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::bind::{BindOrchestrator, BindSettings, FolderBinding};
use crate::consts::DEFAULT_TOOL;
use crate::messages::{Messages, UnknownMessageKey};
use crate::options::{OptionCatalog, OptionMap};
use crate::remote::SshConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid config: {0}")]
  Parse(#[from] serde_yaml::Error),

  #[error("folder {index} has an empty {field} path")]
  EmptyPath { index: usize, field: &'static str },

  #[error("invalid messages section: {0}")]
  UnknownMessageKey(#[from] UnknownMessageKey),
}

fn default_tool() -> String {
  DEFAULT_TOOL.to_string()
}

/// The `bindfs:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindfsConfig {
  #[serde(default = "default_tool")]
  pub tool: String,
  /// Global layer, merged above the catalog defaults.
  #[serde(default)]
  pub default_options: OptionMap,
  #[serde(default)]
  pub folders: Vec<FolderBinding>,
}

impl Default for BindfsConfig {
  fn default() -> Self {
    Self {
      tool: default_tool(),
      default_options: OptionMap::new(),
      folders: Vec::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  pub ssh: SshConfig,
  #[serde(default)]
  pub bindfs: BindfsConfig,
  /// Message template overrides by key.
  #[serde(default)]
  pub messages: IndexMap<String, String>,
}

impl Config {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_yaml_str(&text)
  }

  pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
    let config: Config = serde_yaml::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    for (index, folder) in self.bindfs.folders.iter().enumerate() {
      if folder.source.trim().is_empty() {
        return Err(ConfigError::EmptyPath { index, field: "source" });
      }
      if folder.target.trim().is_empty() {
        return Err(ConfigError::EmptyPath { index, field: "target" });
      }
    }
    self.build_messages()?;
    Ok(())
  }

  pub fn build_messages(&self) -> Result<Messages, UnknownMessageKey> {
    Messages::with_overrides(self.messages.iter().map(|(k, v)| (k.as_str(), v.clone())))
  }

  /// An orchestrator using the built-in catalog and this config's tool and
  /// messages.
  pub fn orchestrator(&self) -> Result<BindOrchestrator, ConfigError> {
    Ok(BindOrchestrator::new(
      OptionCatalog::bindfs(),
      self.build_messages()?,
      BindSettings {
        tool: self.bindfs.tool.clone(),
      },
    ))
  }
}
