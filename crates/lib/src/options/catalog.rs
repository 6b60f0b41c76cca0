//! Static knowledge about the bind utility's command-line options.
//!
//! Options come in two disjoint kinds: valued options render as
//! `--name=value`, flags render as a bare `--name`. Catalog membership is what
//! decides the rendering, never the runtime type of a value.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::value::{OptionMap, OptionValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
  /// Switch whose presence toggles behavior.
  Flag,
  /// Switch that requires `=value`.
  Valued,
}

impl OptionKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      OptionKind::Flag => "flag",
      OptionKind::Valued => "valued",
    }
  }
}

impl fmt::Display for OptionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

/// Result of looking a key up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionClass {
  Flag,
  Valued,
  Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
  pub name: String,
  pub kind: OptionKind,
  pub default: OptionValue,
}

impl OptionSpec {
  pub fn valued(name: &str, default: impl Into<OptionValue>) -> Self {
    Self {
      name: name.to_string(),
      kind: OptionKind::Valued,
      default: default.into(),
    }
  }

  pub fn flag(name: &str) -> Self {
    Self {
      name: name.to_string(),
      kind: OptionKind::Flag,
      default: OptionValue::Bool(false),
    }
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
  #[error("option declared twice in catalog: {0}")]
  Duplicate(String),
}

const VALUED_DEFAULTS: &[(&str, Option<&str>)] = &[
  ("owner", Some("vagrant")),
  ("group", Some("vagrant")),
  ("perms", Some("u=rwX:g=rD:o=rD")),
  ("mirror", None),
  ("mirror-only", None),
  ("create-for-user", None),
  ("create-for-group", None),
  ("create-with-perms", None),
];

const FLAGS: &[&str] = &[
  "no-allow-other",
  "create-as-user",
  "create-as-mounter",
  "chown-normal",
  "chown-ignore",
  "chown-deny",
  "chgrp-normal",
  "chgrp-ignore",
  "chgrp-deny",
  "chmod-normal",
  "chmod-ignore",
  "chmod-deny",
  "chmod-allow-x",
  "xattr-none",
  "xattr-ro",
  "xattr-rw",
  "ctime-from-mtime",
];

/// Immutable option table, injected into the orchestrator at construction.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
  specs: Vec<OptionSpec>,
  index: HashMap<String, usize>,
}

impl OptionCatalog {
  /// Build a catalog from an ordered list of specs.
  pub fn new(specs: Vec<OptionSpec>) -> Result<Self, CatalogError> {
    let mut index = HashMap::with_capacity(specs.len());
    for (idx, spec) in specs.iter().enumerate() {
      if index.insert(spec.name.clone(), idx).is_some() {
        return Err(CatalogError::Duplicate(spec.name.clone()));
      }
    }
    Ok(Self { specs, index })
  }

  /// The built-in bindfs catalog: valued options first, then flags.
  pub fn bindfs() -> Self {
    let specs = VALUED_DEFAULTS
      .iter()
      .map(|(name, default)| OptionSpec::valued(name, *default))
      .chain(FLAGS.iter().map(|name| OptionSpec::flag(name)))
      .collect();
    // The tables above are disjoint and duplicate-free.
    Self::new(specs).unwrap_or_else(|_| unreachable!("built-in catalog has duplicate names"))
  }

  pub fn classify(&self, name: &str) -> OptionClass {
    match self.get(name).map(|spec| spec.kind) {
      Some(OptionKind::Flag) => OptionClass::Flag,
      Some(OptionKind::Valued) => OptionClass::Valued,
      None => OptionClass::Unknown,
    }
  }

  /// Kind used when rendering. Keys outside the catalog render as valued
  /// options so undocumented switches still reach the tool.
  pub fn kind_for_render(&self, name: &str) -> OptionKind {
    match self.classify(name) {
      OptionClass::Flag => OptionKind::Flag,
      OptionClass::Valued | OptionClass::Unknown => OptionKind::Valued,
    }
  }

  pub fn get(&self, name: &str) -> Option<&OptionSpec> {
    self.index.get(name).map(|&idx| &self.specs[idx])
  }

  /// Catalog defaults in declaration order.
  pub fn defaults(&self) -> OptionMap {
    self
      .specs
      .iter()
      .map(|spec| (spec.name.clone(), spec.default.clone()))
      .collect()
  }

  pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
    self.specs.iter()
  }

  pub fn len(&self) -> usize {
    self.specs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.specs.is_empty()
  }
}

impl Default for OptionCatalog {
  fn default() -> Self {
    Self::bindfs()
  }
}
