//! Layered option merging.

use serde::Serialize;

use super::catalog::OptionCatalog;
use super::value::{OptionMap, OptionValue};

/// Fully merged, folder-specific option set used to build one command.
///
/// Layers, in increasing precedence: catalog defaults, global defaults,
/// per-folder overrides. The merge is shallow: a later layer replaces a
/// same-named key outright, including with `Null` or `false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct EffectiveOptions(OptionMap);

impl EffectiveOptions {
  pub fn merge(catalog: &OptionCatalog, global: &OptionMap, folder: &OptionMap) -> Self {
    let mut merged = catalog.defaults();
    overlay(&mut merged, global);
    overlay(&mut merged, folder);
    Self(merged)
  }

  pub fn get(&self, name: &str) -> Option<&OptionValue> {
    self.0.get(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn into_inner(self) -> OptionMap {
    self.0
  }
}

fn overlay(base: &mut OptionMap, layer: &OptionMap) {
  for (key, value) in layer {
    base.insert(key.clone(), value.clone());
  }
}
