//! Option values as they appear in config layers.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered option mapping.
///
/// Re-inserting a key replaces its value in place, so merged maps keep the
/// position a key had in the earliest layer that declared it.
pub type OptionMap = IndexMap<String, OptionValue>;

/// A single option value.
///
/// `Null` is meaningful: at the highest-precedence layer it suppresses a
/// valued option that a lower layer had set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
  #[default]
  Null,
  Bool(bool),
  Int(i64),
  Text(String),
}

impl OptionValue {
  pub fn is_null(&self) -> bool {
    matches!(self, OptionValue::Null)
  }

  /// Everything except `Null` and `false` turns a flag on.
  pub fn is_truthy(&self) -> bool {
    !matches!(self, OptionValue::Null | OptionValue::Bool(false))
  }
}

impl fmt::Display for OptionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OptionValue::Null => Ok(()),
      OptionValue::Bool(b) => write!(f, "{}", b),
      OptionValue::Int(n) => write!(f, "{}", n),
      OptionValue::Text(s) => f.write_str(s),
    }
  }
}

impl From<&str> for OptionValue {
  fn from(value: &str) -> Self {
    OptionValue::Text(value.to_string())
  }
}

impl From<String> for OptionValue {
  fn from(value: String) -> Self {
    OptionValue::Text(value)
  }
}

impl From<bool> for OptionValue {
  fn from(value: bool) -> Self {
    OptionValue::Bool(value)
  }
}

impl From<i64> for OptionValue {
  fn from(value: i64) -> Self {
    OptionValue::Int(value)
  }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
  fn from(value: Option<T>) -> Self {
    value.map(Into::into).unwrap_or(OptionValue::Null)
  }
}
