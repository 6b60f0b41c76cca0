//! Keyed console messages.
//!
//! Message text is looked up by [`MessageKey`] and formatted with `{name}`
//! placeholders. English text is built in; any key can be overridden from the
//! config file.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
  /// The bind utility is missing on the guest. Args: `tool`.
  ToolNotInstalled,
  /// Binding is about to start.
  Binding,
  /// One folder was bound. Args: `source`, `target`.
  BindingEntry,
  /// A folder's commands failed. Args: `tool`, `source`, `target`.
  CommandFailed,
}

impl MessageKey {
  pub const ALL: [MessageKey; 4] = [
    MessageKey::ToolNotInstalled,
    MessageKey::Binding,
    MessageKey::BindingEntry,
    MessageKey::CommandFailed,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MessageKey::ToolNotInstalled => "tool_not_installed",
      MessageKey::Binding => "binding",
      MessageKey::BindingEntry => "binding_entry",
      MessageKey::CommandFailed => "command_failed",
    }
  }

  fn default_template(&self) -> &'static str {
    match self {
      MessageKey::ToolNotInstalled => "{tool} is not installed on the guest machine",
      MessageKey::Binding => "Creating bind mounts for selected folders...",
      MessageKey::BindingEntry => "{source} => {target}",
      MessageKey::CommandFailed => "{tool} command failed for {source} => {target}",
    }
  }
}

impl fmt::Display for MessageKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown message key: {0}")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
  type Err = UnknownMessageKey;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    MessageKey::ALL
      .into_iter()
      .find(|key| key.as_str() == s)
      .ok_or_else(|| UnknownMessageKey(s.to_string()))
  }
}

/// Message templates, keyed.
#[derive(Debug, Clone, Default)]
pub struct Messages {
  overrides: HashMap<MessageKey, String>,
}

impl Messages {
  /// Built-in English messages.
  pub fn new() -> Self {
    Self::default()
  }

  /// Built-in messages with some templates replaced.
  pub fn with_overrides<I, K, V>(overrides: I) -> Result<Self, UnknownMessageKey>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut messages = Self::new();
    for (key, template) in overrides {
      let key = key.as_ref().parse::<MessageKey>()?;
      messages.overrides.insert(key, template.into());
    }
    Ok(messages)
  }

  pub fn template(&self, key: MessageKey) -> &str {
    self
      .overrides
      .get(&key)
      .map(String::as_str)
      .unwrap_or_else(|| key.default_template())
  }

  /// Format a message. Placeholders without a matching argument are kept
  /// verbatim.
  pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
    interpolate(self.template(key), args)
  }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(open) = rest.find('{') {
    out.push_str(&rest[..open]);
    let after = &rest[open + 1..];
    let Some(close) = after.find('}') else {
      out.push_str(&rest[open..]);
      return out;
    };

    let name = &after[..close];
    match args.iter().find(|(arg, _)| *arg == name) {
      Some((_, value)) => out.push_str(value),
      None => {
        out.push('{');
        out.push_str(name);
        out.push('}');
      }
    }
    rest = &after[close + 1..];
  }

  out.push_str(rest);
  out
}
