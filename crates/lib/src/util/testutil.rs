//! Test utilities for guestbind-lib.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::remote::{RemoteCommand, RemoteError, RemoteExec, RemoteOutput};

/// In-memory channel that records every command and fails chosen lines.
#[derive(Debug, Default)]
pub struct ScriptedRemote {
  failing: HashSet<String>,
  calls: Mutex<Vec<RemoteCommand>>,
}

impl ScriptedRemote {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make the command whose line is exactly `line` exit with status 1.
  pub fn fail_on(mut self, line: &str) -> Self {
    self.failing.insert(line.to_string());
    self
  }

  pub fn calls(&self) -> Vec<RemoteCommand> {
    self.calls.lock().unwrap().clone()
  }

  pub fn lines(&self) -> Vec<String> {
    self.calls().into_iter().map(|c| c.line).collect()
  }
}

impl RemoteExec for ScriptedRemote {
  async fn execute(&self, command: &RemoteCommand) -> Result<RemoteOutput, RemoteError> {
    self.calls.lock().unwrap().push(command.clone());

    if self.failing.contains(&command.line) {
      return Err(RemoteError::CommandFailed {
        command: command.line.clone(),
        code: Some(1),
        stderr: String::new(),
      });
    }

    Ok(RemoteOutput::default())
  }
}
