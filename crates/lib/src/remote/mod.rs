//! Remote command execution.
//!
//! The orchestrator only needs a narrow capability: run one command string on
//! the guest and learn whether it succeeded. [`RemoteExec`] is that seam;
//! [`SshSession`] is the implementation backed by the system `ssh` client.

pub mod ssh;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub use ssh::{SshConfig, SshSession};

/// One command line to run on the guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteCommand {
  /// Shell command line, without any privilege prefix.
  pub line: String,
  /// Run with elevated privilege on the guest.
  pub elevated: bool,
}

impl RemoteCommand {
  pub fn elevated(line: impl Into<String>) -> Self {
    Self {
      line: line.into(),
      elevated: true,
    }
  }

  pub fn plain(line: impl Into<String>) -> Self {
    Self {
      line: line.into(),
      elevated: false,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOutput {
  pub stdout: String,
  pub stderr: String,
}

#[derive(Debug, Error)]
pub enum RemoteError {
  /// The transport could not be started.
  #[error("failed to start {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  #[error("remote command failed with exit code {code:?}: {command}{}", stderr_suffix(.stderr))]
  CommandFailed {
    command: String,
    code: Option<i32>,
    stderr: String,
  },

  #[error("remote command timed out after {after:?}: {command}")]
  TimedOut { command: String, after: Duration },
}

fn stderr_suffix(stderr: &str) -> String {
  let trimmed = stderr.trim();
  if trimmed.is_empty() {
    String::new()
  } else {
    format!(" ({})", trimmed)
  }
}

/// Authenticated, ordered, blocking command conduit to the guest.
///
/// Calls are issued one at a time; implementations may assume a single owner
/// for the duration of a run.
pub trait RemoteExec {
  fn execute(&self, command: &RemoteCommand) -> impl Future<Output = Result<RemoteOutput, RemoteError>>;
}
