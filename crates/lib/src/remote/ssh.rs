//! SSH channel backed by the system `ssh` client.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::debug;

use super::{RemoteCommand, RemoteError, RemoteExec, RemoteOutput};
use crate::platform::paths::expand_home;

fn default_port() -> u16 {
  22
}

fn default_program() -> String {
  "ssh".to_string()
}

fn default_elevate_with() -> String {
  "sudo".to_string()
}

/// Connection settings for the guest (`ssh:` section of the config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SshConfig {
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default)]
  pub user: Option<String>,
  #[serde(default)]
  pub identity_file: Option<PathBuf>,
  /// Client binary to run.
  #[serde(default = "default_program")]
  pub program: String,
  /// When false, host keys are neither checked nor recorded.
  #[serde(default)]
  pub strict_host_key_checking: bool,
  #[serde(default)]
  pub connect_timeout_secs: Option<u64>,
  #[serde(default)]
  pub command_timeout_secs: Option<u64>,
  /// Prefix for commands that need elevated privilege.
  #[serde(default = "default_elevate_with")]
  pub elevate_with: String,
  /// Extra arguments placed before the destination.
  #[serde(default)]
  pub extra_args: Vec<String>,
}

impl SshConfig {
  pub fn new(host: impl Into<String>) -> Self {
    Self {
      host: host.into(),
      port: default_port(),
      user: None,
      identity_file: None,
      program: default_program(),
      strict_host_key_checking: false,
      connect_timeout_secs: None,
      command_timeout_secs: None,
      elevate_with: default_elevate_with(),
      extra_args: Vec::new(),
    }
  }

  fn destination(&self) -> String {
    match &self.user {
      Some(user) => format!("{}@{}", user, self.host),
      None => self.host.clone(),
    }
  }
}

/// A [`RemoteExec`] that runs one `ssh` process per command.
#[derive(Debug, Clone)]
pub struct SshSession {
  config: SshConfig,
}

impl SshSession {
  pub fn new(config: SshConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &SshConfig {
    &self.config
  }

  /// The line sent to the guest, with the privilege prefix applied.
  pub fn remote_line(&self, command: &RemoteCommand) -> String {
    if command.elevated && !self.config.elevate_with.is_empty() {
      format!("{} {}", self.config.elevate_with, command.line)
    } else {
      command.line.clone()
    }
  }

  /// Arguments passed to the client binary for `command`.
  pub fn command_args(&self, command: &RemoteCommand) -> Vec<String> {
    let config = &self.config;
    let mut args = vec![
      "-o".to_string(),
      "BatchMode=yes".to_string(),
      "-o".to_string(),
      "LogLevel=ERROR".to_string(),
    ];

    if !config.strict_host_key_checking {
      args.extend([
        "-o".to_string(),
        "StrictHostKeyChecking=no".to_string(),
        "-o".to_string(),
        "UserKnownHostsFile=/dev/null".to_string(),
      ]);
    }

    if let Some(secs) = config.connect_timeout_secs {
      args.push("-o".to_string());
      args.push(format!("ConnectTimeout={}", secs));
    }

    args.push("-p".to_string());
    args.push(config.port.to_string());

    if let Some(identity) = &config.identity_file {
      args.push("-i".to_string());
      args.push(expand_home(identity).to_string_lossy().into_owned());
      args.push("-o".to_string());
      args.push("IdentitiesOnly=yes".to_string());
    }

    args.extend(config.extra_args.iter().cloned());
    args.push(config.destination());
    args.push("--".to_string());
    args.push(self.remote_line(command));
    args
  }

  async fn run(&self, command: &RemoteCommand) -> Result<RemoteOutput, RemoteError> {
    let args = self.command_args(command);
    debug!(program = %self.config.program, args = ?args, "spawning ssh");

    let output = Command::new(&self.config.program)
      .args(&args)
      .stdin(std::process::Stdio::null())
      .kill_on_drop(true)
      .output()
      .await
      .map_err(|source| RemoteError::Spawn {
        program: self.config.program.clone(),
        source,
      })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
      if !stderr.is_empty() {
        debug!(stderr = %stderr, "remote stderr");
      }
      return Err(RemoteError::CommandFailed {
        command: self.remote_line(command),
        code: output.status.code(),
        stderr,
      });
    }

    Ok(RemoteOutput { stdout, stderr })
  }
}

impl RemoteExec for SshSession {
  async fn execute(&self, command: &RemoteCommand) -> Result<RemoteOutput, RemoteError> {
    match self.config.command_timeout_secs {
      Some(secs) => {
        let after = Duration::from_secs(secs);
        tokio::time::timeout(after, self.run(command))
          .await
          .map_err(|_| RemoteError::TimedOut {
            command: self.remote_line(command),
            after,
          })?
      }
      None => self.run(command).await,
    }
  }
}
