//! Shared helpers for library integration tests.

use std::sync::Mutex;

use guestbind_lib::options::{OptionMap, OptionValue};
use guestbind_lib::remote::{RemoteCommand, RemoteError, RemoteExec, RemoteOutput};

/// Channel that records commands and fails those matching a predicate.
pub struct RecordingRemote {
  fail: Box<dyn Fn(&str) -> bool + Send + Sync>,
  calls: Mutex<Vec<RemoteCommand>>,
}

impl RecordingRemote {
  pub fn succeeding() -> Self {
    Self::failing_when(|_| false)
  }

  pub fn failing_when(fail: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
    Self {
      fail: Box::new(fail),
      calls: Mutex::new(Vec::new()),
    }
  }

  pub fn lines(&self) -> Vec<String> {
    self.calls.lock().unwrap().iter().map(|c| c.line.clone()).collect()
  }

  pub fn call_count(&self) -> usize {
    self.calls.lock().unwrap().len()
  }
}

impl RemoteExec for RecordingRemote {
  async fn execute(&self, command: &RemoteCommand) -> Result<RemoteOutput, RemoteError> {
    self.calls.lock().unwrap().push(command.clone());
    if (self.fail)(&command.line) {
      return Err(RemoteError::CommandFailed {
        command: format!("sudo {}", command.line),
        code: Some(1),
        stderr: "simulated failure".to_string(),
      });
    }
    Ok(RemoteOutput::default())
  }
}

/// Build an option map from string pairs.
pub fn options(pairs: &[(&str, OptionValue)]) -> OptionMap {
  pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}
