//! Console reporting sink.

use std::sync::Mutex;

use serde::Serialize;

/// Where the orchestrator sends operator-facing messages.
pub trait Reporter {
  fn info(&self, message: &str);
  fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
  Info,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
  pub level: ReportLevel,
  pub text: String,
}

/// Reporter that keeps every line in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
  lines: Mutex<Vec<ReportLine>>,
}

impl CollectingReporter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn lines(&self) -> Vec<ReportLine> {
    self.lock().clone()
  }

  pub fn texts(&self, level: ReportLevel) -> Vec<String> {
    self
      .lock()
      .iter()
      .filter(|line| line.level == level)
      .map(|line| line.text.clone())
      .collect()
  }

  fn push(&self, level: ReportLevel, message: &str) {
    self.lock().push(ReportLine {
      level,
      text: message.to_string(),
    });
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportLine>> {
    // A poisoned lock only means another reporter call panicked mid-push.
    self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl Reporter for CollectingReporter {
  fn info(&self, message: &str) {
    self.push(ReportLevel::Info, message);
  }

  fn error(&self, message: &str) {
    self.push(ReportLevel::Error, message);
  }
}
