//! Implementation of the `guestbind bind` command.
//!
//! Loads the config, connects to the guest over SSH and binds every declared
//! folder. Per-folder failures are reported and skipped; the command only
//! fails on them when `--strict` is given.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;

use guestbind_lib::bind::{BindContext, BindOrchestrator, BindReport, RunState};
use guestbind_lib::config::Config;
use guestbind_lib::remote::SshSession;
use guestbind_lib::report::{CollectingReporter, Reporter};

use super::load_config;
use crate::output::{
  ConsoleReporter, OutputFormat, format_duration, print_info, print_json, print_stat, print_success, print_warning,
};

pub fn cmd_bind(config: Option<&Path>, output: OutputFormat, strict: bool) -> Result<()> {
  let (path, config) = load_config(config)?;
  let orchestrator = config.orchestrator().context("Invalid messages section")?;
  let session = SshSession::new(config.ssh.clone());

  info!(
    host = %config.ssh.host,
    port = config.ssh.port,
    folders = config.bindfs.folders.len(),
    "starting bind"
  );

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let start = Instant::now();

  let report = if output.is_json() {
    let reporter = CollectingReporter::new();
    let report = rt.block_on(run(&orchestrator, &config, &session, &reporter));
    print_json(&serde_json::json!({
      "config": path,
      "report": report,
      "messages": reporter.lines(),
      "duration_ms": start.elapsed().as_millis() as u64,
    }))?;
    report
  } else {
    if config.bindfs.folders.is_empty() {
      print_info(&format!("No folders declared in {}", path.display()));
    }
    let report = rt.block_on(run(&orchestrator, &config, &session, &ConsoleReporter));
    print_summary(&report, start);
    report
  };

  if strict {
    if report.state == RunState::Aborted {
      bail!("{} is not available on the guest", orchestrator.settings().tool);
    }
    if report.failed_count() > 0 {
      bail!("{} folder(s) failed to bind", report.failed_count());
    }
  }

  Ok(())
}

async fn run<S: Reporter>(
  orchestrator: &BindOrchestrator,
  config: &Config,
  session: &SshSession,
  reporter: &S,
) -> BindReport {
  orchestrator
    .run(BindContext {
      folders: &config.bindfs.folders,
      defaults: &config.bindfs.default_options,
      remote: session,
      reporter,
    })
    .await
}

fn print_summary(report: &BindReport, start: Instant) {
  if report.state == RunState::Aborted || report.folders.is_empty() {
    return;
  }

  println!();
  if report.failed_count() == 0 {
    print_success("Bind complete!");
  } else {
    print_warning("Bind finished with failures");
  }
  print_stat("Folders bound", &report.bound_count().to_string());
  print_stat("Folders failed", &report.failed_count().to_string());
  print_stat("Duration", &format_duration(start.elapsed()));
}
