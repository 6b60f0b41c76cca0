//! The bind orchestrator.
//!
//! A run probes the guest for the bind utility once, then binds each declared
//! folder in order. A missing tool aborts the whole run before any folder is
//! attempted; a failing folder is reported and skipped without affecting the
//! folders after it. Nothing is retried and no error escapes `run`: outcomes
//! are reported to the console sink and returned in the [`BindReport`].

use tracing::{debug, error, info, warn};

use crate::bind::command;
use crate::bind::types::{BindReport, FolderBinding, FolderOutcome, FolderStatus, PlannedFolder, RunState};
use crate::consts::DEFAULT_TOOL;
use crate::messages::{MessageKey, Messages};
use crate::options::{EffectiveOptions, OptionCatalog, OptionMap, render_args};
use crate::remote::{RemoteCommand, RemoteError, RemoteExec};
use crate::report::Reporter;

/// Static settings for an orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindSettings {
  /// Bind utility executable on the guest.
  pub tool: String,
}

impl Default for BindSettings {
  fn default() -> Self {
    Self {
      tool: DEFAULT_TOOL.to_string(),
    }
  }
}

/// Everything one run consumes.
pub struct BindContext<'a, R, S> {
  /// Folders declared for the machine, in declaration order.
  pub folders: &'a [FolderBinding],
  /// Global default overrides, merged above the catalog defaults.
  pub defaults: &'a OptionMap,
  pub remote: &'a R,
  pub reporter: &'a S,
}

pub struct BindOrchestrator {
  catalog: OptionCatalog,
  messages: Messages,
  settings: BindSettings,
}

impl BindOrchestrator {
  pub fn new(catalog: OptionCatalog, messages: Messages, settings: BindSettings) -> Self {
    Self {
      catalog,
      messages,
      settings,
    }
  }

  pub fn catalog(&self) -> &OptionCatalog {
    &self.catalog
  }

  pub fn settings(&self) -> &BindSettings {
    &self.settings
  }

  /// Bind every folder in `ctx`.
  ///
  /// Issues no remote call at all when there are no folders.
  pub async fn run<R: RemoteExec, S: Reporter>(&self, ctx: BindContext<'_, R, S>) -> BindReport {
    let mut state = RunState::NotStarted;
    let tool = self.settings.tool.as_str();

    if ctx.folders.is_empty() {
      debug!("no folders declared, nothing to bind");
      return BindReport {
        state: RunState::Done,
        folders: Vec::new(),
      };
    }

    transition(&mut state, RunState::Probing);
    if let Err(e) = self.issue(ctx.remote, &command::probe(tool)).await {
      error!(tool = %tool, error = %e, "bind utility probe failed, aborting");
      ctx.reporter.error(&e.to_string());
      ctx
        .reporter
        .error(&self.messages.format(MessageKey::ToolNotInstalled, &[("tool", tool)]));
      transition(&mut state, RunState::Aborted);
      return BindReport {
        state,
        folders: Vec::new(),
      };
    }

    transition(&mut state, RunState::Binding);
    info!(folders = ctx.folders.len(), tool = %tool, "binding folders");
    ctx.reporter.info(&self.messages.format(MessageKey::Binding, &[]));

    let mut outcomes = Vec::with_capacity(ctx.folders.len());
    for folder in ctx.folders {
      let status = self.bind_folder(folder, &ctx).await;
      outcomes.push(FolderOutcome {
        source: folder.source.clone(),
        target: folder.target.clone(),
        status,
      });
    }

    transition(&mut state, RunState::Done);
    let report = BindReport {
      state,
      folders: outcomes,
    };
    info!(
      bound = report.bound_count(),
      failed = report.failed_count(),
      "binding complete"
    );
    report
  }

  /// The commands a run would issue, folder by folder. Touches no channel.
  pub fn plan(&self, folders: &[FolderBinding], defaults: &OptionMap) -> Vec<PlannedFolder> {
    folders
      .iter()
      .map(|folder| {
        let options = EffectiveOptions::merge(&self.catalog, defaults, &folder.options);
        let commands = self.folder_commands(folder, &options).to_vec();
        PlannedFolder {
          source: folder.source.clone(),
          target: folder.target.clone(),
          options,
          commands,
        }
      })
      .collect()
  }

  fn folder_commands(&self, folder: &FolderBinding, options: &EffectiveOptions) -> [RemoteCommand; 2] {
    let args = render_args(&self.catalog, options);
    [
      command::make_dir(&folder.target),
      command::mount(&self.settings.tool, &args, &folder.source, &folder.target),
    ]
  }

  async fn bind_folder<R: RemoteExec, S: Reporter>(
    &self,
    folder: &FolderBinding,
    ctx: &BindContext<'_, R, S>,
  ) -> FolderStatus {
    let options = EffectiveOptions::merge(&self.catalog, ctx.defaults, &folder.options);
    let [mkdir, mount] = self.folder_commands(folder, &options);

    let result = match self.issue(ctx.remote, &mkdir).await {
      Ok(()) => self.issue(ctx.remote, &mount).await,
      Err(e) => Err(e),
    };

    match result {
      Ok(()) => {
        info!(source = %folder.source, target = %folder.target, "folder bound");
        ctx.reporter.info(&self.messages.format(
          MessageKey::BindingEntry,
          &[("source", folder.source.as_str()), ("target", folder.target.as_str())],
        ));
        ctx.reporter.info(&mount.line);
        FolderStatus::Bound { command: mount.line }
      }
      Err(e) => {
        warn!(source = %folder.source, target = %folder.target, error = %e, "folder bind failed");
        ctx.reporter.error(&e.to_string());
        ctx.reporter.error(&self.messages.format(
          MessageKey::CommandFailed,
          &[
            ("tool", self.settings.tool.as_str()),
            ("source", folder.source.as_str()),
            ("target", folder.target.as_str()),
          ],
        ));
        FolderStatus::Failed { error: e.to_string() }
      }
    }
  }

  async fn issue<R: RemoteExec>(&self, remote: &R, command: &RemoteCommand) -> Result<(), RemoteError> {
    debug!(command = %command.line, elevated = command.elevated, "issuing remote command");
    remote.execute(command).await.map(|_| ())
  }
}

impl Default for BindOrchestrator {
  fn default() -> Self {
    Self::new(OptionCatalog::bindfs(), Messages::new(), BindSettings::default())
  }
}

fn transition(state: &mut RunState, next: RunState) {
  debug!(from = ?state, to = ?next, "run state");
  *state = next;
}
