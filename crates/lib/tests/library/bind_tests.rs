//! End-to-end orchestrator runs against an in-memory channel.

use guestbind_lib::bind::{BindContext, BindOrchestrator, FolderBinding, FolderStatus, RunState};
use guestbind_lib::config::Config;
use guestbind_lib::options::OptionMap;
use guestbind_lib::report::{CollectingReporter, ReportLevel};

use super::common::{RecordingRemote, options};

#[tokio::test]
async fn empty_sequence_issues_zero_remote_calls() {
  let remote = RecordingRemote::succeeding();
  let reporter = CollectingReporter::new();

  let report = BindOrchestrator::default()
    .run(BindContext {
      folders: &[],
      defaults: &OptionMap::new(),
      remote: &remote,
      reporter: &reporter,
    })
    .await;

  assert_eq!(remote.call_count(), 0);
  assert_eq!(report.state, RunState::Done);
}

#[tokio::test]
async fn probe_failure_issues_exactly_one_call() {
  let remote = RecordingRemote::failing_when(|line| line.ends_with("--help"));
  let reporter = CollectingReporter::new();
  let folders = vec![
    FolderBinding::new("/vagrant/a", "/mnt/a"),
    FolderBinding::new("/vagrant/b", "/mnt/b"),
  ];

  let report = BindOrchestrator::default()
    .run(BindContext {
      folders: &folders,
      defaults: &OptionMap::new(),
      remote: &remote,
      reporter: &reporter,
    })
    .await;

  assert_eq!(remote.call_count(), 1);
  assert_eq!(report.state, RunState::Aborted);
  let errors = reporter.texts(ReportLevel::Error);
  assert!(errors[0].contains("simulated failure"));
  assert!(errors[1].contains("not installed"));
}

#[tokio::test]
async fn first_folder_failure_does_not_stop_the_second() {
  let remote = RecordingRemote::failing_when(|line| line.starts_with("bindfs") && line.ends_with("/mnt/first"));
  let reporter = CollectingReporter::new();
  let folders = vec![
    FolderBinding::new("/vagrant/first", "/mnt/first"),
    FolderBinding::new("/vagrant/second", "/mnt/second"),
  ];

  let report = BindOrchestrator::default()
    .run(BindContext {
      folders: &folders,
      defaults: &OptionMap::new(),
      remote: &remote,
      reporter: &reporter,
    })
    .await;

  let lines = remote.lines();
  assert_eq!(lines.len(), 5);
  assert_eq!(lines[1], "mkdir -p /mnt/first");
  assert!(lines[2].ends_with("/vagrant/first /mnt/first"));
  assert_eq!(lines[3], "mkdir -p /mnt/second");
  assert!(lines[4].ends_with("/vagrant/second /mnt/second"));

  assert_eq!(report.state, RunState::Done);
  assert!(matches!(report.folders[0].status, FolderStatus::Failed { .. }));
  assert!(matches!(report.folders[1].status, FolderStatus::Bound { .. }));

  let errors = reporter.texts(ReportLevel::Error);
  assert_eq!(errors.len(), 2);
  assert_eq!(errors[1], "bindfs command failed for /vagrant/first => /mnt/first");
  assert!(
    reporter
      .texts(ReportLevel::Info)
      .contains(&"/vagrant/second => /mnt/second".to_string())
  );
}

#[tokio::test]
async fn config_driven_run_uses_global_defaults_and_message_overrides() {
  let config = Config::from_yaml_str(
    r#"
ssh:
  host: guest
bindfs:
  default_options:
    owner: vagrant
    group: vagrant
    perms: u=rwX:g=rD:o=rD
  folders:
    - path: /vagrant/data
      bindpath: /mnt/data
      owner: alice
messages:
  binding: "Relocating shared folders..."
"#,
  )
  .unwrap();
  let remote = RecordingRemote::succeeding();
  let reporter = CollectingReporter::new();

  let report = config
    .orchestrator()
    .unwrap()
    .run(BindContext {
      folders: &config.bindfs.folders,
      defaults: &config.bindfs.default_options,
      remote: &remote,
      reporter: &reporter,
    })
    .await;

  assert!(report.is_clean());
  assert_eq!(
    remote.lines(),
    [
      "bindfs --help",
      "mkdir -p /mnt/data",
      "bindfs --owner=alice --group=vagrant --perms=u=rwX:g=rD:o=rD /vagrant/data /mnt/data",
    ]
  );
  assert_eq!(reporter.texts(ReportLevel::Info)[0], "Relocating shared folders...");
}

#[tokio::test]
async fn paths_with_spaces_are_quoted() {
  let remote = RecordingRemote::succeeding();
  let reporter = CollectingReporter::new();
  let folders = vec![FolderBinding::new("/vagrant/My Docs", "/mnt/my docs")];
  let defaults = options(&[("owner", "vagrant".into())]);

  BindOrchestrator::default()
    .run(BindContext {
      folders: &folders,
      defaults: &defaults,
      remote: &remote,
      reporter: &reporter,
    })
    .await;

  let lines = remote.lines();
  assert_eq!(lines[1], "mkdir -p '/mnt/my docs'");
  assert!(lines[2].ends_with("'/vagrant/My Docs' '/mnt/my docs'"));
}
