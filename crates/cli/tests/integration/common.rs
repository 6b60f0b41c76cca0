//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding its config file.
pub struct TestEnv {
  pub temp: TempDir,
  pub config_path: PathBuf,
}

impl TestEnv {
  /// Copy a fixture to a temporary `guestbind.yaml`.
  pub fn from_fixture(name: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("guestbind.yaml");
    std::fs::write(&config_path, fixture_content(name)).unwrap();
    Self { temp, config_path }
  }

  /// Get a pre-configured Command for the guestbind binary.
  ///
  /// Runs inside the temp directory with `GUESTBIND_CONFIG` pointing at the
  /// fixture and `XDG_CONFIG_HOME` isolated.
  pub fn guestbind_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("guestbind");
    cmd.current_dir(self.temp.path());
    cmd.env("GUESTBIND_CONFIG", &self.config_path);
    cmd.env("XDG_CONFIG_HOME", self.temp.path().join("xdg"));
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
