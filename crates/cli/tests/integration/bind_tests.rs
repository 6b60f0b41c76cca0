//! `guestbind bind` against stand-in ssh programs.

#![cfg(unix)]

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn binds_every_folder_when_remote_succeeds() {
  let env = TestEnv::from_fixture("bind_ok.yaml");

  env
    .guestbind_cmd()
    .arg("bind")
    .assert()
    .success()
    .stdout(predicate::str::contains("Creating bind mounts for selected folders..."))
    .stdout(predicate::str::contains("/vagrant/data => /mnt/data"))
    .stdout(predicate::str::contains(
      "bindfs --owner=alice --group=vagrant --perms=u=rwX:g=rD:o=rD /vagrant/data /mnt/data",
    ))
    .stdout(predicate::str::contains(
      "bindfs --owner=vagrant --group=vagrant --perms=u=rwX:g=rD:o=rD --chown-ignore /vagrant/www /var/www",
    ))
    .stdout(predicate::str::contains("Bind complete!"));
}

#[test]
fn missing_tool_is_reported_but_not_fatal_by_default() {
  let env = TestEnv::from_fixture("probe_fail.yaml");

  env
    .guestbind_cmd()
    .arg("bind")
    .assert()
    .success()
    .stderr(predicate::str::contains("bindfs is not installed on the guest machine"))
    .stdout(predicate::str::contains("/mnt/data").not());
}

#[test]
fn strict_mode_fails_when_tool_is_missing() {
  let env = TestEnv::from_fixture("probe_fail.yaml");

  env
    .guestbind_cmd()
    .args(["bind", "--strict"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("not available on the guest"));
}

#[test]
fn no_folders_means_no_ssh_calls() {
  // The fixture's ssh program does not exist, so any call would fail the probe.
  let env = TestEnv::from_fixture("no_folders.yaml");

  env
    .guestbind_cmd()
    .args(["bind", "--strict"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No folders declared"))
    .stderr(predicate::str::contains("not installed").not());
}

#[test]
fn json_output_carries_report_and_messages() {
  let env = TestEnv::from_fixture("bind_ok.yaml");

  let output = env
    .guestbind_cmd()
    .args(["bind", "--output", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["report"]["state"], "done");
  assert_eq!(json["report"]["folders"].as_array().unwrap().len(), 2);
  assert_eq!(json["report"]["folders"][0]["status"], "bound");
  assert_eq!(json["messages"][0]["level"], "info");
}

#[test]
fn message_overrides_and_custom_tool_are_used() {
  let env = TestEnv::from_fixture("custom_messages.yaml");

  env
    .guestbind_cmd()
    .arg("bind")
    .assert()
    .success()
    .stdout(predicate::str::contains("Relocating shared folders..."))
    .stdout(predicate::str::contains("/srv/shared is now visible at /home/dev/shared"))
    .stdout(predicate::str::contains("/usr/local/bin/bindfs --owner=vagrant"))
    .stdout(predicate::str::contains("--mirror=dev"));
}
