//! Implementation of the `guestbind plan` command.
//!
//! Shows the effective options and the exact commands `bind` would run for
//! each folder, without connecting to the guest.

use std::path::Path;

use anyhow::{Context, Result};

use guestbind_lib::remote::SshSession;

use super::load_config;
use crate::output::{OutputFormat, print_info, print_json, print_stat, symbols};

pub fn cmd_plan(config: Option<&Path>, output: OutputFormat, verbose: bool) -> Result<()> {
  let (path, config) = load_config(config)?;
  let orchestrator = config.orchestrator().context("Invalid messages section")?;
  let planned = orchestrator.plan(&config.bindfs.folders, &config.bindfs.default_options);

  if output.is_json() {
    return print_json(&planned);
  }

  let session = SshSession::new(config.ssh.clone());
  print_stat("Config", &path.display().to_string());
  print_stat("Guest", &format!("{}:{}", config.ssh.host, config.ssh.port));
  print_stat("Probe", &format!("{} --help", orchestrator.settings().tool));

  if planned.is_empty() {
    println!();
    print_info("No folders declared; bind would do nothing");
    return Ok(());
  }

  for folder in &planned {
    println!();
    println!("{} {} {} {}", symbols::INFO, folder.source, symbols::ARROW, folder.target);

    if verbose {
      for (name, value) in folder.options.iter().filter(|(_, v)| v.is_truthy()) {
        print_stat(name, &value.to_string());
      }
    }

    for command in &folder.commands {
      println!("    $ {}", session.remote_line(command));
    }
  }

  Ok(())
}
