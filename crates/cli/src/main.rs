mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guestbind_lib::consts::CONFIG_ENV_VAR;

use crate::output::OutputFormat;

/// guestbind - remap shared folders inside a guest machine with bindfs
#[derive(Parser)]
#[command(name = "guestbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to the config file (default: ./guestbind.yaml, then the user config dir)
  #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Bind the configured folders on the guest over SSH
  Bind {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Exit non-zero if the tool is missing or any folder fails
    #[arg(long)]
    strict: bool,
  },

  /// Show the commands `bind` would run, without connecting
  Plan {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// List the known bindfs options
  Options {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let config = cli.config.as_deref();

  match cli.command {
    Commands::Bind { output, strict } => cmd::cmd_bind(config, output, strict),
    Commands::Plan { output } => cmd::cmd_plan(config, output, cli.verbose),
    Commands::Options { output } => cmd::cmd_options(output),
  }
}
