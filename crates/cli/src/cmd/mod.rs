mod bind;
mod options;
mod plan;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use guestbind_lib::config::Config;
use guestbind_lib::consts::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use guestbind_lib::platform::paths::resolve_config_path;

pub use bind::cmd_bind;
pub use options::cmd_options;
pub use plan::cmd_plan;

/// Find and load the config file.
fn load_config(explicit: Option<&Path>) -> Result<(PathBuf, Config)> {
  let path = resolve_config_path(explicit).ok_or_else(|| {
    anyhow!(
      "No config file found. Create ./{} or point --config / {} at one.",
      CONFIG_FILE_NAME,
      CONFIG_ENV_VAR
    )
  })?;
  debug!(path = %path.display(), "using config");

  let config = Config::load(&path).with_context(|| format!("Failed to load config: {}", path.display()))?;
  Ok((path, config))
}
