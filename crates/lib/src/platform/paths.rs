use std::path::{Path, PathBuf};

use crate::consts::{APP_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("USERPROFILE").map(PathBuf::from)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("HOME").map(PathBuf::from)
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> Option<PathBuf> {
  std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> Option<PathBuf> {
  let config_home = std::env::var_os("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .or_else(|| home_dir().map(|home| home.join(".config")))?;
  Some(config_home.join(APP_NAME))
}

/// Expand a leading `~/` against the home directory.
///
/// Paths without the prefix, or with no home directory known, are returned
/// unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
  match (path.strip_prefix("~"), home_dir()) {
    (Ok(rest), Some(home)) => home.join(rest),
    _ => path.to_path_buf(),
  }
}

/// Locate the config file to load.
///
/// Order: the explicit path, `$GUESTBIND_CONFIG`, `./guestbind.yaml`, then
/// `guestbind.yaml` in the config dir. Returns `None` when nothing exists;
/// an explicit path is returned as-is even if missing so the caller can
/// report it.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
  if let Some(path) = explicit {
    return Some(path.to_path_buf());
  }

  if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
    return Some(PathBuf::from(path));
  }

  let local = PathBuf::from(CONFIG_FILE_NAME);
  if local.is_file() {
    return Some(dunce::canonicalize(&local).unwrap_or(local));
  }

  config_dir()
    .map(|dir| dir.join(CONFIG_FILE_NAME))
    .filter(|path| path.is_file())
}
