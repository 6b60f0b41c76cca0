pub const APP_NAME: &str = "guestbind";

/// Bind utility invoked on the guest unless the config names another one.
pub const DEFAULT_TOOL: &str = "bindfs";

/// Config file looked up in the working directory and the config dir.
pub const CONFIG_FILE_NAME: &str = "guestbind.yaml";

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GUESTBIND_CONFIG";
