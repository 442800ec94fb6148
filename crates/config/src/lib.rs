pub mod schema;

pub use schema::{MonitorConfig, DEFAULT_WIDTH};

use mon_core::{MonError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MonitorConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MonitorConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MonitorConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MonError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: MonitorConfig =
        toml::from_str(&raw).map_err(|e| MonError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;

    tracing::info!(
        history_length = config.history_length,
        width = config.width,
        "Loaded config from '{}'",
        path.display()
    );
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("sysmon").join("sysmon.toml")
}
