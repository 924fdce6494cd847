// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** filter out
/// malformed `[[dir]]` entries. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and drop malformed entries.
///
/// This is the entry point the daemon uses:
///
/// - Reads TOML.
/// - Confines each rule's masks to the low 9 permission bits.
/// - Skips (with a warning) entries that fail validation, keeping the rest,
///   so one bad entry never blocks the others from registering.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw = load_from_path(&path)?;
    Ok(validate_config(raw))
}

/// Helper to resolve a default config path.
///
/// Currently this just returns the system-wide location, but this function
/// exists so you can later:
///
/// - Respect an env var (e.g. `UMASKD_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("/etc/umaskd.toml")
}
