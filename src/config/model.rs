// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [[dir]]
/// path = "/srv/incoming"
/// min = 0o644   # permission floor
/// max = 0o022   # permission ceiling, wins on overlap
/// ```
///
/// Masks are octal integers confined to the classic rwx range. An entry
/// that fails validation is skipped with a warning; the remaining entries
/// still apply.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// All `[[dir]]` rules, in file order.
    #[serde(default, rename = "dir")]
    pub dirs: Vec<RawDirRule>,
}

/// One `[[dir]]` rule as deserialized, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDirRule {
    /// Directory to watch.
    pub path: PathBuf,
    /// Permission bits that must always be present in the final mode.
    pub min: u32,
    /// Permission bits that must always be absent from the final mode.
    pub max: u32,
}

/// Validated configuration: only well-formed rules survive.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub dirs: Vec<DirRule>,
}

/// A validated per-directory policy, ready for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirRule {
    pub path: PathBuf,
    pub min_mask: u32,
    pub max_mask: u32,
}
