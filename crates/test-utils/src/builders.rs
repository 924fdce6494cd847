#![allow(dead_code)]

use umaskd::config::{ConfigFile, RawConfigFile, RawDirRule};
use umaskd::watch::decode::HEADER_SIZE;
use umaskd::watch::{WatchEntry, WatchHandle, WatchRegistry};

/// Kernel mask bits for the watched event kinds (values from
/// `<sys/inotify.h>`), so tests can pack records without pulling in libc.
pub const IN_ATTRIB: u32 = 0x0000_0004;
pub const IN_MOVED_TO: u32 = 0x0000_0080;
pub const IN_CREATE: u32 = 0x0000_0100;
pub const IN_Q_OVERFLOW: u32 = 0x0000_4000;
pub const IN_IGNORED: u32 = 0x0000_8000;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    raw: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawConfigFile { dirs: Vec::new() },
        }
    }

    pub fn with_dir(mut self, path: &str, min: u32, max: u32) -> Self {
        self.raw.dirs.push(RawDirRule {
            path: path.into(),
            min,
            max,
        });
        self
    }

    /// Validate, silently dropping malformed entries the way the daemon does.
    pub fn build(self) -> ConfigFile {
        umaskd::config::validate_config(self.raw)
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry preloaded with fake handles, for driving the core without a
/// kernel descriptor.
pub fn registry_with(entries: &[(i32, &str, u32, u32)]) -> WatchRegistry {
    let mut registry = WatchRegistry::new();
    for &(wd, path, min, max) in entries {
        registry.insert(
            WatchHandle(wd),
            WatchEntry {
                path: path.into(),
                min_mask: min,
                max_mask: max,
            },
        );
    }
    registry
}

/// Pack one raw inotify record the way the kernel lays it out.
///
/// `name` is written into a field of `padded_len` bytes (NUL padded); pass
/// the exact name length to exercise unpadded records.
pub fn pack_record(wd: i32, mask: u32, name: &str, padded_len: usize) -> Vec<u8> {
    assert!(
        name.len() <= padded_len,
        "name longer than its declared field"
    );
    let mut out = Vec::with_capacity(HEADER_SIZE + padded_len);
    out.extend_from_slice(&wd.to_ne_bytes());
    out.extend_from_slice(&mask.to_ne_bytes());
    out.extend_from_slice(&0u32.to_ne_bytes()); // cookie
    out.extend_from_slice(&(padded_len as u32).to_ne_bytes());
    out.extend_from_slice(name.as_bytes());
    out.resize(HEADER_SIZE + padded_len, 0);
    out
}
