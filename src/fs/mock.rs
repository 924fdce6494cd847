// src/fs/mock.rs

use super::FilePermissions;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory permission store for tests.
///
/// Paths must be seeded with `add_file` before the core can stat them; a
/// missing path behaves like a stat failure. Every successful `set_mode`
/// call is recorded in order so tests can assert exactly which corrective
/// writes were issued.
#[derive(Debug, Clone, Default)]
pub struct MockPermissions {
    modes: Arc<Mutex<HashMap<PathBuf, u32>>>,
    applied: Arc<Mutex<Vec<(PathBuf, u32)>>>,
    fail_set_mode: Arc<Mutex<bool>>,
}

impl MockPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, mode: u32) {
        self.modes
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), mode);
    }

    /// Make every subsequent `set_mode` call fail.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_set_mode.lock().unwrap() = fail;
    }

    /// All corrective writes issued so far, in order.
    pub fn applied(&self) -> Vec<(PathBuf, u32)> {
        self.applied.lock().unwrap().clone()
    }

    pub fn mode_for(&self, path: impl AsRef<Path>) -> Option<u32> {
        self.modes.lock().unwrap().get(path.as_ref()).copied()
    }
}

impl FilePermissions for MockPermissions {
    fn mode_of(&self, path: &Path) -> Result<u32> {
        self.modes
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .ok_or_else(|| anyhow!("no such file: {:?}", path))
    }

    fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        if *self.fail_set_mode.lock().unwrap() {
            return Err(anyhow!("simulated chmod failure for {:?}", path));
        }
        let mut modes = self.modes.lock().unwrap();
        let entry = modes
            .get_mut(path)
            .ok_or_else(|| anyhow!("no such file: {:?}", path))?;
        *entry = (*entry & !0o7777) | (mode & 0o7777);
        self.applied.lock().unwrap().push((path.to_path_buf(), mode));
        Ok(())
    }
}
