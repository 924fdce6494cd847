// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use anyhow::{Context, Result};

pub mod mock;

/// Abstract view of file permission state.
///
/// The enforcement core reads and rewrites modes only through this trait
/// so tests can substitute an in-memory implementation.
pub trait FilePermissions: Send + Sync + Debug {
    /// Full `st_mode` of the file, including file type and special bits.
    fn mode_of(&self, path: &Path) -> Result<u32>;

    /// Rewrite the permission portion of the file's mode.
    fn set_mode(&self, path: &Path, mode: u32) -> Result<()>;
}

/// Implementation backed by the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct RealPermissions;

impl FilePermissions for RealPermissions {
    fn mode_of(&self, path: &Path) -> Result<u32> {
        let meta = fs::metadata(path).with_context(|| format!("stat {:?}", path))?;
        Ok(meta.permissions().mode())
    }

    fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))
            .with_context(|| format!("chmod {:?}", path))
    }
}
