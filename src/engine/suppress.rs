// src/engine/suppress.rs

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

use crate::watch::WatchHandle;

/// Filenames whose next event must be discarded as self-induced.
///
/// The daemon watches attribute changes but also makes them: every
/// corrective chmod on `f` is echoed back as a fresh attribute event for
/// `f`. Entries are armed immediately before each corrective write and
/// consumed by the first matching event. Keying by `(handle, name)` keeps
/// same-named files in different watched directories from suppressing
/// each other's events.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    entries: HashSet<(WatchHandle, OsString)>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the next event for `name` under `handle` as self-induced.
    pub fn arm(&mut self, handle: WatchHandle, name: &OsStr) {
        self.entries.insert((handle, name.to_os_string()));
    }

    /// Consume a pending suppression, if one matches.
    ///
    /// Returns true when the event should be discarded. The matching entry
    /// is removed, so only one event is swallowed per armed write.
    pub fn consume(&mut self, handle: WatchHandle, name: &OsStr) -> bool {
        self.entries.remove(&(handle, name.to_os_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
