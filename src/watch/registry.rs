// src/watch/registry.rs

use std::collections::HashMap;
use std::path::PathBuf;

use crate::watch::WatchHandle;

/// Policy and location of one registered directory.
///
/// Entries are created during Init and never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    /// Directory the watch was placed on.
    pub path: PathBuf,
    /// Permission bits that must always be present ("floor").
    pub min_mask: u32,
    /// Permission bits that must always be absent ("ceiling"). Wins over
    /// `min_mask` on overlapping bits.
    pub max_mask: u32,
}

/// Maps watch handles to the directory policies they were registered with.
#[derive(Debug, Default)]
pub struct WatchRegistry {
    entries: HashMap<WatchHandle, WatchEntry>,
}

impl WatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful registration.
    pub fn insert(&mut self, handle: WatchHandle, entry: WatchEntry) {
        self.entries.insert(handle, entry);
    }

    /// Resolve an event's handle to its directory policy.
    ///
    /// Every handle the event source produces comes from a prior
    /// successful registration, so `None` here means the registry and the
    /// event source have desynchronized.
    pub fn lookup(&self, handle: WatchHandle) -> Option<&WatchEntry> {
        self.entries.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
