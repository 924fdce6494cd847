// src/engine/core.rs

//! Sequential enforcement core.
//!
//! `PolicyCore` bundles the watch registry, the ignore set, and the
//! permission backend into one owned context object. The async shell
//! (`engine::runtime::Runtime`) feeds it decoded events one at a time; the
//! core decides, per event, whether to suppress, enforce, or skip.
//!
//! The core performs no channel IO and holds no tokio types, so tests can
//! drive it directly with a mock permission backend.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::policy::compute_mode;
use crate::engine::suppress::IgnoreSet;
use crate::errors::{Result, UmaskdError};
use crate::fs::FilePermissions;
use crate::watch::{DirEvent, WatchRegistry};

/// What the core did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDisposition {
    /// The event was self-induced and was discarded.
    Suppressed,
    /// A corrective write was issued; the final mode is attached.
    Corrected { mode: u32 },
    /// The event could not be enforced (stat or chmod failure); it was
    /// logged and dropped.
    Skipped,
}

#[derive(Debug)]
pub struct PolicyCore {
    registry: WatchRegistry,
    ignore: IgnoreSet,
    perms: Arc<dyn FilePermissions>,
}

impl PolicyCore {
    pub fn new(registry: WatchRegistry, perms: Arc<dyn FilePermissions>) -> Self {
        Self {
            registry,
            ignore: IgnoreSet::new(),
            perms,
        }
    }

    /// Expose the suppression backlog size (for tests).
    pub fn pending_suppressions(&self) -> usize {
        self.ignore.len()
    }

    /// Handle a single decoded event.
    ///
    /// Per-event failures (stat or chmod) are contained here and reported
    /// as [`EventDisposition::Skipped`]. The only error this returns is an
    /// event whose handle no registration ever produced; that is an
    /// invariant violation, not a recoverable condition.
    pub fn handle_event(&mut self, event: &DirEvent) -> Result<EventDisposition> {
        if self.ignore.consume(event.handle, &event.name) {
            debug!(name = ?event.name, "suppressed self-induced event");
            return Ok(EventDisposition::Suppressed);
        }

        let entry = self
            .registry
            .lookup(event.handle)
            .ok_or(UmaskdError::UnknownHandle(event.handle.0))?;

        let path = entry.path.join(&event.name);

        let current = match self.perms.mode_of(&path) {
            Ok(mode) => mode,
            Err(err) => {
                warn!("cannot stat {}: {err}", path.display());
                return Ok(EventDisposition::Skipped);
            }
        };

        let mode = compute_mode(current, entry.min_mask, entry.max_mask);

        // Armed before the write: the chmod below is echoed back as a
        // fresh attribute event for this same name.
        self.ignore.arm(event.handle, &event.name);

        if let Err(err) = self.perms.set_mode(&path, mode) {
            warn!("cannot chmod {}: {err}", path.display());
            return Ok(EventDisposition::Skipped);
        }

        info!("chmod {:04o} {}", mode & 0o7777, path.display());
        Ok(EventDisposition::Corrected { mode })
    }
}
