// src/engine/mod.rs

//! Permission-enforcement engine for umaskd.
//!
//! This module ties together:
//! - the watch registry that maps handles to per-directory policies
//! - the ignore set that swallows the daemon's own corrective writes
//! - the mode arithmetic that clamps permissions between the two masks
//! - the runtime loop that drains decoded event batches in arrival order
//!
//! The sequential core lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::io;

use crate::watch::DirEvent;

/// Events flowing into the runtime from the reader thread and the signal
/// handler.
#[derive(Debug)]
pub enum DaemonEvent {
    /// All events decoded from one successful read, in kernel order.
    Batch(Vec<DirEvent>),
    /// The blocking read failed; the event source is dead.
    SourceFailed(io::Error),
    /// Graceful shutdown requested (Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod policy;
pub mod runtime;
pub mod suppress;

pub use self::core::{EventDisposition, PolicyCore};
pub use self::policy::compute_mode;
pub use self::runtime::Runtime;
pub use self::suppress::IgnoreSet;
