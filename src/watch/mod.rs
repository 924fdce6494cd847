// src/watch/mod.rs

//! Directory watching via inotify.
//!
//! This module is responsible for:
//! - Owning the kernel inotify instance and its watch descriptors.
//! - Decoding the packed record stream a blocking `read(2)` delivers.
//! - Turning raw records into [`DirEvent`]s for the engine.
//!
//! It does **not** know about permission policy; it only turns kernel
//! records into per-directory events.

pub mod decode;
pub mod inotify;
pub mod reader;
pub mod registry;

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use crate::watch::decode::RawRecord;

pub use inotify::Inotify;
pub use reader::spawn_reader;
pub use registry::{WatchEntry, WatchRegistry};

/// Opaque identifier for one registered directory.
///
/// Wraps the kernel watch descriptor returned by `inotify_add_watch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchHandle(pub i32);

/// What happened inside a watched directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A new entry was created in the directory.
    Created,
    /// An entry was moved into the directory.
    MovedIn,
    /// An entry's attributes (e.g. permissions) changed.
    AttribChanged,
}

/// One decoded directory event, resolved to an owned filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEvent {
    pub handle: WatchHandle,
    pub name: OsString,
    pub kind: EventKind,
}

impl DirEvent {
    /// Convert a raw record into an event the engine cares about.
    ///
    /// Returns `None` for records that carry none of the watched mask bits
    /// (e.g. `IN_IGNORED` after a watched directory vanishes) and for
    /// records without a name, which describe the watched directory itself
    /// rather than an entry inside it.
    pub fn from_record(record: &RawRecord<'_>) -> Option<Self> {
        let kind = classify(record.mask)?;
        if record.name.is_empty() {
            return None;
        }
        Some(DirEvent {
            handle: WatchHandle(record.wd),
            name: OsStr::from_bytes(record.name).to_os_string(),
            kind,
        })
    }
}

fn classify(mask: u32) -> Option<EventKind> {
    if mask & libc::IN_CREATE != 0 {
        Some(EventKind::Created)
    } else if mask & libc::IN_MOVED_TO != 0 {
        Some(EventKind::MovedIn)
    } else if mask & libc::IN_ATTRIB != 0 {
        Some(EventKind::AttribChanged)
    } else {
        None
    }
}
