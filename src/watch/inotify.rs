// src/watch/inotify.rs

use std::ffi::CString;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::watch::WatchHandle;
use crate::watch::decode::EventBuffer;

/// Events requested for every registered directory: entries created in it,
/// entries moved into it, and attribute changes on entries in it.
/// `IN_ONLYDIR` makes registration of a non-directory fail outright.
const WATCH_MASK: u32 = libc::IN_ONLYDIR | libc::IN_CREATE | libc::IN_MOVED_TO | libc::IN_ATTRIB;

/// Owned inotify instance.
///
/// The kernel drops all watches when the descriptor is closed.
#[derive(Debug)]
pub struct Inotify {
    fd: OwnedFd,
}

impl Inotify {
    pub fn new() -> io::Result<Self> {
        let fd = unsafe { libc::inotify_init1(libc::IN_CLOEXEC) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: fd is a freshly returned, valid descriptor we own.
        Ok(Self {
            fd: unsafe { OwnedFd::from_raw_fd(fd) },
        })
    }

    /// Register one directory for watching.
    ///
    /// Fails with `ENOTDIR` for non-directories and `ENOENT` for paths
    /// that do not exist; the caller decides whether that is fatal.
    pub fn add_watch(&self, path: &Path) -> io::Result<WatchHandle> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;
        let wd =
            unsafe { libc::inotify_add_watch(self.fd.as_raw_fd(), c_path.as_ptr(), WATCH_MASK) };
        if wd < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(WatchHandle(wd))
    }

    /// Block until the kernel has events, then fill `buf` with one batch.
    ///
    /// Returns the number of bytes read. There is no timeout; a failed
    /// read is the event source's single fatal condition and is not
    /// retried.
    pub fn read_batch(&self, buf: &mut EventBuffer) -> io::Result<usize> {
        let n = unsafe {
            libc::read(
                self.fd.as_raw_fd(),
                buf.as_mut_ptr() as *mut libc::c_void,
                buf.capacity(),
            )
        };
        if n < 0 {
            buf.set_len(0);
            return Err(io::Error::last_os_error());
        }
        let n = n as usize;
        buf.set_len(n);
        Ok(n)
    }
}
