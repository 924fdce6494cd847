// src/daemon.rs

//! Process daemonization.
//!
//! Performed once, after the configuration is loaded and before any watch
//! is registered: fork (parent exits), fresh session, working directory at
//! the filesystem root, stdio on /dev/null.

use std::io;

use anyhow::{Context, Result};

/// Detach from the controlling terminal.
pub fn daemonize() -> Result<()> {
    // SAFETY: still single-threaded here; the tokio runtime and the reader
    // thread are only started in the child.
    let pid = unsafe { libc::fork() };
    if pid < 0 {
        return Err(io::Error::last_os_error()).context("forking daemon process");
    }
    if pid > 0 {
        // Parent: the child carries on as the daemon.
        std::process::exit(0);
    }

    unsafe { libc::umask(0) };

    if unsafe { libc::setsid() } < 0 {
        return Err(io::Error::last_os_error()).context("creating new session");
    }

    if unsafe { libc::chdir(c"/".as_ptr()) } < 0 {
        return Err(io::Error::last_os_error()).context("changing directory to /");
    }

    redirect_stdio_to_devnull()
}

/// Point the standard descriptors at /dev/null.
fn redirect_stdio_to_devnull() -> Result<()> {
    let fd = unsafe { libc::open(c"/dev/null".as_ptr(), libc::O_RDWR) };
    if fd < 0 {
        return Err(io::Error::last_os_error()).context("opening /dev/null");
    }
    for target in [libc::STDIN_FILENO, libc::STDOUT_FILENO, libc::STDERR_FILENO] {
        if unsafe { libc::dup2(fd, target) } < 0 {
            return Err(io::Error::last_os_error()).context("redirecting standard descriptor");
        }
    }
    if fd > libc::STDERR_FILENO {
        unsafe { libc::close(fd) };
    }
    Ok(())
}
