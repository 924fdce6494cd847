// tests/live_watch.rs

//! End-to-end tests against the real inotify interface.

use std::fs::{self, File, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use umaskd::engine::{DaemonEvent, PolicyCore, Runtime};
use umaskd::fs::RealPermissions;
use umaskd::watch::{Inotify, WatchEntry, WatchRegistry, spawn_reader};
use umaskd_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::test]
async fn created_file_converges_to_the_policy_mode() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let inotify = Inotify::new()?;
    let handle = inotify.add_watch(dir.path())?;

    let mut registry = WatchRegistry::new();
    registry.insert(
        handle,
        WatchEntry {
            path: dir.path().to_path_buf(),
            min_mask: 0o644,
            max_mask: 0o022,
        },
    );

    let (tx, rx) = mpsc::channel(16);
    spawn_reader(inotify, tx.clone())?;

    let core = PolicyCore::new(registry, Arc::new(RealPermissions));
    let runtime_task = tokio::spawn(Runtime::new(core, rx).run());

    let target = dir.path().join("incoming.txt");
    let file = File::create(&target)?;
    file.set_permissions(Permissions::from_mode(0o600))?;
    drop(file);

    // Enforcement is idempotent, so whatever interleaving of the creation
    // event, our chmod, and the daemon's own echoes plays out, the file
    // must settle on 0711.
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let mode = fs::metadata(&target)?.permissions().mode() & 0o777;
        if mode == 0o711 {
            break;
        }
        if Instant::now() > deadline {
            panic!("file stuck at mode {mode:03o}, expected 711");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    tx.send(DaemonEvent::ShutdownRequested).await?;
    runtime_task.await??;
    Ok(())
}

#[test]
fn non_directory_registration_fails_without_poisoning_later_ones() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain");
    fs::write(&plain, b"not a directory").unwrap();

    let inotify = Inotify::new().unwrap();
    assert!(inotify.add_watch(&plain).is_err());
    assert!(inotify.add_watch(&dir.path().join("missing")).is_err());
    // A valid directory still registers after the failures.
    assert!(inotify.add_watch(dir.path()).is_ok());
}
