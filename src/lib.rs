// src/lib.rs

pub mod cli;
pub mod config;
pub mod daemon;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod watch;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::engine::{DaemonEvent, PolicyCore, Runtime};
use crate::errors::Result;
use crate::fs::RealPermissions;
use crate::watch::{Inotify, WatchEntry, WatchRegistry};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - (optional) daemonization
/// - watch registration
/// - the reader thread and the runtime loop
/// - Ctrl-C handling
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.file)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    // Detach before anything async exists; the forked child owns the
    // runtime and the reader thread.
    if args.daemon {
        daemon::daemonize()?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_daemon(cfg))
}

async fn run_daemon(cfg: ConfigFile) -> Result<()> {
    let inotify = Inotify::new()?;

    // Init: register each configured directory. A directory that cannot be
    // watched is reported and skipped; the rest still register.
    let mut registry = WatchRegistry::new();
    for rule in &cfg.dirs {
        match inotify.add_watch(&rule.path) {
            Ok(handle) => {
                info!(
                    "watching {} with minimum {:04o} and maximum {:04o}",
                    rule.path.display(),
                    rule.min_mask,
                    rule.max_mask
                );
                registry.insert(
                    handle,
                    WatchEntry {
                        path: rule.path.clone(),
                        min_mask: rule.min_mask,
                        max_mask: rule.max_mask,
                    },
                );
            }
            Err(err) => warn!("cannot watch {}: {err}", rule.path.display()),
        }
    }

    if registry.is_empty() {
        warn!("no directories are being watched");
    }

    // Runtime event channel.
    let (tx, rx) = mpsc::channel::<DaemonEvent>(64);

    // The reader thread takes sole ownership of the inotify instance.
    let _reader = watch::spawn_reader(inotify, tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(DaemonEvent::ShutdownRequested).await;
        });
    }

    let core = PolicyCore::new(registry, Arc::new(RealPermissions));
    Runtime::new(core, rx).run().await
}

/// Dry-run output: print the validated watch table.
fn print_dry_run(cfg: &ConfigFile) {
    println!("umaskd dry-run");
    println!("directories ({}):", cfg.dirs.len());
    for rule in &cfg.dirs {
        println!(
            "  - {}  min {:04o}  max {:04o}",
            rule.path.display(),
            rule.min_mask,
            rule.max_mask
        );
    }
}
