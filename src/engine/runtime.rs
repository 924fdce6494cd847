// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::engine::DaemonEvent;
use crate::engine::core::PolicyCore;
use crate::errors::{Result, UmaskdError};

/// Drives the enforcement core from the daemon event channel.
///
/// This is a thin IO shell around [`PolicyCore`]: it drains batches in
/// arrival order and forwards each event to the core. There are only two
/// ways out of the loop: a failed read (fatal, returns an error) and a
/// shutdown request (clean exit). Once the source has failed there is no
/// path back into the loop.
pub struct Runtime {
    core: PolicyCore,
    event_rx: mpsc::Receiver<DaemonEvent>,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(core: PolicyCore, event_rx: mpsc::Receiver<DaemonEvent>) -> Self {
        Self { core, event_rx }
    }

    /// Main event loop.
    ///
    /// All events decoded from one read are processed fully, in kernel
    /// delivery order, before the next batch is received.
    pub async fn run(mut self) -> Result<()> {
        info!("umaskd runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("event channel closed; exiting");
                    break;
                }
            };

            match event {
                DaemonEvent::Batch(events) => {
                    debug!(count = events.len(), "processing event batch");
                    for ev in &events {
                        self.core.handle_event(ev)?;
                    }
                }
                DaemonEvent::SourceFailed(err) => {
                    error!("event stream read failed: {err}");
                    return Err(UmaskdError::ReadFailed(err));
                }
                DaemonEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        info!("runtime exiting");
        Ok(())
    }
}
