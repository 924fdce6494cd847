// src/watch/reader.rs

use std::io;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::engine::DaemonEvent;
use crate::watch::decode::{EventBuffer, decode_records};
use crate::watch::{DirEvent, Inotify};

/// Spawn the dedicated reader thread that owns the inotify instance.
///
/// The thread loops on the blocking read, decodes each batch, and forwards
/// the decoded events into the runtime channel. A failed read is forwarded
/// as [`DaemonEvent::SourceFailed`] and ends the thread; it is never
/// retried. The thread also ends quietly once the runtime side of the
/// channel is gone.
pub fn spawn_reader(
    inotify: Inotify,
    tx: mpsc::Sender<DaemonEvent>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("umaskd-reader".into())
        .spawn(move || reader_loop(inotify, tx))
}

fn reader_loop(inotify: Inotify, tx: mpsc::Sender<DaemonEvent>) {
    let mut buf = EventBuffer::new();

    loop {
        match inotify.read_batch(&mut buf) {
            Ok(_) => {
                let events = decode_batch(buf.filled());
                if events.is_empty() {
                    continue;
                }
                if tx.blocking_send(DaemonEvent::Batch(events)).is_err() {
                    debug!("runtime channel closed; reader exiting");
                    return;
                }
            }
            Err(err) => {
                let _ = tx.blocking_send(DaemonEvent::SourceFailed(err));
                return;
            }
        }
    }
}

/// Decode one filled buffer into owned events, in arrival order.
fn decode_batch(bytes: &[u8]) -> Vec<DirEvent> {
    let mut events = Vec::new();
    for record in decode_records(bytes) {
        match record {
            Ok(rec) => {
                if rec.mask & libc::IN_Q_OVERFLOW != 0 {
                    warn!("inotify queue overflowed; some events were lost");
                    continue;
                }
                if let Some(event) = DirEvent::from_record(&rec) {
                    events.push(event);
                }
            }
            Err(err) => {
                warn!("discarding malformed event buffer: {err}");
                break;
            }
        }
    }
    events
}
