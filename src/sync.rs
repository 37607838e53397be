//! Best-effort position mirroring
//!
//! Moves commit locally first; the snapped position is then queued here
//! and a background worker posts it to `POST /api/layout/update`. Failures
//! are logged and dropped: local editing state is the source of truth for
//! the session and is never rolled back by the mirror.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, LayoutUpdateRequest};

/// Where queued position updates end up. The production sink is the
/// backend client; tests substitute an in-memory one.
pub trait UpdateSink: Send + 'static {
    fn submit(&self, update: &LayoutUpdateRequest) -> Result<(), ApiError>;
}

impl UpdateSink for ApiClient {
    fn submit(&self, update: &LayoutUpdateRequest) -> Result<(), ApiError> {
        self.update_layout_object(update)
    }
}

/// Handle to the background mirror worker.
///
/// Dropping the handle closes the queue, lets the worker drain whatever
/// is still pending, and joins it.
pub struct PositionSync {
    tx: Option<Sender<LayoutUpdateRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl PositionSync {
    /// Spawn the worker thread over a sink.
    pub fn spawn<S: UpdateSink>(sink: S) -> Self {
        let (tx, rx) = mpsc::channel::<LayoutUpdateRequest>();
        let worker = thread::spawn(move || {
            while let Ok(update) = rx.recv() {
                match sink.submit(&update) {
                    Ok(()) => debug!(object_id = %update.object_id, "position mirrored"),
                    Err(err) => {
                        warn!(object_id = %update.object_id, %err, "position sync failed")
                    }
                }
            }
        });
        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Queue one committed move. Never blocks on the network and never
    /// reports failure to the caller.
    pub fn enqueue(&self, update: LayoutUpdateRequest) {
        if let Some(tx) = &self.tx {
            if tx.send(update).is_err() {
                warn!("position sync worker is gone; update dropped");
            }
        }
    }
}

impl Drop for PositionSync {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
