//! FetchCoordinator — single-flight execution of the background track fetch.
//!
//! Protocol:
//! - `request_fetch` is a no-op while a fetch is running. Otherwise it joins
//!   the finished previous task (reclaiming its resources) and spawns a new
//!   one that captures the mood by value.
//! - The task replaces the ResultStore wholesale, then clears the busy flag
//!   with Release ordering; a reader that sees `busy == false` through the
//!   Acquire load in `is_busy` therefore also sees the new set.
//! - There is no cancellation: a running fetch always completes (the HTTP
//!   client's timeout bounds it), and requests made meanwhile are dropped,
//!   not queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::fetch::TrackSource;
use crate::mood::Mood;
use crate::results::ResultStore;

pub struct FetchCoordinator<S: TrackSource> {
    source: Arc<S>,
    store: Arc<ResultStore>,
    busy: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<S: TrackSource> FetchCoordinator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            store: Arc::new(ResultStore::new()),
            busy: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// The store this coordinator publishes results into.
    pub fn store(&self) -> Arc<ResultStore> {
        Arc::clone(&self.store)
    }

    /// Whether a fetch task is currently executing.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start a background fetch for `mood` unless one is already running.
    ///
    /// Calls made while busy are dropped — they neither queue nor cancel the
    /// in-flight fetch. The only await here reclaims an already-finished
    /// previous task, so it returns immediately.
    pub async fn request_fetch(&mut self, mood: Mood) {
        if self.busy.load(Ordering::Acquire) {
            debug!("fetch already in flight, dropping request for {}", mood);
            return;
        }

        // busy was false, so any previous task has finished its work; this
        // join only releases the old task's resources.
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("previous fetch task failed to join: {}", e);
            }
        }

        self.busy.store(true, Ordering::Release);

        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let busy = Arc::clone(&self.busy);
        self.handle = Some(tokio::spawn(async move {
            let tracks = match source.top_tracks(mood).await {
                Ok(tracks) => {
                    debug!("fetched {} tracks for {}", tracks.len(), mood);
                    tracks
                }
                Err(e) => {
                    warn!("fetch for {} failed: {}", mood, e);
                    Vec::new()
                }
            };
            // Replace before clearing busy: the Release store pairs with the
            // Acquire load in is_busy, so busy == false implies the new set
            // is visible. A failed fetch still replaces, with an empty set.
            store.replace(tracks);
            busy.store(false, Ordering::Release);
        }));
    }

    /// Wait for any live fetch task to finish, then release it. Idempotent.
    /// Must run before tearing down anything the task might still touch.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("fetch task failed to join during shutdown: {}", e);
            }
        }
    }
}
