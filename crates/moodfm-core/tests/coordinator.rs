//! Coordinator protocol tests: single-flight, result visibility, restart,
//! error degradation, and shutdown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use moodfm_core::coordinator::FetchCoordinator;
use moodfm_core::fetch::{FetchError, TrackSource};
use moodfm_core::mood::Mood;
use moodfm_core::track::Track;

/// Source that blocks inside the fetch until released, counting invocations.
struct GatedSource {
    calls: Arc<AtomicUsize>,
    release: Arc<Notify>,
    result: Vec<Track>,
}

impl GatedSource {
    fn new(result: Vec<Track>) -> (Self, Arc<AtomicUsize>, Arc<Notify>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());
        let source = Self {
            calls: Arc::clone(&calls),
            release: Arc::clone(&release),
            result,
        };
        (source, calls, release)
    }
}

impl TrackSource for GatedSource {
    async fn top_tracks(&self, _mood: Mood) -> Result<Vec<Track>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(self.result.clone())
    }
}

/// Succeeds on the first call, fails on every later one.
struct FlakySource {
    calls: Arc<AtomicUsize>,
}

impl TrackSource for FlakySource {
    async fn top_tracks(&self, _mood: Mood) -> Result<Vec<Track>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(vec![Track::new("First", "Artist")])
        } else {
            Err(FetchError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

async fn wait_until_idle<S: TrackSource>(coord: &FetchCoordinator<S>) {
    while coord.is_busy() {
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
}

#[tokio::test]
async fn requests_while_busy_are_dropped() {
    let expected = vec![Track::new("Hey Jude", "The Beatles")];
    let (source, calls, release) = GatedSource::new(expected.clone());
    let mut coord = FetchCoordinator::new(source);

    coord.request_fetch(Mood::Happy).await;
    assert!(coord.is_busy());

    // Further requests while in flight neither queue nor cancel.
    for _ in 0..5 {
        coord.request_fetch(Mood::Sad).await;
    }

    release.notify_one();
    coord.shutdown().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(coord.store().snapshot(), expected);
}

#[tokio::test]
async fn busy_false_implies_new_results_visible() {
    let expected = vec![Track::new("A", "1"), Track::new("B", "2")];
    let (source, _calls, release) = GatedSource::new(expected.clone());
    let mut coord = FetchCoordinator::new(source);
    let store = coord.store();

    coord.request_fetch(Mood::Chill).await;
    // Nothing published while the fetch is still gated.
    assert!(store.snapshot().is_empty());

    release.notify_one();
    // Poll the way the UI does: the first time busy reads false, the new
    // set must already be there.
    wait_until_idle(&coord).await;
    assert_eq!(store.snapshot(), expected);

    coord.shutdown().await;
}

#[tokio::test]
async fn finished_task_is_joined_before_respawn() {
    let (source, calls, release) = GatedSource::new(vec![Track::new("X", "Y")]);
    let mut coord = FetchCoordinator::new(source);

    coord.request_fetch(Mood::Happy).await;
    release.notify_one();
    wait_until_idle(&coord).await;

    // The previous task has finished but is unjoined; the next request joins
    // it and starts a fresh fetch.
    coord.request_fetch(Mood::Energetic).await;
    assert!(coord.is_busy());
    release.notify_one();
    coord.shutdown().await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_fetch_replaces_with_empty_set() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut coord = FetchCoordinator::new(FlakySource {
        calls: Arc::clone(&calls),
    });
    let store = coord.store();

    coord.request_fetch(Mood::Relaxed).await;
    wait_until_idle(&coord).await;
    assert_eq!(store.snapshot(), vec![Track::new("First", "Artist")]);

    // The second fetch errors; the old results must not survive it.
    coord.request_fetch(Mood::Relaxed).await;
    wait_until_idle(&coord).await;
    assert!(store.snapshot().is_empty());

    coord.shutdown().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn shutdown_waits_for_running_fetch() {
    let expected = vec![Track::new("Slow", "Song")];
    let (source, _calls, release) = GatedSource::new(expected.clone());
    let mut coord = FetchCoordinator::new(source);
    let store = coord.store();

    coord.request_fetch(Mood::Excited).await;

    // Release the gate only after shutdown has started waiting.
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        release.notify_one();
    });

    coord.shutdown().await;
    assert!(!coord.is_busy());
    assert_eq!(store.snapshot(), expected);

    // Idempotent: a second shutdown has nothing left to join.
    coord.shutdown().await;
}
