//! Debounced search session.
//!
//! Receives query updates from a channel, debounces them with a 500ms
//! window, then runs the filter and publishes the result list. A newer
//! update replaces the pending one, so superseded evaluations are cancelled,
//! never queued. Clearing the query bypasses the window entirely and empties
//! the published results on the same event.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::filter::{search, SearchHit};
use crate::models::CatalogEntry;

/// Debounce window between the last query update and evaluation.
pub const DEBOUNCE_DURATION: Duration = Duration::from_millis(500);

/// Handle to a running search session.
///
/// The session owns a worker task holding the read-only catalog entries.
/// Callers push query updates with [`update_query`](Self::update_query) and
/// observe the latest published result list through the watch handle from
/// [`results`](Self::results). The worker stops when the session is dropped.
pub struct SearchSession {
    queries: mpsc::UnboundedSender<String>,
    results: watch::Receiver<Vec<SearchHit>>,
    worker: JoinHandle<()>,
}

impl SearchSession {
    /// Spawn a session over the given catalog entries.
    pub fn spawn(entries: Vec<CatalogEntry>) -> Self {
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = watch::channel(Vec::new());
        let worker = tokio::spawn(run_worker(entries, query_rx, result_tx));

        Self {
            queries: query_tx,
            results: result_rx,
            worker,
        }
    }

    /// Push a query update.
    ///
    /// An empty string clears the published results immediately; anything
    /// else (re)starts the debounce window. Returns false if the worker has
    /// already stopped.
    pub fn update_query(&self, query: impl Into<String>) -> bool {
        self.queries.send(query.into()).is_ok()
    }

    /// Watch handle for the latest published result list.
    pub fn results(&self) -> watch::Receiver<Vec<SearchHit>> {
        self.results.clone()
    }

    /// Stop the worker and wait for it to finish.
    pub async fn shutdown(self) {
        let Self {
            queries, worker, ..
        } = self;
        drop(queries);
        let _ = worker.await;
    }
}

async fn run_worker(
    entries: Vec<CatalogEntry>,
    mut queries: mpsc::UnboundedReceiver<String>,
    results: watch::Sender<Vec<SearchHit>>,
) {
    debug!("Search session worker started over {} entries", entries.len());

    let mut pending: Option<String> = None;

    loop {
        if let Some(query) = pending.take() {
            tokio::select! {
                // A newer update replaces the pending query and restarts
                // the window; the superseded evaluation never runs.
                next = queries.recv() => match next {
                    Some(update) => pending = accept(update, &results),
                    None => break,
                },
                _ = tokio::time::sleep(DEBOUNCE_DURATION) => {
                    debug!("Debounce expired, evaluating query '{}'", query);
                    let _ = results.send(search(&entries, &query));
                }
            }
        } else {
            match queries.recv().await {
                Some(update) => pending = accept(update, &results),
                None => break,
            }
        }
    }

    debug!("Search session worker stopped");
}

/// Handle one query update: an empty query clears the published results
/// synchronously, bypassing the debounce timer; a non-empty query becomes
/// the pending evaluation.
fn accept(update: String, results: &watch::Sender<Vec<SearchHit>>) -> Option<String> {
    if update.is_empty() {
        let _ = results.send(Vec::new());
        None
    } else {
        Some(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry {
                name: "Bitcoin".to_string(),
                symbol: "BTC".to_string(),
                coin_market_cap_id: "1".to_string(),
                coin_gecko_id: Some("bitcoin".to_string()),
            },
            CatalogEntry {
                name: "Dogecoin".to_string(),
                symbol: "DOGE".to_string(),
                coin_market_cap_id: "74".to_string(),
                coin_gecko_id: Some("dogecoin".to_string()),
            },
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_evaluates_after_debounce_window() {
        let session = SearchSession::spawn(entries());
        let mut results = session.results();

        assert!(session.update_query("bit"));
        results.changed().await.unwrap();

        let hits = results.borrow_and_update().clone();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.name, "Bitcoin");

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_bypasses_debounce() {
        let session = SearchSession::spawn(entries());
        let mut results = session.results();

        // Both updates are queued before the worker observes either, so the
        // clear supersedes the pending evaluation.
        assert!(session.update_query("bit"));
        assert!(session.update_query(""));

        let start = tokio::time::Instant::now();
        results.changed().await.unwrap();

        assert!(results.borrow_and_update().is_empty());
        // The empty set was published without the debounce window elapsing.
        assert!(start.elapsed() < DEBOUNCE_DURATION);

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_updates_publish_only_the_last_query() {
        let session = SearchSession::spawn(entries());
        let mut results = session.results();

        assert!(session.update_query("bit"));
        assert!(session.update_query("doge"));

        results.changed().await.unwrap();
        let hits = results.borrow_and_update().clone();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.name, "Dogecoin");

        // The superseded "bit" evaluation was cancelled, not queued.
        assert!(!results.has_changed().unwrap());

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_query_publishes_empty_set() {
        let session = SearchSession::spawn(entries());
        let mut results = session.results();

        assert!(session.update_query("bi"));
        results.changed().await.unwrap();
        assert!(results.borrow_and_update().is_empty());

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_worker() {
        let session = SearchSession::spawn(entries());
        let results = session.results();
        session.shutdown().await;
        // The worker dropped the result sender on exit.
        assert!(results.has_changed().is_err());
    }
}
