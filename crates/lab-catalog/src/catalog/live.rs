//! Push-based catalog view with debounced criteria updates.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_stream::wrappers::WatchStream;

use super::{GroupedResult, run_pipeline};
use crate::config::Config;
use crate::models::{FilterCriteria, Paper};

/// Result of one recompute.
#[derive(Debug, Clone)]
pub struct CatalogUpdate {
    /// Increments on every recompute; the initial view is revision 0.
    pub revision: u64,

    /// Grouped view, or the user-facing error message.
    pub outcome: Result<Arc<GroupedResult>, String>,
}

impl CatalogUpdate {
    fn compute(revision: u64, papers: &[Paper], criteria: &FilterCriteria) -> Self {
        let outcome = run_pipeline(papers, criteria).map(Arc::new).map_err(|e| {
            if e.is_user_input() {
                tracing::debug!(revision, error = %e, "catalog recompute rejected input");
            } else {
                tracing::warn!(revision, error = %e, "catalog recompute failed");
            }
            e.to_user_message()
        });
        Self { revision, outcome }
    }

    /// Grouped view if the recompute succeeded.
    #[must_use]
    pub fn groups(&self) -> Option<&GroupedResult> {
        self.outcome.as_deref().ok()
    }
}

/// Catalog view that recomputes in a background task.
///
/// Paper updates recompute immediately. Criteria updates wait for the
/// configured quiescence window; edits arriving inside the window restart it,
/// so a burst of keystrokes yields a single recompute. A paper update during a
/// pending window recomputes at once with the latest criteria and closes the
/// window. Only the latest result is retained.
///
/// The task stops when the `LiveCatalog` is dropped or shut down.
pub struct LiveCatalog {
    papers_tx: watch::Sender<Arc<Vec<Paper>>>,
    criteria_tx: watch::Sender<FilterCriteria>,
    updates_rx: watch::Receiver<CatalogUpdate>,
    handle: JoinHandle<()>,
}

impl LiveCatalog {
    /// Compute the initial view and spawn the recompute task.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn(config: &Config, papers: Vec<Paper>, criteria: FilterCriteria) -> Self {
        let papers = Arc::new(papers);
        let initial = CatalogUpdate::compute(0, &papers, &criteria);

        let (papers_tx, papers_rx) = watch::channel(papers);
        let (criteria_tx, criteria_rx) = watch::channel(criteria);
        let (updates_tx, updates_rx) = watch::channel(initial);

        let handle = tokio::spawn(recompute_loop(papers_rx, criteria_rx, updates_tx, config.debounce));

        Self { papers_tx, criteria_tx, updates_rx, handle }
    }

    /// Replace the paper collection.
    pub fn set_papers(&self, papers: Vec<Paper>) {
        self.papers_tx.send_replace(Arc::new(papers));
    }

    /// Replace the filter criteria.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.criteria_tx.send_replace(criteria);
    }

    /// Latest published update.
    #[must_use]
    pub fn latest(&self) -> CatalogUpdate {
        self.updates_rx.borrow().clone()
    }

    /// Receiver notified on every recompute.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CatalogUpdate> {
        self.updates_rx.clone()
    }

    /// Stream of updates, starting with the current one.
    #[must_use]
    pub fn updates(&self) -> WatchStream<CatalogUpdate> {
        WatchStream::new(self.updates_rx.clone())
    }

    /// Stop the recompute task and wait for it to finish.
    pub async fn shutdown(self) {
        let Self { papers_tx, criteria_tx, handle, .. } = self;
        drop(papers_tx);
        drop(criteria_tx);
        if let Err(e) = handle.await {
            tracing::warn!(error = %e, "live catalog task ended abnormally");
        }
    }
}

async fn recompute_loop(
    mut papers_rx: watch::Receiver<Arc<Vec<Paper>>>,
    mut criteria_rx: watch::Receiver<FilterCriteria>,
    updates_tx: watch::Sender<CatalogUpdate>,
    debounce: Duration,
) {
    let mut revision = 0;
    // Set while a criteria change is waiting out the quiescence window
    let mut deadline: Option<Instant> = None;

    loop {
        let settled = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        let recompute = tokio::select! {
            changed = papers_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                true
            }
            changed = criteria_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                deadline = Some(Instant::now() + debounce);
                false
            }
            () = settled => true,
        };
        if !recompute {
            continue;
        }

        // A paper update also applies any criteria still inside the window
        deadline = None;
        revision += 1;
        let papers = papers_rx.borrow_and_update().clone();
        let criteria = criteria_rx.borrow_and_update().clone();
        updates_tx.send_replace(CatalogUpdate::compute(revision, &papers, &criteria));
    }

    tracing::debug!(revision, "live catalog stopped");
}
