//! Debounced re-translation of dynamically inserted content.
//!
//! The observer subscribes to the document's change records. Each relevant
//! record resets a single pending timer; when the timer expires the whole
//! page is re-translated with the current preference. Records produced by
//! that re-run are discarded so the observer does not trigger itself.

use std::sync::Arc;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::dom::MutationRecord;
use crate::page::PageState;

/// Running observer task.
#[derive(Debug)]
pub struct ObserverHandle {
    /// Background task
    task: JoinHandle<()>,
    /// Completed re-runs
    reruns: Arc<AtomicUsize>,
}

impl ObserverHandle {
    /// Number of re-translation passes run so far.
    #[must_use]
    pub fn reruns(&self) -> usize {
        self.reruns.load(Ordering::SeqCst)
    }

    /// Stops observing. A pending timer is dropped without re-running.
    pub fn disconnect(self) {
        self.task.abort();
    }
}

/// Spawns the change observer for a page.
#[derive(Debug, Clone, Copy)]
pub struct ChangeObserver;

impl ChangeObserver {
    /// Subscribes to `state.document` and starts the observer task.
    ///
    /// The quiet period comes from `observer.debounceMs`. Only one observer
    /// per document is active; spawning another replaces the previous
    /// subscription.
    pub async fn spawn(state: &PageState) -> ObserverHandle {
        let (records, observed, debounce) = {
            let (mut document, context) = state.lock_all().await;
            let settings = context.translator().settings();
            let observed = settings.translated_attributes.clone();
            (document.observe(), observed, settings.observer.debounce())
        };
        let reruns = Arc::new(AtomicUsize::new(0));
        let task = tokio::spawn(run(state.clone(), records, observed, debounce, Arc::clone(&reruns)));
        tracing::debug!(?debounce, "Change observer started");
        ObserverHandle { task, reruns }
    }
}

/// Waits for a record passing the attribute filter. `false` once the channel closes.
async fn next_relevant(
    records: &mut UnboundedReceiver<MutationRecord>,
    observed: &[String],
) -> bool {
    while let Some(record) = records.recv().await {
        if record.matches_attributes(observed) {
            return true;
        }
    }
    false
}

/// Observer loop.
async fn run(
    state: PageState,
    mut records: UnboundedReceiver<MutationRecord>,
    observed: Vec<String>,
    debounce: Duration,
    reruns: Arc<AtomicUsize>,
) {
    while next_relevant(&mut records, &observed).await {
        let timer = tokio::time::sleep(debounce);
        tokio::pin!(timer);
        loop {
            tokio::select! {
                () = &mut timer => break,
                record = records.recv() => match record {
                    Some(record) if record.matches_attributes(&observed) => {
                        timer.as_mut().reset(Instant::now() + debounce);
                    }
                    Some(_) => {}
                    None => return,
                },
            }
        }

        let (mut document, mut context) = state.lock_all().await;
        let report = context.reapply(&mut document);
        // 再適用で発生した自分自身の変更は捨てる
        let mut discarded = 0_usize;
        while records.try_recv().is_ok() {
            discarded += 1;
        }
        drop(context);
        drop(document);

        reruns.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(changes = report.total(), discarded, "Observer re-applied language");
    }
    tracing::debug!("Change observer stopped");
}
