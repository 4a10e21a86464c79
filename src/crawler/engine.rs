//! Traversal engine: the concurrent driver of a crawl run
//!
//! The engine fans work out through an explicit job queue instead of
//! recursive spawning: a dispatcher loop pulls `{address, remaining_depth}`
//! jobs off an unbounded channel and spawns one task per job, with a
//! semaphore bounding how many fetches are in flight at once. Each task
//! claims its address, fetches it, records the result, and enqueues the
//! page's children at one less depth.
//!
//! Every job is registered with the completion tracker before it is
//! enqueued and completed on every exit path, so the tracker reading idle
//! means the queue is drained, no task is running, and the stores are
//! stable for rendering and metrics.

use crate::crawler::Fetch;
use crate::state::{AdjacencyStore, CompletionTracker, CrawlState, StateStore};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::sync::Semaphore;

/// One unit of crawl work
#[derive(Debug)]
struct Job {
    address: String,
    remaining_depth: u32,
}

/// Concurrent traversal scheduler
///
/// Owns the shared stores for one crawl run and drives the fetch contract
/// over the discovered link graph. Per-address failures are recorded in the
/// state store and stop only that branch; the engine itself has no fatal
/// errors.
pub struct Crawler<F> {
    fetcher: Arc<F>,
    states: Arc<StateStore>,
    adjacency: Arc<AdjacencyStore>,
    tracker: Arc<CompletionTracker>,
    limiter: Arc<Semaphore>,
}

impl<F: Fetch + 'static> Crawler<F> {
    /// Creates an engine with fresh stores
    ///
    /// `max_concurrent_fetches` bounds simultaneously in-flight fetches.
    pub fn new(fetcher: F, max_concurrent_fetches: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            states: Arc::new(StateStore::new()),
            adjacency: Arc::new(AdjacencyStore::new()),
            tracker: Arc::new(CompletionTracker::new()),
            limiter: Arc::new(Semaphore::new(max_concurrent_fetches)),
        }
    }

    /// The per-address state store of this run
    pub fn states(&self) -> &StateStore {
        &self.states
    }

    /// The link graph recorded by this run
    pub fn adjacency(&self) -> &AdjacencyStore {
        &self.adjacency
    }

    /// Clears both stores between independent runs (tests and benchmarks)
    pub fn clear(&self) {
        self.states.clear();
        self.adjacency.clear();
    }

    /// Crawls from `seed` down to `max_depth` and returns once every
    /// spawned unit of work has finished
    ///
    /// On return the stores are stable: every claimed address has reached
    /// `Completed` or `Failed`.
    pub async fn run(&self, seed: &str, max_depth: u32) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();

        self.enqueue(
            &tx,
            Job {
                address: seed.to_string(),
                remaining_depth: max_depth,
            },
        );

        loop {
            tokio::select! {
                biased;

                Some(job) = rx.recv() => {
                    self.spawn_worker(job, tx.clone());
                }

                _ = self.tracker.wait_idle() => break,
            }
        }

        tracing::debug!(
            "Crawl from {} finished: {} addresses claimed, {} adjacency entries",
            seed,
            self.states.len(),
            self.adjacency.len()
        );
    }

    /// Registers a job with the tracker, then queues it
    ///
    /// Registration must precede the send so the pending count never reads
    /// zero while a job sits in the channel.
    fn enqueue(&self, tx: &UnboundedSender<Job>, job: Job) {
        self.tracker.register();
        if tx.send(job).is_err() {
            self.tracker.complete();
        }
    }

    fn spawn_worker(&self, job: Job, tx: UnboundedSender<Job>) {
        let fetcher = Arc::clone(&self.fetcher);
        let states = Arc::clone(&self.states);
        let adjacency = Arc::clone(&self.adjacency);
        let tracker = Arc::clone(&self.tracker);
        let limiter = Arc::clone(&self.limiter);

        tokio::spawn(async move {
            process_job(job, fetcher, states, adjacency, &tracker, limiter, tx).await;
            // Guaranteed release: every exit path of process_job funnels here.
            tracker.complete();
        });
    }
}

/// Processes one claimed-or-skipped address
async fn process_job<F: Fetch>(
    job: Job,
    fetcher: Arc<F>,
    states: Arc<StateStore>,
    adjacency: Arc<AdjacencyStore>,
    tracker: &CompletionTracker,
    limiter: Arc<Semaphore>,
    tx: UnboundedSender<Job>,
) {
    if job.remaining_depth == 0 {
        return;
    }

    // Dedup boundary: losing the claim means another task owns this address.
    if !states.try_claim(&job.address) {
        return;
    }

    let _permit = match limiter.acquire_owned().await {
        Ok(permit) => permit,
        // The semaphore is never closed while the engine runs.
        Err(_) => return,
    };

    match fetcher.fetch(&job.address).await {
        Ok(children) => {
            states.set_state(&job.address, CrawlState::Completed);
            adjacency.record(&job.address, children.clone());

            for child in children {
                tracker.register();
                let sent = tx.send(Job {
                    address: child,
                    remaining_depth: job.remaining_depth - 1,
                });
                if sent.is_err() {
                    tracker.complete();
                }
            }
        }
        Err(e) => {
            tracing::warn!("Unable to fetch {}: {}", job.address, e);
            states.set_state(&job.address, CrawlState::Failed);
        }
    }
}
