//! Consumer draining the reachability queue.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::jobs::ReachabilityJob;
use crate::domain::ports::ReachabilityProbe;
use crate::domain::queue::JobReceiver;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::worker_pool::WorkerPool;

/// Probes each dequeued target and writes the status back into the store.
///
/// Runs until every sender of the queue is dropped. Each job runs once on a
/// pool slot; storage failures are logged and the job is dropped.
pub async fn run_reachability_worker<R, P>(
    mut jobs: JobReceiver<ReachabilityJob>,
    repository: Arc<R>,
    probe: Arc<P>,
    pool: WorkerPool,
) where
    R: ShortUrlRepository + ?Sized + 'static,
    P: ReachabilityProbe + ?Sized + 'static,
{
    while let Some(job) = jobs.dequeue().await {
        let repository = repository.clone();
        let probe = probe.clone();

        pool.submit(process_reachability_job(job, repository, probe))
            .await;
    }

    debug!("Reachability queue closed, worker exiting");
}

/// Runs a single probe and records its outcome.
pub async fn process_reachability_job<R, P>(job: ReachabilityJob, repository: Arc<R>, probe: Arc<P>)
where
    R: ShortUrlRepository + ?Sized,
    P: ReachabilityProbe + ?Sized,
{
    let status = probe.check(&job.target_url).await;
    debug!("Probed {} for {}: {}", job.target_url, job.key, status);

    if let Err(e) = repository
        .update_reachability_status(&job.key, status)
        .await
    {
        warn!("Failed to store reachability status for {}: {}", job.key, e);
    }
}
