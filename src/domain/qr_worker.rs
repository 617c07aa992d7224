//! Consumer draining the QR queue.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::jobs::QrJob;
use crate::domain::ports::{QrRenderer, QrStore};
use crate::domain::queue::JobReceiver;
use crate::domain::worker_pool::WorkerPool;

/// Renders a QR image for each dequeued job and stores it by key.
///
/// Rendering failures are logged and dropped; a later read for that key
/// reports the QR as not available.
pub async fn run_qr_worker<Q, S>(
    mut jobs: JobReceiver<QrJob>,
    renderer: Arc<Q>,
    store: Arc<S>,
    pool: WorkerPool,
) where
    Q: QrRenderer + ?Sized + 'static,
    S: QrStore + ?Sized + 'static,
{
    while let Some(job) = jobs.dequeue().await {
        let renderer = renderer.clone();
        let store = store.clone();

        pool.submit(process_qr_job(job, renderer, store)).await;
    }

    debug!("QR queue closed, worker exiting");
}

/// Renders and stores a single QR image.
pub async fn process_qr_job<Q, S>(job: QrJob, renderer: Arc<Q>, store: Arc<S>)
where
    Q: QrRenderer + ?Sized,
    S: QrStore + ?Sized,
{
    match renderer.render(&job.short_url) {
        Ok(image) => {
            debug!("Rendered QR for {} ({} bytes)", job.key, image.len());
            store.put(&job.key, image).await;
        }
        Err(e) => warn!("Dropping QR job for {}: {}", job.key, e),
    }
}
