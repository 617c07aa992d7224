//! Bounded pool of concurrent tasks.
//!
//! A pool is a semaphore in front of `tokio::spawn`. At most `size` submitted
//! tasks run at once. Submitting to a saturated pool waits for a slot, so a
//! slow consumer propagates backpressure to whoever feeds it.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Creates a pool running at most `size` tasks concurrently.
    pub fn new(size: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Spawns `task` once a slot is free and returns its handle.
    ///
    /// The slot is released when the task completes, panics or is aborted.
    pub async fn submit<F>(&self, task: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .expect("worker pool semaphore is never closed");

        tokio::spawn(async move {
            let _permit = permit;
            task.await
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Slots not currently held by a running task.
    pub fn idle(&self) -> usize {
        self.permits.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_never_exceeds_size() {
        let pool = WorkerPool::new(3);
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..12 {
            let running = running.clone();
            let peak = peak.clone();
            handles.push(
                pool.submit(async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                })
                .await,
            );
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(pool.idle(), 3);
    }

    #[tokio::test]
    async fn test_slot_released_after_panic() {
        let pool = WorkerPool::new(1);

        let handle = pool.submit(async { panic!("boom") }).await;
        assert!(handle.await.is_err());

        let handle = pool.submit(async { 42 }).await;
        assert_eq!(handle.await.unwrap(), 42);
    }
}
