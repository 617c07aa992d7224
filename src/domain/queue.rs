//! Bounded FIFO work queues.
//!
//! A queue is created once at startup and lives as long as the process.
//! [`JobSender::enqueue`] waits while the queue is full, which is the only
//! backpressure in the system: a burst of creations stalls the creating
//! request instead of dropping jobs or growing memory. [`JobReceiver::dequeue`]
//! waits while the queue is empty.

use serde_json::json;
use tokio::sync::mpsc;

use crate::error::AppError;

/// Creates a bounded queue holding at most `capacity` pending jobs.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn job_queue<T>(capacity: usize) -> (JobSender<T>, JobReceiver<T>) {
    let (tx, rx) = mpsc::channel(capacity);
    (JobSender { tx }, JobReceiver { rx })
}

/// Producer handle. Cheap to clone; the queue closes when every sender is dropped.
#[derive(Debug)]
pub struct JobSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> Clone for JobSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> JobSender<T> {
    /// Appends a job, waiting for a free slot if the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the consumer side has shut down.
    pub async fn enqueue(&self, job: T) -> Result<(), AppError> {
        self.tx
            .send(job)
            .await
            .map_err(|_| AppError::internal("Work queue is closed", json!({})))
    }

    /// Free slots right now.
    pub fn available(&self) -> usize {
        self.tx.capacity()
    }

    pub fn max_capacity(&self) -> usize {
        self.tx.max_capacity()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer handle, owned by exactly one worker loop.
#[derive(Debug)]
pub struct JobReceiver<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> JobReceiver<T> {
    /// Takes the oldest job, waiting while the queue is empty.
    ///
    /// Returns `None` once every sender is dropped and the queue is drained.
    pub async fn dequeue(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}
