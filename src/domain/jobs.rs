//! Post-processing jobs placed on the work queues.
//!
//! Each job is consumed exactly once. There is no retry counter and no
//! dead-letter path: a failed job leaves an observable terminal state
//! (non-2xx reachability status, absent QR bytes) and is dropped.

/// Probe `target_url` and store the outcome under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityJob {
    pub target_url: String,
    pub key: String,
}

/// Render a QR image for `short_url` and store it under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrJob {
    pub key: String,
    pub short_url: String,
}
