//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`ports`] - Hashing, validation, probing and QR collaborator traits
//! - [`jobs`] / [`queue`] - Post-processing jobs and the bounded queues carrying them
//! - [`worker_pool`] - Bounded task pool shared by the workers
//! - [`reachability_worker`] / [`qr_worker`] - Long-running queue consumers
//!
//! # Post-processing Flow
//!
//! 1. A short URL is created by [`crate::application::services::ShortUrlService`]
//! 2. [`jobs::ReachabilityJob`] (and [`jobs::QrJob`] when requested) are enqueued
//! 3. The workers dequeue in FIFO order and run each job once on the pool
//! 4. Results land in the store (reachability status) or the QR byte store

pub mod entities;
pub mod jobs;
pub mod ports;
pub mod qr_worker;
pub mod queue;
pub mod reachability_worker;
pub mod repositories;
pub mod worker_pool;
