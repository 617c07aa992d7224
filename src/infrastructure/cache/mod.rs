//! Byte stores for rendered QR images.
//!
//! Both implement [`crate::domain::ports::QrStore`]:
//! - [`RedisQrStore`] - Redis-backed store without expiry, used when `REDIS_URL` is set
//! - [`InMemoryQrStore`] - Process-local store

mod error;
mod memory_qr_store;
mod redis_qr_store;

pub use error::{CacheError, CacheResult};
pub use memory_qr_store::InMemoryQrStore;
pub use redis_qr_store::RedisQrStore;
