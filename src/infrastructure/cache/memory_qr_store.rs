//! In-process QR image store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::ports::QrStore;

/// QR images kept in a concurrent map. Entries never expire.
#[derive(Default)]
pub struct InMemoryQrStore {
    images: DashMap<String, Vec<u8>>,
}

impl InMemoryQrStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QrStore for InMemoryQrStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.images.get(key).map(|image| image.value().clone())
    }

    async fn put(&self, key: &str, image: Vec<u8>) {
        debug!("QR stored: {} ({} bytes)", key, image.len());
        self.images.insert(key.to_string(), image);
    }

    async fn remove(&self, key: &str) {
        self.images.remove(key);
    }

    async fn health_check(&self) -> bool {
        true
    }
}
