//! Redis-backed QR image store.

use super::error::{CacheError, CacheResult};
use crate::domain::ports::QrStore;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, Cmd, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Stores rendered QR images in Redis.
///
/// Images are written without an expiry and live until their record is
/// deleted.
///
/// Uses `ConnectionManager` for connection reuse. All operations are
/// fail-open: errors are logged, a failed read is a miss and a failed write
/// is dropped.
pub struct RedisQrStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisQrStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "qr:".to_string(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

/// Plain `SET` of an image, with no expiry.
fn set_command(redis_key: &str, image: Vec<u8>) -> Cmd {
    let mut cmd = redis::cmd("SET");
    cmd.arg(redis_key).arg(image);
    cmd
}

fn del_command(redis_key: &str) -> Cmd {
    let mut cmd = redis::cmd("DEL");
    cmd.arg(redis_key);
    cmd
}

#[async_trait]
impl QrStore for RedisQrStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<Vec<u8>>>(&redis_key).await {
            Ok(Some(image)) => {
                debug!("QR HIT: {}", key);
                Some(image)
            }
            Ok(None) => {
                debug!("QR MISS: {}", key);
                None
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                None
            }
        }
    }

    async fn put(&self, key: &str, image: Vec<u8>) {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        match set_command(&redis_key, image)
            .query_async::<()>(&mut conn)
            .await
        {
            Ok(()) => debug!("QR SET: {}", key),
            Err(e) => warn!("Redis SET error for {}: {}", key, e),
        }
    }

    async fn remove(&self, key: &str) {
        let redis_key = self.build_key(key);
        let mut conn = self.client.clone();

        match del_command(&redis_key).query_async::<()>(&mut conn).await {
            Ok(()) => debug!("QR DEL: {}", key),
            Err(e) => warn!("Redis DEL error for {}: {}", key, e),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
