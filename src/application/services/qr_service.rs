//! Reads of rendered QR images.

use std::sync::Arc;

use serde_json::json;

use crate::domain::ports::QrStore;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

pub struct QrService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
    store: Arc<dyn QrStore>,
}

impl<R: ShortUrlRepository + ?Sized> QrService<R> {
    pub fn new(repository: Arc<R>, store: Arc<dyn QrStore>) -> Self {
        Self { repository, store }
    }

    /// Returns the rendered QR image for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the key is unknown, and
    /// [`AppError::QrNotAvailable`] if the record never requested a QR or the
    /// worker has not rendered it yet.
    pub async fn get_qr(&self, key: &str) -> Result<Vec<u8>, AppError> {
        let record = self
            .repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "key": key })))?;

        if !record.qr_enabled {
            return Err(AppError::qr_not_available(key));
        }

        self.store
            .get(key)
            .await
            .ok_or_else(|| AppError::qr_not_available(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ShortUrl, ShortUrlProperties};
    use crate::domain::ports::MockQrStore;
    use crate::domain::repositories::MockShortUrlRepository;

    fn record(key: &str, qr_enabled: bool) -> ShortUrl {
        ShortUrl::new(
            key.to_string(),
            "https://example.com/".to_string(),
            &ShortUrlProperties {
                qr_enabled,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_returns_stored_image() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_key()
            .returning(|k| Ok(Some(record(k, true))));
        let mut store = MockQrStore::new();
        store
            .expect_get()
            .withf(|k| k == "promo")
            .returning(|_| Some(b"<svg/>".to_vec()));

        let service = QrService::new(Arc::new(repo), Arc::new(store));
        assert_eq!(service.get_qr("promo").await.unwrap(), b"<svg/>");
    }

    #[tokio::test]
    async fn test_unknown_key() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_key().returning(|_| Ok(None));

        let service = QrService::new(Arc::new(repo), Arc::new(MockQrStore::new()));
        let result = service.get_qr("nope").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_record_without_qr() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_key()
            .returning(|k| Ok(Some(record(k, false))));

        let service = QrService::new(Arc::new(repo), Arc::new(MockQrStore::new()));
        let result = service.get_qr("0f115db0").await;

        assert!(matches!(result, Err(AppError::QrNotAvailable { .. })));
    }

    #[tokio::test]
    async fn test_image_not_rendered_yet() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_key()
            .returning(|k| Ok(Some(record(k, true))));
        let mut store = MockQrStore::new();
        store.expect_get().returning(|_| None);

        let service = QrService::new(Arc::new(repo), Arc::new(store));
        let result = service.get_qr("promo").await;

        assert!(matches!(result, Err(AppError::QrNotAvailable { .. })));
    }
}
