//! Short URL creation, deduplication and lookup.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{ShortUrl, ShortUrlProperties};
use crate::domain::ports::{KeyHasher, QrStore, UrlValidator};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Service deciding whether a creation request stores a new record,
/// returns an existing one, or is rejected.
///
/// A URL may have exactly one base registration and exactly one QR-enabled
/// registration. Requesting QR twice is rejected so the same QR asset is
/// never rendered twice.
pub struct ShortUrlService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
    validator: Arc<dyn UrlValidator>,
    hasher: Arc<dyn KeyHasher>,
    qr_store: Option<Arc<dyn QrStore>>,
}

impl<R: ShortUrlRepository + ?Sized> ShortUrlService<R> {
    /// Creates a new short URL service.
    pub fn new(
        repository: Arc<R>,
        validator: Arc<dyn UrlValidator>,
        hasher: Arc<dyn KeyHasher>,
    ) -> Self {
        Self {
            repository,
            validator,
            hasher,
            qr_store: None,
        }
    }

    /// Clears rendered QR images from `store` when a record is deleted.
    pub fn with_qr_store(mut self, store: Arc<dyn QrStore>) -> Self {
        self.qr_store = Some(store);
        self
    }

    /// Creates (or returns) the short URL for `url`.
    ///
    /// # Decision
    ///
    /// The existing record is looked up at the derived hash of `url`, never
    /// at the alias:
    ///
    /// Surrounding whitespace is trimmed from `url` before any other step.
    ///
    /// - No record: a new one is stored at the alias, or at the hash.
    /// - Record for a different target: rejected. Its key was taken as an
    ///   alias and the record is never returned or upgraded for `url`.
    /// - Record with QR enabled: rejected, the URL is fully registered.
    /// - Record without QR, request asks for QR: a QR-upgrade record is stored
    ///   at the alias, or at the QR key derived from the hash. It keeps the
    ///   original `safe` flag.
    /// - Record without QR, request without QR: the record is returned as is.
    ///
    /// Every store is an atomic insert-if-absent, so concurrent requests for
    /// one key cannot both succeed.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the validator rejects `url`
    /// - [`AppError::AliasContainsSlash`] if the alias contains `/`
    /// - [`AppError::KeyAlreadyExists`] on a taken key or a repeated QR request
    /// - [`AppError::Internal`] on storage errors
    pub async fn create(
        &self,
        url: &str,
        properties: ShortUrlProperties,
    ) -> Result<ShortUrl, AppError> {
        let url = url.trim();

        if !self.validator.is_valid(url) {
            return Err(AppError::invalid_url(url));
        }

        if let Some(alias) = properties.effective_alias()
            && !self.validator.alias_has_no_slash(alias)
        {
            return Err(AppError::alias_contains_slash(alias));
        }

        let hash = self.hasher.hash(url);

        let Some(existing) = self.repository.find_by_key(&hash).await? else {
            let key = properties
                .effective_alias()
                .map_or_else(|| hash.clone(), str::to_string);
            debug!("Registering {} under {}", url, key);
            return self
                .repository
                .save(ShortUrl::new(key, url.to_string(), &properties))
                .await;
        };

        if existing.target_url != url || existing.qr_enabled {
            return Err(AppError::key_already_exists(hash));
        }

        if !properties.qr_enabled {
            return Ok(existing);
        }

        let key = properties
            .effective_alias()
            .map_or_else(|| self.hasher.qr_key(&hash), str::to_string);
        debug!("QR upgrade of {} under {}", url, key);

        let upgrade = ShortUrl {
            safe: existing.safe,
            ..ShortUrl::new(key, url.to_string(), &properties)
        };
        self.repository.save(upgrade).await
    }

    /// Resolves a key to its stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this key.
    pub async fn redirect_to(&self, key: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "key": key })))
    }

    /// Returns the last probed reachability status of a key.
    ///
    /// `Ok(None)` means the key exists but has not been probed yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this key.
    pub async fn reachability_status(&self, key: &str) -> Result<Option<u16>, AppError> {
        self.redirect_to(key).await?;
        self.repository.find_reachability_status(key).await
    }

    /// Deletes a record by key, together with its QR image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this key.
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        if !self.repository.delete(key).await? {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "key": key }),
            ));
        }

        if let Some(store) = &self.qr_store {
            store.remove(key).await;
        }

        Ok(())
    }
}
