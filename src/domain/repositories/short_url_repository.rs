//! Repository trait for short URL records.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Keyed storage for [`ShortUrl`] records.
///
/// `save` is an atomic insert-if-absent: two concurrent saves for the same
/// key never both succeed. The creation engine relies on this instead of a
/// separate lookup before writing.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Finds a record by key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Stores a new record if its key is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyAlreadyExists`] if a record with the same key is
    /// already stored. Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, record: ShortUrl) -> Result<ShortUrl, AppError>;

    /// Sets the reachability status of a record.
    ///
    /// Missing keys are ignored: the record may have been deleted while the
    /// probe was in flight.
    async fn update_reachability_status(&self, key: &str, status: u16) -> Result<(), AppError>;

    /// Returns the reachability status, `None` if unprobed or unknown key.
    async fn find_reachability_status(&self, key: &str) -> Result<Option<u16>, AppError>;

    /// Deletes a record. Returns `Ok(false)` if the key was not stored.
    async fn delete(&self, key: &str) -> Result<bool, AppError>;
}
