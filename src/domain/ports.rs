//! Collaborator contracts consumed by the core.
//!
//! Each trait has one production implementation (see `crate::utils` and
//! `crate::infrastructure`) and a `mockall` mock under test.

use async_trait::async_trait;

/// Derives the short key for a URL.
///
/// Must be deterministic: the same URL always yields the same key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyHasher: Send + Sync {
    fn hash(&self, url: &str) -> String;

    /// Key used for the QR-enabled registration of a URL when no alias is given.
    ///
    /// Must never equal `hash(url)` for any URL.
    fn qr_key(&self, hash: &str) -> String {
        format!("{hash}q")
    }
}

/// Syntactic and policy checks on candidate URLs and aliases.
#[cfg_attr(test, mockall::automock)]
pub trait UrlValidator: Send + Sync {
    fn is_valid(&self, url: &str) -> bool;

    fn alias_has_no_slash(&self, alias: &str) -> bool {
        !alias.contains('/')
    }
}

/// Network probe reporting whether a target URL currently responds.
///
/// Implementations never fail: transport errors map to a non-2xx status.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn check(&self, url: &str) -> u16;
}

/// Error produced by a [`QrRenderer`].
#[derive(Debug, thiserror::Error)]
#[error("QR rendering failed: {0}")]
pub struct QrRenderError(pub String);

/// Renders a QR image encoding `content`.
#[cfg_attr(test, mockall::automock)]
pub trait QrRenderer: Send + Sync {
    /// MIME type of the bytes returned by [`QrRenderer::render`].
    fn content_type(&self) -> &'static str;

    fn render(&self, content: &str) -> Result<Vec<u8>, QrRenderError>;
}

/// Byte store for rendered QR images, keyed by short URL key.
///
/// Images live as long as their record; nothing expires them.
///
/// Failures are absorbed by implementations: a failed write is logged and a
/// failed read behaves as a miss.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<Vec<u8>>;

    async fn put(&self, key: &str, image: Vec<u8>);

    async fn remove(&self, key: &str);

    /// Checks if the backend is healthy.
    async fn health_check(&self) -> bool;
}
