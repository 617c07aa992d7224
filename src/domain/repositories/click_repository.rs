//! Repository trait for click events.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only storage for [`Click`] events, queried by short URL key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, click: NewClick) -> Result<Click, AppError>;

    /// Returns every click recorded for a key, oldest first.
    async fn find_by_url_hash(&self, url_hash: &str) -> Result<Vec<Click>, AppError>;
}
