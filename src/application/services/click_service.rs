//! Click logging and per-key click summaries.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::error::AppError;
use crate::utils::parse_user_agent;

/// Click counts for one short URL, grouped by client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickSummary {
    pub hash: String,
    pub total: usize,
    pub browsers: BTreeMap<String, usize>,
    pub platforms: BTreeMap<String, usize>,
}

impl ClickSummary {
    fn from_clicks(hash: &str, clicks: &[Click]) -> Self {
        let mut browsers = BTreeMap::new();
        let mut platforms = BTreeMap::new();

        for click in clicks {
            if let Some(browser) = &click.browser {
                *browsers.entry(browser.clone()).or_insert(0) += 1;
            }
            if let Some(platform) = &click.platform {
                *platforms.entry(platform.clone()).or_insert(0) += 1;
            }
        }

        Self {
            hash: hash.to_string(),
            total: clicks.len(),
            browsers,
            platforms,
        }
    }
}

pub struct ClickService<R: ShortUrlRepository + ?Sized, C: ClickRepository + ?Sized> {
    short_urls: Arc<R>,
    clicks: Arc<C>,
}

impl<R, C> ClickService<R, C>
where
    R: ShortUrlRepository + ?Sized,
    C: ClickRepository + ?Sized,
{
    pub fn new(short_urls: Arc<R>, clicks: Arc<C>) -> Self {
        Self { short_urls, clicks }
    }

    /// Records a followed redirect.
    ///
    /// Browser and platform are derived from the raw user-agent header.
    pub async fn log_click(
        &self,
        key: &str,
        ip: Option<String>,
        user_agent: Option<&str>,
    ) -> Result<Click, AppError> {
        let client = parse_user_agent(user_agent);

        self.clicks
            .save(NewClick {
                url_hash: key.to_string(),
                ip,
                browser: client.browser,
                platform: client.platform,
            })
            .await
    }

    /// Summarises the clicks recorded for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no short URL has this key.
    pub async fn summary(&self, key: &str) -> Result<ClickSummary, AppError> {
        if self.short_urls.find_by_key(key).await?.is_none() {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "key": key }),
            ));
        }

        let clicks = self.clicks.find_by_url_hash(key).await?;
        Ok(ClickSummary::from_clicks(key, &clicks))
    }
}
