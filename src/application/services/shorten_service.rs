//! Short URL creation followed by post-processing enqueue.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::domain::entities::{ShortUrl, ShortUrlProperties};
use crate::domain::jobs::{QrJob, ReachabilityJob};
use crate::domain::queue::JobSender;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub record: ShortUrl,
    pub short_url: String,
    /// Set only when QR generation was requested.
    pub qr_url: Option<String>,
}

/// Runs the creation engine and enqueues the follow-up jobs.
///
/// Every successful creation enqueues a [`ReachabilityJob`]; a request with
/// QR enabled additionally enqueues a [`QrJob`]. Enqueueing waits while a
/// queue is full, so this call stalls under post-processing pressure.
pub struct ShortenService<R: ShortUrlRepository + ?Sized> {
    short_urls: Arc<ShortUrlService<R>>,
    reachability_jobs: JobSender<ReachabilityJob>,
    qr_jobs: JobSender<QrJob>,
    base_url: String,
}

impl<R: ShortUrlRepository + ?Sized> ShortenService<R> {
    pub fn new(
        short_urls: Arc<ShortUrlService<R>>,
        reachability_jobs: JobSender<ReachabilityJob>,
        qr_jobs: JobSender<QrJob>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            short_urls,
            reachability_jobs,
            qr_jobs,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates the short URL and schedules its post-processing.
    ///
    /// # Errors
    ///
    /// Returns the creation errors of [`ShortUrlService::create`], or
    /// [`AppError::Internal`] if a queue has shut down.
    pub async fn shorten(
        &self,
        url: &str,
        properties: ShortUrlProperties,
    ) -> Result<ShortenOutcome, AppError> {
        let qr_requested = properties.qr_enabled;
        let record = self.short_urls.create(url, properties).await?;
        let short_url = self.short_url(&record.key);

        self.reachability_jobs
            .enqueue(ReachabilityJob {
                target_url: record.target_url.clone(),
                key: record.key.clone(),
            })
            .await?;

        let qr_url = if qr_requested {
            self.qr_jobs
                .enqueue(QrJob {
                    key: record.key.clone(),
                    short_url: short_url.clone(),
                })
                .await?;
            Some(qr_url(&short_url))
        } else {
            None
        };

        Ok(ShortenOutcome {
            record,
            short_url,
            qr_url,
        })
    }

    /// Absolute short URL for a key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    pub fn reachability_jobs(&self) -> &JobSender<ReachabilityJob> {
        &self.reachability_jobs
    }

    pub fn qr_jobs(&self) -> &JobSender<QrJob> {
        &self.qr_jobs
    }
}

/// QR image URL for a short URL.
pub fn qr_url(short_url: &str) -> String {
    format!("{short_url}/qr")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::queue::{JobReceiver, job_queue};
    use crate::domain::repositories::MockShortUrlRepository;
    use crate::utils::{HttpUrlValidator, Sha256KeyHasher};

    const URL: &str = "https://example.com/";

    fn setup(
        repo: MockShortUrlRepository,
    ) -> (
        ShortenService<MockShortUrlRepository>,
        JobReceiver<ReachabilityJob>,
        JobReceiver<QrJob>,
    ) {
        let short_urls = Arc::new(ShortUrlService::new(
            Arc::new(repo),
            Arc::new(HttpUrlValidator),
            Arc::new(Sha256KeyHasher),
        ));
        let (reach_tx, reach_rx) = job_queue(10);
        let (qr_tx, qr_rx) = job_queue(10);

        (
            ShortenService::new(short_urls, reach_tx, qr_tx, "http://localhost:8080/"),
            reach_rx,
            qr_rx,
        )
    }

    #[tokio::test]
    async fn test_enqueues_reachability_job() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_key().returning(|_| Ok(None));
        repo.expect_save().returning(Ok);

        let (service, mut reach_rx, mut qr_rx) = setup(repo);
        let outcome = service
            .shorten(URL, ShortUrlProperties::default())
            .await
            .unwrap();

        assert_eq!(outcome.short_url, "http://localhost:8080/0f115db0");
        assert!(outcome.qr_url.is_none());

        let job = reach_rx.dequeue().await.unwrap();
        assert_eq!(job.target_url, URL);
        assert_eq!(job.key, "0f115db0");

        drop(service);
        assert!(qr_rx.dequeue().await.is_none());
    }

    #[tokio::test]
    async fn test_enqueues_qr_job_when_requested() {
        let mut repo = MockShortUrlRepository::new();
        repo.expect_find_by_key().returning(|_| Ok(None));
        repo.expect_save().returning(Ok);

        let (service, _reach_rx, mut qr_rx) = setup(repo);
        let properties = ShortUrlProperties {
            alias: Some("promo".to_string()),
            qr_enabled: true,
            ..Default::default()
        };

        let outcome = service.shorten(URL, properties).await.unwrap();
        assert_eq!(
            outcome.qr_url.as_deref(),
            Some("http://localhost:8080/promo/qr")
        );

        let job = qr_rx.dequeue().await.unwrap();
        assert_eq!(job.key, "promo");
        assert_eq!(job.short_url, "http://localhost:8080/promo");
    }

    #[tokio::test]
    async fn test_failed_creation_enqueues_nothing() {
        let (service, mut reach_rx, _qr_rx) = setup(MockShortUrlRepository::new());

        let result = service
            .shorten("not-a-url", ShortUrlProperties::default())
            .await;
        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));

        assert_eq!(service.reachability_jobs().available(), 10);
        drop(service);
        assert!(reach_rx.dequeue().await.is_none());
    }
}
