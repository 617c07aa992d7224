//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    BulkService, ClickService, InProcessShortenClient, QrService, ShortUrlService, ShortenClient,
    ShortenService,
};
use crate::domain::jobs::{QrJob, ReachabilityJob};
use crate::domain::ports::{KeyHasher, QrStore, UrlValidator};
use crate::domain::queue::JobSender;
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::domain::worker_pool::WorkerPool;
use crate::utils::{HttpUrlValidator, Sha256KeyHasher};

/// Application state shared across all HTTP handlers.
///
/// Services are stored behind `Arc` and work against trait objects, so the
/// same state serves PostgreSQL and in-memory deployments.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService<dyn ShortUrlRepository>>,
    pub shorten_service: Arc<ShortenService<dyn ShortUrlRepository>>,
    pub bulk_service: Arc<BulkService>,
    pub qr_service: Arc<QrService<dyn ShortUrlRepository>>,
    pub click_service: Arc<ClickService<dyn ShortUrlRepository, dyn ClickRepository>>,
    pub qr_store: Arc<dyn QrStore>,
    /// Present only when records are persisted in PostgreSQL.
    pub db: Option<Arc<PgPool>>,
}

/// Everything [`AppState::new`] wires together.
pub struct StateParts {
    pub short_urls: Arc<dyn ShortUrlRepository>,
    pub clicks: Arc<dyn ClickRepository>,
    pub qr_store: Arc<dyn QrStore>,
    pub reachability_jobs: JobSender<ReachabilityJob>,
    pub qr_jobs: JobSender<QrJob>,
    pub base_url: String,
    /// Pool for fast bulk conversion, shared by all batches.
    pub bulk_pool: WorkerPool,
    /// Replaces the in-process client used by bulk conversion.
    pub bulk_client: Option<Arc<dyn ShortenClient>>,
    pub db: Option<Arc<PgPool>>,
}

impl AppState {
    /// Builds the service graph on top of the given stores and queues.
    pub fn new(parts: StateParts) -> Self {
        let validator: Arc<dyn UrlValidator> = Arc::new(HttpUrlValidator);
        let hasher: Arc<dyn KeyHasher> = Arc::new(Sha256KeyHasher);

        let short_url_service = Arc::new(
            ShortUrlService::new(parts.short_urls.clone(), validator, hasher)
                .with_qr_store(parts.qr_store.clone()),
        );

        let shorten_service = Arc::new(ShortenService::new(
            short_url_service.clone(),
            parts.reachability_jobs,
            parts.qr_jobs,
            parts.base_url,
        ));

        let bulk_client = parts
            .bulk_client
            .unwrap_or_else(|| Arc::new(InProcessShortenClient::new(shorten_service.clone())));
        let bulk_service = Arc::new(BulkService::new(bulk_client, parts.bulk_pool));

        let qr_service = Arc::new(QrService::new(
            parts.short_urls.clone(),
            parts.qr_store.clone(),
        ));
        let click_service = Arc::new(ClickService::new(parts.short_urls, parts.clicks));

        Self {
            short_url_service,
            shorten_service,
            bulk_service,
            qr_service,
            click_service,
            qr_store: parts.qr_store,
            db: parts.db,
        }
    }
}
