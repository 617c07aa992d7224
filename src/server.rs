//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, queue and worker spawning, and the
//! Axum server lifecycle.

use crate::application::services::ShortenClient;
use crate::config::Config;
use crate::domain::ports::QrStore;
use crate::domain::qr_worker::run_qr_worker;
use crate::domain::queue::job_queue;
use crate::domain::reachability_worker::run_reachability_worker;
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::domain::worker_pool::WorkerPool;
use crate::infrastructure::cache::{InMemoryQrStore, RedisQrStore};
use crate::infrastructure::http::{HttpReachabilityProbe, HttpShortenClient};
use crate::infrastructure::persistence::{
    InMemoryClickRepository, InMemoryShortUrlRepository, PgClickRepository, PgShortUrlRepository,
};
use crate::infrastructure::qr::SvgQrRenderer;
use crate::routes::app_router;
use crate::state::{AppState, StateParts};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL pool and migrations, or in-memory repositories
/// - Redis QR store (or in-memory fallback)
/// - Reachability and QR queues with their workers on a shared pool
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - An HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let db = match &config.database_url {
        Some(url) => Some(Arc::new(connect_database(url, &config).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set, records are kept in memory");
            None
        }
    };

    let (short_urls, clicks): (Arc<dyn ShortUrlRepository>, Arc<dyn ClickRepository>) =
        match &db {
            Some(pool) => (
                Arc::new(PgShortUrlRepository::new(pool.clone())),
                Arc::new(PgClickRepository::new(pool.clone())),
            ),
            None => (
                Arc::new(InMemoryShortUrlRepository::new()),
                Arc::new(InMemoryClickRepository::new()),
            ),
        };

    let qr_store = connect_qr_store(&config).await;

    let (reachability_tx, reachability_rx) = job_queue(config.job_queue_capacity);
    let (qr_tx, qr_rx) = job_queue(config.job_queue_capacity);
    let worker_pool = WorkerPool::new(config.worker_pool_size);

    let probe = Arc::new(
        HttpReachabilityProbe::new(Duration::from_secs(config.reachability_timeout_seconds))
            .context("Failed to build reachability HTTP client")?,
    );
    tokio::spawn(run_reachability_worker(
        reachability_rx,
        short_urls.clone(),
        probe,
        worker_pool.clone(),
    ));
    tracing::info!("Reachability worker started");

    tokio::spawn(run_qr_worker(
        qr_rx,
        Arc::new(SvgQrRenderer::default()),
        qr_store.clone(),
        worker_pool,
    ));
    tracing::info!("QR worker started");

    let bulk_client: Option<Arc<dyn ShortenClient>> = match &config.bulk_api_url {
        Some(url) => {
            tracing::info!("Bulk rows are shortened through {}", url);
            Some(Arc::new(
                HttpShortenClient::new(
                    url,
                    Duration::from_secs(config.reachability_timeout_seconds.saturating_mul(2)),
                )
                .context("Failed to build bulk HTTP client")?,
            ))
        }
        None => None,
    };

    let state = AppState::new(StateParts {
        short_urls,
        clicks,
        qr_store,
        reachability_jobs: reachability_tx,
        qr_jobs: qr_tx,
        base_url: config.base_url.clone(),
        bulk_pool: WorkerPool::new(config.bulk_concurrency),
        bulk_client,
        db,
    });

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn connect_database(url: &str, config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}

async fn connect_qr_store(config: &Config) -> Arc<dyn QrStore> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("QR store: in-memory");
        return Arc::new(InMemoryQrStore::new());
    };

    match RedisQrStore::connect(redis_url).await {
        Ok(redis) => {
            tracing::info!("QR store: Redis");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using in-memory QR store.", e);
            Arc::new(InMemoryQrStore::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
