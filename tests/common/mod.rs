#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;

use qr_shortener::api::routes::api_routes;
use qr_shortener::domain::jobs::{QrJob, ReachabilityJob};
use qr_shortener::domain::ports::ReachabilityProbe;
use qr_shortener::domain::qr_worker::run_qr_worker;
use qr_shortener::domain::queue::{JobReceiver, job_queue};
use qr_shortener::domain::reachability_worker::run_reachability_worker;
use qr_shortener::domain::worker_pool::WorkerPool;
use qr_shortener::infrastructure::cache::InMemoryQrStore;
use qr_shortener::infrastructure::persistence::{
    InMemoryClickRepository, InMemoryShortUrlRepository,
};
use qr_shortener::infrastructure::qr::SvgQrRenderer;
use qr_shortener::routes::service_router;
use qr_shortener::state::{AppState, StateParts};

pub const BASE_URL: &str = "http://sho.rt";

/// In-memory application with direct access to its stores and queues.
pub struct TestApp {
    pub state: AppState,
    pub short_urls: Arc<InMemoryShortUrlRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
    pub qr_store: Arc<InMemoryQrStore>,
    pub reachability_rx: Option<JobReceiver<ReachabilityJob>>,
    pub qr_rx: Option<JobReceiver<QrJob>>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_capacity(100)
}

pub fn create_test_app_with_capacity(capacity: usize) -> TestApp {
    let short_urls = Arc::new(InMemoryShortUrlRepository::new());
    let clicks = Arc::new(InMemoryClickRepository::new());
    let qr_store = Arc::new(InMemoryQrStore::new());
    let (reachability_tx, reachability_rx) = job_queue(capacity);
    let (qr_tx, qr_rx) = job_queue(capacity);

    let state = AppState::new(StateParts {
        short_urls: short_urls.clone(),
        clicks: clicks.clone(),
        qr_store: qr_store.clone(),
        reachability_jobs: reachability_tx,
        qr_jobs: qr_tx,
        base_url: BASE_URL.to_string(),
        bulk_pool: WorkerPool::new(4),
        bulk_client: None,
        db: None,
    });

    TestApp {
        state,
        short_urls,
        clicks,
        qr_store,
        reachability_rx: Some(reachability_rx),
        qr_rx: Some(qr_rx),
    }
}

impl TestApp {
    /// Full router without rate limiting, with a fixed peer address.
    pub fn server(&self) -> TestServer {
        let app: Router = service_router(self.state.clone(), api_routes()).layer(MockConnectInfoLayer);
        TestServer::new(app).unwrap()
    }

    /// Starts both post-processing workers on one pool.
    pub fn spawn_workers(&mut self, probe_status: u16) {
        let pool = WorkerPool::new(4);

        tokio::spawn(run_reachability_worker(
            self.reachability_rx.take().unwrap(),
            self.short_urls.clone(),
            Arc::new(FixedProbe(probe_status)),
            pool.clone(),
        ));
        tokio::spawn(run_qr_worker(
            self.qr_rx.take().unwrap(),
            Arc::new(SvgQrRenderer::default()),
            self.qr_store.clone(),
            pool,
        ));
    }
}

/// Probe reporting the same status for every target.
pub struct FixedProbe(pub u16);

#[async_trait]
impl ReachabilityProbe for FixedProbe {
    async fn check(&self, _url: &str) -> u16 {
        self.0
    }
}

/// Polls `condition` until it holds or two seconds pass.
pub async fn eventually<F, Fut>(mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..200 {
        if condition().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
