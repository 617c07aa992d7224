//! Bulk shortening of row-oriented CSV payloads.
//!
//! Each row is `target,alias,qrFlag`. A payload first passes a coarse shape
//! check on its comma count; rows are then shortened one by one, either
//! sequentially or on the shared bulk pool. A failing row is replaced by a
//! sentinel and never aborts the batch.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::services::ShortenService;
use crate::application::services::shorten_service::qr_url;
use crate::domain::entities::ShortUrlProperties;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::worker_pool::WorkerPool;
use crate::error::AppError;

/// Row output when the target URL is rejected.
pub const INVALID_URL_ROW: &str = "invalid_url\n";

/// Row output for every other per-row failure.
pub const CONVERSION_ERROR_ROW: &str = "conversion_error\n";

/// Structural problems that reject a whole payload before any row runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CsvShapeError {
    #[error("Invalid CSV: missing commas, the amount of commas must be 2 per line")]
    MissingCommas,

    #[error("Invalid CSV: too many commas in a line, should be 2 per line")]
    TooManyCommas,
}

/// Outcome of a bulk conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The payload was empty or blank.
    Empty,
    Rejected(CsvShapeError),
    /// Converted rows, in input order.
    Converted(String),
}

impl BulkOutcome {
    /// Text body reported to the caller.
    pub fn into_csv(self) -> String {
        match self {
            BulkOutcome::Empty => String::new(),
            BulkOutcome::Rejected(e) => e.to_string(),
            BulkOutcome::Converted(csv) => csv,
        }
    }
}

/// Boundary through which the bulk pipeline creates each short URL.
#[async_trait]
pub trait ShortenClient: Send + Sync {
    /// Shortens one URL and returns its absolute short URL.
    ///
    /// An empty alias means no alias.
    async fn shorten(&self, url: &str, alias: &str, qr_enabled: bool)
    -> Result<String, AppError>;
}

/// [`ShortenClient`] calling [`ShortenService`] in the same process.
pub struct InProcessShortenClient<R: ShortUrlRepository + ?Sized> {
    shorten_service: Arc<ShortenService<R>>,
}

impl<R: ShortUrlRepository + ?Sized> InProcessShortenClient<R> {
    pub fn new(shorten_service: Arc<ShortenService<R>>) -> Self {
        Self { shorten_service }
    }
}

#[async_trait]
impl<R: ShortUrlRepository + ?Sized> ShortenClient for InProcessShortenClient<R> {
    async fn shorten(
        &self,
        url: &str,
        alias: &str,
        qr_enabled: bool,
    ) -> Result<String, AppError> {
        let properties = ShortUrlProperties {
            alias: Some(alias.to_string()),
            qr_enabled,
            ..Default::default()
        };

        let outcome = self.shorten_service.shorten(url, properties).await?;
        Ok(outcome.short_url)
    }
}

/// Service converting CSV payloads into shortened CSV.
pub struct BulkService {
    client: Arc<dyn ShortenClient>,
    pool: WorkerPool,
}

impl BulkService {
    /// Creates a bulk service whose concurrent mode runs on `pool`.
    ///
    /// The pool is shared by every batch. When it is saturated, row
    /// submission waits for a free slot.
    pub fn new(client: Arc<dyn ShortenClient>, pool: WorkerPool) -> Self {
        Self { client, pool }
    }

    /// Converts the payload one row at a time, in order.
    pub async fn convert(&self, csv: &str) -> BulkOutcome {
        let rows = match check_shape(csv) {
            Ok(Some(rows)) => rows,
            Ok(None) => return BulkOutcome::Empty,
            Err(e) => return BulkOutcome::Rejected(e),
        };

        let mut output = String::new();
        for row in rows {
            output.push_str(&shorten_row(self.client.as_ref(), row).await);
        }

        BulkOutcome::Converted(output)
    }

    /// Converts every row concurrently on the bulk pool.
    ///
    /// Rows are submitted in input order and their results are awaited in
    /// submission order, so the output order matches the input even though
    /// rows finish in any order.
    pub async fn convert_fast(&self, csv: &str) -> BulkOutcome {
        let rows = match check_shape(csv) {
            Ok(Some(rows)) => rows,
            Ok(None) => return BulkOutcome::Empty,
            Err(e) => return BulkOutcome::Rejected(e),
        };

        let mut pending = Vec::with_capacity(rows.len());
        for row in rows {
            let client = self.client.clone();
            let row = row.to_string();
            pending.push(
                self.pool
                    .submit(async move { shorten_row(client.as_ref(), &row).await })
                    .await,
            );
        }
        debug!("Submitted {} rows to the bulk pool", pending.len());

        let mut output = String::new();
        for handle in pending {
            match handle.await {
                Ok(row) => output.push_str(&row),
                Err(e) => {
                    warn!("Bulk row task failed: {}", e);
                    output.push_str(CONVERSION_ERROR_ROW);
                }
            }
        }

        BulkOutcome::Converted(output)
    }
}

/// Validates the payload shape and splits it into rows.
///
/// Returns `Ok(None)` for an empty or blank payload. The comma count must be
/// even, non-zero, and at most two per row (rows = newlines + 1).
pub fn check_shape(csv: &str) -> Result<Option<Vec<&str>>, CsvShapeError> {
    if csv.trim().is_empty() {
        return Ok(None);
    }

    let commas = csv.matches(',').count();
    if commas == 0 || commas % 2 != 0 {
        return Err(CsvShapeError::MissingCommas);
    }

    let rows = csv.matches('\n').count() + 1;
    if commas > 2 * rows {
        return Err(CsvShapeError::TooManyCommas);
    }

    Ok(Some(csv.split('\n').collect()))
}

/// Shortens a single row, substituting a sentinel on failure.
///
/// A blank row produces no output.
async fn shorten_row(client: &dyn ShortenClient, row: &str) -> String {
    let row = row.trim_end_matches('\r');
    if row.trim().is_empty() {
        return String::new();
    }

    let mut cells = row.split(',');
    let target = cells.next().unwrap_or_default();
    let alias = cells.next().unwrap_or_default();
    let qr_enabled = cells
        .next()
        .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("true"));

    match client.shorten(target, alias, qr_enabled).await {
        Ok(short_url) if qr_enabled => {
            format!("{target},{short_url},{}\n", qr_url(&short_url))
        }
        Ok(short_url) => format!("{target},{short_url}\n"),
        Err(AppError::InvalidUrl { .. }) => INVALID_URL_ROW.to_string(),
        Err(e) => {
            debug!("Row {:?} failed: {}", row, e);
            CONVERSION_ERROR_ROW.to_string()
        }
    }
}
