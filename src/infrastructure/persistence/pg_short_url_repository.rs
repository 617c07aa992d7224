//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ShortUrlRow {
    hash: String,
    target_url: String,
    ip: Option<String>,
    sponsor: Option<String>,
    safe: bool,
    qr_enabled: bool,
    reachability_status: Option<i32>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        Self {
            key: row.hash,
            target_url: row.target_url,
            ip: row.ip,
            sponsor: row.sponsor,
            safe: row.safe,
            qr_enabled: row.qr_enabled,
            reachability_status: row.reachability_status.and_then(|s| u16::try_from(s).ok()),
        }
    }
}

/// PostgreSQL repository for short URL records.
///
/// The `hash` primary key backs the insert-if-absent contract of `save`.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT hash, target_url, ip, sponsor, safe, qr_enabled, reachability_status
            FROM short_urls
            WHERE hash = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn save(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (hash, target_url, ip, sponsor, safe, qr_enabled, reachability_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (hash) DO NOTHING
            RETURNING hash, target_url, ip, sponsor, safe, qr_enabled, reachability_status
            "#,
        )
        .bind(&record.key)
        .bind(&record.target_url)
        .bind(&record.ip)
        .bind(&record.sponsor)
        .bind(record.safe)
        .bind(record.qr_enabled)
        .bind(record.reachability_status.map(i32::from))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ShortUrl::from)
            .ok_or_else(|| AppError::key_already_exists(record.key))
    }

    async fn update_reachability_status(&self, key: &str, status: u16) -> Result<(), AppError> {
        sqlx::query("UPDATE short_urls SET reachability_status = $2 WHERE hash = $1")
            .bind(key)
            .bind(i32::from(status))
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_reachability_status(&self, key: &str) -> Result<Option<u16>, AppError> {
        let status: Option<Option<i32>> =
            sqlx::query_scalar("SELECT reachability_status FROM short_urls WHERE hash = $1")
                .bind(key)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(status.flatten().and_then(|s| u16::try_from(s).ok()))
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE hash = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
