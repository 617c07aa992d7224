//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ClickRow {
    id: i64,
    url_hash: String,
    clicked_at: DateTime<Utc>,
    ip: Option<String>,
    browser: Option<String>,
    platform: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::new(
            row.id,
            row.url_hash,
            row.clicked_at,
            row.ip,
            row.browser,
            row.platform,
        )
    }
}

/// PostgreSQL repository for the redirect click log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn save(&self, click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (url_hash, ip, browser, platform)
            VALUES ($1, $2, $3, $4)
            RETURNING id, url_hash, clicked_at, ip, browser, platform
            "#,
        )
        .bind(&click.url_hash)
        .bind(&click.ip)
        .bind(&click.browser)
        .bind(&click.platform)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_url_hash(&self, url_hash: &str) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, url_hash, clicked_at, ip, browser, platform
            FROM clicks
            WHERE url_hash = $1
            ORDER BY clicked_at, id
            "#,
        )
        .bind(url_hash)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}
