//! In-process click repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Click log kept in memory, grouped by short URL key.
#[derive(Default)]
pub struct InMemoryClickRepository {
    clicks: DashMap<String, Vec<Click>>,
    next_id: AtomicI64,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn save(&self, click: NewClick) -> Result<Click, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let saved = Click::new(
            id,
            click.url_hash,
            Utc::now(),
            click.ip,
            click.browser,
            click.platform,
        );

        self.clicks
            .entry(saved.url_hash.clone())
            .or_default()
            .push(saved.clone());

        Ok(saved)
    }

    async fn find_by_url_hash(&self, url_hash: &str) -> Result<Vec<Click>, AppError> {
        Ok(self
            .clicks
            .get(url_hash)
            .map(|c| c.value().clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_click(hash: &str) -> NewClick {
        NewClick {
            url_hash: hash.to_string(),
            ip: None,
            browser: Some("Chrome".to_string()),
            platform: None,
        }
    }

    #[tokio::test]
    async fn test_clicks_grouped_by_hash() {
        let repo = InMemoryClickRepository::new();
        let first = repo.save(new_click("a")).await.unwrap();
        let second = repo.save(new_click("a")).await.unwrap();
        repo.save(new_click("b")).await.unwrap();

        assert!(second.id > first.id);

        let clicks = repo.find_by_url_hash("a").await.unwrap();
        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0].id, first.id);
        assert!(repo.find_by_url_hash("c").await.unwrap().is_empty());
    }
}
